pub mod audience;
pub mod builder;
pub mod templates;

pub use audience::audience_instructions;
pub use builder::build_prompt;
pub use templates::Genre;
