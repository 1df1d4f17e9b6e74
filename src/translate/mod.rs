pub mod interface;
pub mod service;

pub use interface::*;
pub use service::TranslationService;
