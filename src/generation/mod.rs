pub mod factory;
pub mod gemini;
pub mod interface;
pub mod invoker;
#[cfg(test)]
pub mod mock;

pub use factory::GeneratorFactory;
pub use interface::*;
pub use invoker::GenerationInvoker;
