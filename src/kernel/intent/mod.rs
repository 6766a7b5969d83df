pub mod classifier;
pub mod types;

pub use classifier::classify;
pub use types::*;
