pub mod clean;
pub mod dedup;
pub mod domain;
pub mod error;

pub use clean::NameCleaner;
pub use dedup::{partition, Batch};
pub use domain::*;
pub use error::CoreError;
