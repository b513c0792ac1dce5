pub mod error;
pub mod output;
pub mod types;

pub use types::{FileOutcome, FileReport};
