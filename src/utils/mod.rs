pub mod error;
pub mod fs;

pub use error::{BoxResult, IndexError};
