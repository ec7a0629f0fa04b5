// crates/core/src/lib.rs
pub use error::{FilterError, Result};

pub mod error;
pub mod factorial;
pub mod parse;
pub mod reverse;
pub mod tokens;
