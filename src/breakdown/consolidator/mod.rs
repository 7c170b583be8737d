pub mod aggregate;
pub mod consolidate;
pub mod error;
pub mod format;
pub mod io;
pub mod model;
pub mod numeric;
pub mod tokenize;

pub use error::{ConsolidateError, ConsolidateErrorKind, Result, ToolError};
