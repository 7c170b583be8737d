//! Filesystem adapters around the in-memory consolidation core.

pub mod csv_read;
pub mod summary_write;
