//! Core library for the breakdown-consolidator command line application.
//!
//! The library merges comma-delimited breakdown tables into a single summary
//! of per-label totals and averages. Parsing lives in
//! [`breakdown::consolidator::tokenize`] and [`breakdown::consolidator::numeric`], the
//! merge itself in [`breakdown::consolidator::aggregate`], rendering in
//! [`breakdown::consolidator::format`], and file handling under
//! [`breakdown::consolidator::io`] and [`breakdown::consolidator::consolidate`].

pub mod breakdown;

pub use breakdown::consolidator::{
    ConsolidateError, ConsolidateErrorKind, Result, ToolError, aggregate, consolidate, error,
    format, io, model, numeric, tokenize,
};
