//! Shared utilities for the harvester crates.
//!
//! This crate provides the Polars helpers used by both the normalizer and
//! the exporters: cell text conversion, numeric parsing and construction of
//! nullable string columns.

pub mod polars;

pub use polars::{
    any_to_string, any_to_string_opt, format_numeric, null_string_column, parse_f64, parse_i64,
    string_column,
};
