//! HTML parsing of match report pages.

mod grid;
mod locator;

pub use locator::{MatchPage, locate_tables, parse_table};
