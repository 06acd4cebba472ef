//! Street-type abbreviation tables for geocoding pipelines.
//!
//! Each supported language ships a table of token groups. One group
//! collects the spelling variants of a single address word ("avenida",
//! "avda", "av") together with its designated long and short forms.
//! Tables are static data authored offline; this crate loads, derives
//! and validates them but never computes them at query time.

pub mod error;
pub mod generate;
pub mod io_utils;
pub mod table;
pub mod types;

pub use error::TableError;
pub use generate::{build_table, group_from_variants, validate_table, GroupSpec};
pub use table::{parse_table, TokenTables, LANGUAGES};
pub use types::{TokenGroup, TokenType};
