//! Parsers for the text output of CDO information operators
//!
//! This module turns the captured standard output of one CDO invocation into
//! a typed record. Each output shape has its own parser type; all of them
//! implement [`OutputParser`] so new formats can be added without touching
//! existing code.
//!
//! ## Architecture
//!
//! The parsers are organized into logical components:
//! - [`field_parsers`] - Token-level helpers (scalar coercion, de-quoting, arrays)
//! - [`description`] - Shared `key = value` block reader for grid and z-axis text
//! - [`griddes`] - Grid descriptions (`griddes`, `griddes2`)
//! - [`zaxisdes`] - Vertical axis descriptions (`zaxisdes`)
//! - [`sinfo`] - Dataset summaries (`sinfo`, `info` and variants)
//! - [`time_axis`] - Time section reader and resolution inference
//! - [`attributes`] - Global and per-variable attribute dumps
//! - [`tables`] - Parameter tables, vertical coordinate tables, variable lists
//!
//! ## Failure model
//!
//! Only the grid and z-axis parsers fail, and only when the text holds no
//! description block at all. Everything else degrades: unreadable numbers are
//! dropped, missing sections come back empty.
//!
//! ## Usage
//!
//! ```rust
//! use cdo_output::app::services::cdo_output_parser::{GriddesParser, OutputParser};
//!
//! # fn example() -> cdo_output::Result<()> {
//! let text = "gridtype  = lonlat\ngridsize  = 64800\nxsize     = 360\nysize     = 180\n";
//! let description = GriddesParser::new().parse(text)?;
//!
//! assert_eq!(description.ngrids(), 1);
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod description;
pub mod field_parsers;
pub mod griddes;
pub mod sinfo;
pub mod tables;
pub mod time_axis;
pub mod zaxisdes;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use attributes::{ShowattsParser, ShowattsglobParser};
pub use griddes::GriddesParser;
pub use sinfo::SinfoParser;
pub use tables::{PartabParser, VctParser, VlistParser};
pub use time_axis::Calendar;
pub use zaxisdes::ZaxisdesParser;

/// Common capability of every output parser
///
/// Parsers are stateless between calls: the same text always gives a
/// structurally equal record.
pub trait OutputParser {
    /// Record produced from one block of output
    type Output;

    /// Short name used in error messages and logs
    const NAME: &'static str;

    /// Parse the verbatim output of one operator invocation
    fn parse(&self, output: &str) -> crate::Result<Self::Output>;
}
