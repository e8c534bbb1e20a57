//! Parser for relative grid size specifications.
//!
//! An axis specification lists one size expression per column (or row),
//! separated by `,`, `;` or `|`. Each expression sums one or more terms
//! joined with `+`:
//!
//! - `30` - fixed width in pixels
//! - `10%` - percentage of the flexible (leftover) space
//! - `P` - largest preferred extent of the elements in that column/row
//! - `M` - same as `P`, using minimum extents
//! - `*` - equal share of whatever percentage is left over
//!
//! # Example
//!
//! ```
//! use rgrid_parser::parse_axis;
//!
//! let columns = parse_axis("10 + P, *").unwrap();
//! assert_eq!(columns.len(), 2);
//! assert_eq!(columns.to_string(), "10+P,*");
//! ```

mod lexer;
mod grammar;

pub use grammar::{classify, parse_axis};
