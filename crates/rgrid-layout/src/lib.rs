//! Size resolution and cell layout for relative grids.
//!
//! A grid is declared with one size expression per column and per row (see
//! `rgrid-parser` for the syntax). Each layout pass:
//!
//! 1. **Assigns** the host's elements to cells, row by row
//! 2. **Resolves** column widths and row heights independently, mixing
//!    fixed pixels, percentages of the leftover space, the largest
//!    preferred/minimum extent of the elements in a track, and `*` shares
//! 3. **Emits** one rectangle per occupied cell
//!
//! # Example
//!
//! ```
//! use rgrid_core::{Rect, Size};
//! use rgrid_layout::{Container, HintExtents, RGridLayout, SizeHints};
//!
//! let grid = RGridLayout::new("100, *", "P, *")?;
//! let elements = vec![SizeHints::fixed(Size::new(80, 24)); 4];
//!
//! let mut rects = Vec::new();
//! grid.layout(
//!     Container::new(Size::new(400, 300)),
//!     &elements,
//!     &HintExtents,
//!     &mut |_: &SizeHints, rect: Rect| rects.push(rect),
//! );
//!
//! assert_eq!(rects[3], Rect::new(100, 24, 300, 276));
//! # Ok::<(), rgrid_core::ParseError>(())
//! ```

mod bounds;
mod config;
mod grid;
mod host;
mod layout;
mod resolve;

pub use bounds::{compute_bounds, CellBounds};
pub use config::GridSpec;
pub use grid::{CellGrid, Membership};
pub use host::{BoundsSink, ExtentFn, ExtentProvider, HintExtents, SizeHints};
pub use layout::{Container, GridLayoutResult, RGridLayout};
pub use resolve::{resolve, resolve_detailed, AxisResolution, ResolvedAxis};
