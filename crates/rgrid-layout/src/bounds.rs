//! Conversion of resolved track sizes into cell rectangles.

use glam::IVec2;
use rgrid_core::Rect;

use crate::grid::CellGrid;
use crate::resolve::ResolvedAxis;

/// The rectangle computed for one occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    /// Index of the element in the host's element list
    pub element: usize,
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
}

/// Compute one rectangle per occupied cell, in row-major order.
///
/// A cell at `(c, r)` starts at the summed widths of columns `0..c` and the
/// summed heights of rows `0..r`. Empty cells produce nothing.
pub fn compute_bounds(columns: &ResolvedAxis, rows: &ResolvedAxis, grid: &CellGrid) -> Vec<CellBounds> {
    let xs = columns.offsets();
    let ys = rows.offsets();

    grid.occupied()
        .filter_map(|(column, row, element)| {
            let origin = IVec2::new(*xs.get(column)?, *ys.get(row)?);
            let extent = IVec2::new(columns.get(column)?, rows.get(row)?);
            let rect = Rect::from_vecs(origin, extent);
            Some(CellBounds { element, column, row, rect })
        })
        .collect()
}
