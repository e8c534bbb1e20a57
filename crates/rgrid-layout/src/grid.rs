//! Assignment of a flat element list onto grid cells.
//!
//! Elements fill the grid row by row. Cells are stored in one flat vector
//! indexed by `row * columns + column`; an element is referred to by its
//! index in the host's element list.

use rgrid_core::Axis;
use tracing::warn;

/// Elements whose cells fall in one column (or row).
pub type Membership = Vec<usize>;

/// Cell occupancy and per-axis membership for one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    columns: usize,
    rows: usize,
    cells: Vec<Option<usize>>,
    column_members: Vec<Membership>,
    row_members: Vec<Membership>,
    dropped: usize,
}

impl CellGrid {
    /// Place `element_count` elements into a `columns` x `rows` grid.
    ///
    /// Short lists leave trailing cells empty; elements past the last cell
    /// are ignored.
    pub fn assign(element_count: usize, columns: usize, rows: usize) -> Self {
        let capacity = columns.saturating_mul(rows);
        let placed = element_count.min(capacity);

        let mut cells = vec![None; capacity];
        let mut column_members = vec![Membership::new(); columns];
        let mut row_members = vec![Membership::new(); rows];

        for element in 0..placed {
            let (row, column) = (element / columns, element % columns);
            cells[element] = Some(element);
            column_members[column].push(element);
            row_members[row].push(element);
        }

        let dropped = element_count - placed;
        if dropped > 0 {
            warn!(dropped, columns, rows, "grid is full, ignoring extra elements");
        }

        Self {
            columns,
            rows,
            cells,
            column_members,
            row_members,
            dropped,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Element occupying a cell, if any.
    pub fn get(&self, column: usize, row: usize) -> Option<usize> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    /// Membership of every column (or row), in index order.
    pub fn membership(&self, axis: Axis) -> &[Membership] {
        match axis {
            Axis::Columns => &self.column_members,
            Axis::Rows => &self.row_members,
        }
    }

    /// Elements in column (or row) `index`.
    pub fn members(&self, axis: Axis, index: usize) -> &[usize] {
        self.membership(axis).get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Occupied cells as `(column, row, element)`, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|element| (i % columns, i / columns, element)))
    }

    /// Number of elements that did not fit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
