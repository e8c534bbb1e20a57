//! The grid layout façade: parse once, lay out many times.

use rgrid_core::{Axis, AxisSpec, Insets, ParseError, Size};
use rgrid_parser::parse_axis;
use tracing::{debug, trace};

use crate::bounds::{compute_bounds, CellBounds};
use crate::grid::CellGrid;
use crate::host::{BoundsSink, ExtentProvider};
use crate::resolve::{resolve_detailed, AxisResolution, ResolvedAxis};

/// The area a layout pass fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Container {
    /// Outer size of the container
    pub size: Size,
    /// Border space excluded from the grid
    pub insets: Insets,
}

impl Container {
    pub fn new(size: Size) -> Self {
        Self { size, insets: Insets::default() }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Space left for the grid once insets are removed.
    pub fn available(&self) -> Size {
        self.size.inset(self.insets)
    }
}

/// Everything one layout pass produces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridLayoutResult {
    pub columns: ResolvedAxis,
    pub rows: ResolvedAxis,
    /// One entry per occupied cell, row-major
    pub cells: Vec<CellBounds>,
}

/// A grid whose column widths and row heights come from size expressions.
///
/// Elements fill the cells row by row; each element gets the full rectangle
/// of its cell. The layout holds only the parsed specifications, so every
/// pass starts from scratch and `&self` methods may be called repeatedly.
/// Hosts that lay out the same container from several threads must
/// serialize those passes themselves.
///
/// # Example
///
/// ```
/// use rgrid_core::{Axis, ExtentKind, Size};
/// use rgrid_layout::{ExtentFn, RGridLayout};
///
/// let grid = RGridLayout::new("10 + P, *", "10%, 50, *, M").unwrap();
/// assert_eq!(grid.dimensions(), (2, 4));
///
/// let extents = ExtentFn(|_: &u32, _: ExtentKind, _: Axis| 20);
/// let result = grid.compute(Size::new(300, 400), &[1, 2, 3], &extents);
/// assert_eq!(result.columns.sizes(), &[30, 270]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RGridLayout {
    columns: AxisSpec,
    rows: AxisSpec,
}

impl RGridLayout {
    /// Parse column and row specifications.
    pub fn new(columns: &str, rows: &str) -> Result<Self, ParseError> {
        Ok(Self::from_axes(parse_axis(columns)?, parse_axis(rows)?))
    }

    pub fn from_axes(columns: AxisSpec, rows: AxisSpec) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &AxisSpec {
        &self.columns
    }

    pub fn rows(&self) -> &AxisSpec {
        &self.rows
    }

    pub fn axis(&self, axis: Axis) -> &AxisSpec {
        match axis {
            Axis::Columns => &self.columns,
            Axis::Rows => &self.rows,
        }
    }

    /// `(columns, rows)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns.len(), self.rows.len())
    }

    /// Place `element_count` elements into this grid's cells.
    pub fn assign(&self, element_count: usize) -> CellGrid {
        let (columns, rows) = self.dimensions();
        CellGrid::assign(element_count, columns, rows)
    }

    /// Resolve one axis against an existing cell assignment.
    pub fn resolve_axis<E, P>(
        &self,
        axis: Axis,
        total_size: i32,
        elements: &[E],
        grid: &CellGrid,
        extents: &P,
    ) -> AxisResolution
    where
        P: ExtentProvider<E> + ?Sized,
    {
        let resolution = resolve_detailed(self.axis(axis), total_size, grid.membership(axis), |e, kind| {
            extents.extent(&elements[e], kind, axis)
        });
        trace!(axis = axis.name(), sizes = ?resolution.sizes.sizes(), "axis resolved");
        resolution
    }

    /// Run a full pass over `available` space and return the rectangles.
    pub fn compute<E, P>(&self, available: Size, elements: &[E], extents: &P) -> GridLayoutResult
    where
        P: ExtentProvider<E> + ?Sized,
    {
        let grid = self.assign(elements.len());
        debug!(
            width = available.width,
            height = available.height,
            elements = elements.len(),
            columns = grid.columns(),
            rows = grid.rows(),
            "grid layout pass"
        );

        let columns = self.resolve_axis(Axis::Columns, available.width, elements, &grid, extents).sizes;
        let rows = self.resolve_axis(Axis::Rows, available.height, elements, &grid, extents).sizes;
        let cells = compute_bounds(&columns, &rows, &grid);

        GridLayoutResult { columns, rows, cells }
    }

    /// Lay out `elements` inside `container`, handing each occupied cell's
    /// rectangle to `sink`. Returns the number of rectangles assigned.
    ///
    /// A pass over an empty element list does nothing.
    pub fn layout<E, P, S>(&self, container: Container, elements: &[E], extents: &P, sink: &mut S) -> usize
    where
        P: ExtentProvider<E> + ?Sized,
        S: BoundsSink<E> + ?Sized,
    {
        if elements.is_empty() {
            return 0;
        }

        let result = self.compute(container.available(), elements, extents);
        for cell in &result.cells {
            sink.assign(&elements[cell.element], cell.rect);
        }
        result.cells.len()
    }
}
