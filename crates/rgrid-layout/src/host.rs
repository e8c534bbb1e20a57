//! Capabilities the layout engine borrows from its host.
//!
//! The engine never owns elements. It asks an [`ExtentProvider`] how big an
//! element wants to be and hands finished rectangles to a [`BoundsSink`].

use rgrid_core::{Axis, ExtentKind, Rect, Size};

/// Measures elements along an axis.
///
/// Extents are non-negative pixel sizes: width for [`Axis::Columns`],
/// height for [`Axis::Rows`].
pub trait ExtentProvider<E: ?Sized> {
    fn preferred_extent(&self, element: &E, axis: Axis) -> i32;

    fn minimum_extent(&self, element: &E, axis: Axis) -> i32;

    /// Dispatch on the extent a size term asks for.
    fn extent(&self, element: &E, kind: ExtentKind, axis: Axis) -> i32 {
        match kind {
            ExtentKind::Preferred => self.preferred_extent(element, axis),
            ExtentKind::Minimum => self.minimum_extent(element, axis),
        }
    }
}

impl<E: ?Sized, P: ExtentProvider<E> + ?Sized> ExtentProvider<E> for &P {
    fn preferred_extent(&self, element: &E, axis: Axis) -> i32 {
        (**self).preferred_extent(element, axis)
    }

    fn minimum_extent(&self, element: &E, axis: Axis) -> i32 {
        (**self).minimum_extent(element, axis)
    }
}

/// Adapts a closure `(element, kind, axis) -> extent` into a provider.
#[derive(Debug, Clone, Copy)]
pub struct ExtentFn<F>(pub F);

impl<E: ?Sized, F> ExtentProvider<E> for ExtentFn<F>
where
    F: Fn(&E, ExtentKind, Axis) -> i32,
{
    fn preferred_extent(&self, element: &E, axis: Axis) -> i32 {
        (self.0)(element, ExtentKind::Preferred, axis)
    }

    fn minimum_extent(&self, element: &E, axis: Axis) -> i32 {
        (self.0)(element, ExtentKind::Minimum, axis)
    }

    fn extent(&self, element: &E, kind: ExtentKind, axis: Axis) -> i32 {
        (self.0)(element, kind, axis)
    }
}

/// Pre-measured preferred and minimum sizes of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeHints {
    pub preferred: Size,
    pub minimum: Size,
}

impl SizeHints {
    pub const fn new(preferred: Size, minimum: Size) -> Self {
        Self { preferred, minimum }
    }

    /// An element whose minimum equals its preferred size.
    pub const fn fixed(size: Size) -> Self {
        Self::new(size, size)
    }
}

/// Reads extents straight out of [`SizeHints`] elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct HintExtents;

impl ExtentProvider<SizeHints> for HintExtents {
    fn preferred_extent(&self, element: &SizeHints, axis: Axis) -> i32 {
        element.preferred.along(axis)
    }

    fn minimum_extent(&self, element: &SizeHints, axis: Axis) -> i32 {
        element.minimum.along(axis)
    }
}

/// Receives one rectangle per occupied cell.
pub trait BoundsSink<E: ?Sized> {
    fn assign(&mut self, element: &E, rect: Rect);
}

impl<E: ?Sized, F> BoundsSink<E> for F
where
    F: FnMut(&E, Rect),
{
    fn assign(&mut self, element: &E, rect: Rect) {
        self(element, rect)
    }
}
