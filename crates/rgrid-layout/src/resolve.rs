//! Size resolution for one axis.
//!
//! Resolution runs five passes over every term of every composite:
//!
//! 1. **Dependent terms**: `P`/`M` take the largest preferred/minimum
//!    extent among the composite's member elements (0 when it has none).
//! 2. **Fixed total**: fixed and dependent values are summed and subtracted
//!    from the available size, leaving the flexible remainder.
//! 3. **Star percentage**: the percentage not claimed by `N%` terms is split
//!    evenly across the `*` terms.
//! 4. **Spread**: every `N%` and `*` term takes `floor(remainder * pct / 100)`.
//! 5. **Sum**: each composite's size is the sum of its term values.
//!
//! Over-subscribed axes are not clamped: a negative remainder or a negative
//! star percentage flows straight through into the sizes. Truncation can
//! leave a few pixels of the available size unused; they are not
//! redistributed.

use smallvec::SmallVec;
use tracing::{debug, trace};

use rgrid_core::{AxisSpec, ExtentKind, SizeTerm};

use crate::grid::Membership;

/// Final pixel size of each column (or row), in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedAxis {
    sizes: Vec<i32>,
}

impl ResolvedAxis {
    pub fn new(sizes: Vec<i32>) -> Self {
        Self { sizes }
    }

    pub fn sizes(&self) -> &[i32] {
        &self.sizes
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.sizes.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sum of all sizes.
    pub fn total(&self) -> i64 {
        self.sizes.iter().map(|&s| i64::from(s)).sum()
    }

    /// Start offset of each track: the sum of the sizes before it.
    pub fn offsets(&self) -> Vec<i32> {
        let mut offsets = Vec::with_capacity(self.sizes.len());
        let mut current = 0i32;
        for &size in &self.sizes {
            offsets.push(current);
            current = current.saturating_add(size);
        }
        offsets
    }
}

impl From<ResolvedAxis> for Vec<i32> {
    fn from(axis: ResolvedAxis) -> Self {
        axis.sizes
    }
}

/// Every intermediate value of one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisResolution {
    /// Resolved value of each term, grouped by composite
    pub term_values: Vec<SmallVec<[i32; 4]>>,
    /// Sum of the fixed and dependent terms
    pub fixed_total: i64,
    /// Available size minus `fixed_total`; may be negative
    pub remainder: i64,
    /// Share given to each `*` term, `None` when the axis has none
    pub star_percentage: Option<f64>,
    /// Final sizes
    pub sizes: ResolvedAxis,
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Resolve an axis and keep the per-phase values.
///
/// `membership[i]` lists the elements in composite `i`; `extent` measures an
/// element along the axis being resolved.
pub fn resolve_detailed<F>(
    spec: &AxisSpec,
    total_size: i32,
    membership: &[Membership],
    mut extent: F,
) -> AxisResolution
where
    F: FnMut(usize, ExtentKind) -> i32,
{
    // Phase 1: fixed and dependent values; relative terms wait for phase 4.
    let mut term_values: Vec<SmallVec<[i32; 4]>> = spec
        .iter()
        .enumerate()
        .map(|(index, composite)| {
            let members = membership.get(index).map(Vec::as_slice).unwrap_or(&[]);
            composite
                .iter()
                .map(|term| match (term, term.extent_kind()) {
                    (_, Some(kind)) => members.iter().map(|&e| extent(e, kind)).fold(0, i32::max),
                    (SizeTerm::Fixed(px), None) => *px,
                    _ => 0,
                })
                .collect()
        })
        .collect();

    // Phase 2
    let fixed_total: i64 = spec
        .iter()
        .zip(&term_values)
        .flat_map(|(composite, values)| composite.iter().zip(values.iter()))
        .filter(|(term, _)| term.is_fixed_size())
        .map(|(_, &value)| i64::from(value))
        .sum();
    let remainder = i64::from(total_size) - fixed_total;
    trace!(total_size, fixed_total, remainder, "fixed terms aggregated");

    // Phase 3
    let star_count = spec.remainder_count();
    let declared_percent = spec.declared_percent_total();
    let star_percentage = (star_count > 0).then(|| (100.0 - declared_percent) / star_count as f64);
    trace!(star_count, declared_percent, ?star_percentage, "star percentage computed");

    if remainder < 0 || star_percentage.is_some_and(|pct| pct < 0.0) {
        debug!(remainder, ?star_percentage, "axis is over-subscribed");
    }

    // Phase 4: divide last so whole-pixel shares floor exactly.
    let star_share = remainder as f64 * (100.0 - declared_percent) / (100.0 * star_count as f64);
    for (composite, values) in spec.iter().zip(term_values.iter_mut()) {
        for (term, value) in composite.iter().zip(values.iter_mut()) {
            let share = match term {
                SizeTerm::Percent(pct) => remainder as f64 * pct / 100.0,
                SizeTerm::Remainder => star_share,
                _ => continue,
            };
            *value = share.floor() as i32;
        }
    }

    // Phase 5
    let sizes = term_values
        .iter()
        .map(|values| saturate(values.iter().map(|&v| i64::from(v)).sum()))
        .collect();

    AxisResolution {
        term_values,
        fixed_total,
        remainder,
        star_percentage,
        sizes: ResolvedAxis::new(sizes),
    }
}

/// Resolve the final size of every composite on an axis.
pub fn resolve<F>(
    spec: &AxisSpec,
    total_size: i32,
    membership: &[Membership],
    extent: F,
) -> ResolvedAxis
where
    F: FnMut(usize, ExtentKind) -> i32,
{
    resolve_detailed(spec, total_size, membership, extent).sizes
}
