//! Size specification model.
//!
//! An axis specification such as `"10+P, 25%, *"` parses into an
//! [`AxisSpec`]: one [`CompositeSpec`] per column (or row), each a sum of
//! [`SizeTerm`]s.

use std::fmt;

use smallvec::SmallVec;

use crate::errors::ParseError;
use crate::types::ExtentKind;

/// Byte range into the axis specification string, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One atomic size declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeTerm {
    /// Exact pixel count (`30`)
    Fixed(i32),
    /// Percentage of the leftover space (`10%`)
    Percent(f64),
    /// Largest preferred extent among the column's or row's elements (`P`)
    MaxPreferred,
    /// Largest minimum extent among the column's or row's elements (`M`)
    MaxMinimum,
    /// Equal share of the percentage left after declared percentages (`*`)
    Remainder,
}

impl SizeTerm {
    /// The extent a dependent term is computed from, if any.
    pub fn extent_kind(&self) -> Option<ExtentKind> {
        match self {
            SizeTerm::MaxPreferred => Some(ExtentKind::Preferred),
            SizeTerm::MaxMinimum => Some(ExtentKind::Minimum),
            _ => None,
        }
    }

    /// Terms whose value is known before the leftover space is split.
    pub fn is_fixed_size(&self) -> bool {
        matches!(self, SizeTerm::Fixed(_) | SizeTerm::MaxPreferred | SizeTerm::MaxMinimum)
    }

    /// The explicitly declared percentage (remainder terms have none).
    pub fn declared_percentage(&self) -> Option<f64> {
        match self {
            SizeTerm::Percent(pct) => Some(*pct),
            _ => None,
        }
    }
}

impl fmt::Display for SizeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeTerm::Fixed(px) => write!(f, "{px}"),
            SizeTerm::Percent(pct) => write!(f, "{pct}%"),
            SizeTerm::MaxPreferred => f.write_str("P"),
            SizeTerm::MaxMinimum => f.write_str("M"),
            SizeTerm::Remainder => f.write_str("*"),
        }
    }
}

/// The summed size expression of one column or row, e.g. `10+P+3%`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CompositeSpecRepr"))]
pub struct CompositeSpec {
    terms: SmallVec<[SizeTerm; 4]>,
    span: Span,
}

impl CompositeSpec {
    /// Build a composite from its terms in declaration order.
    pub fn new(terms: impl IntoIterator<Item = SizeTerm>, span: Span) -> Result<Self, ParseError> {
        let terms: SmallVec<[SizeTerm; 4]> = terms.into_iter().collect();
        if terms.is_empty() {
            return Err(ParseError::EmptyTerm { span });
        }
        Ok(Self { terms, span })
    }

    pub fn terms(&self) -> &[SizeTerm] {
        &self.terms
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SizeTerm> {
        self.terms.iter()
    }
}

impl fmt::Display for CompositeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// All composite specs declared for one axis. Never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AxisSpecRepr"))]
pub struct AxisSpec {
    composites: Vec<CompositeSpec>,
}

impl AxisSpec {
    pub fn new(composites: Vec<CompositeSpec>) -> Result<Self, ParseError> {
        if composites.is_empty() {
            return Err(ParseError::EmptyAxisSpec);
        }
        Ok(Self { composites })
    }

    pub fn composites(&self) -> &[CompositeSpec] {
        &self.composites
    }

    /// Number of columns (or rows) this axis declares.
    pub fn len(&self) -> usize {
        self.composites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompositeSpec> {
        self.composites.iter()
    }

    /// Every term of every composite, in declaration order.
    pub fn terms(&self) -> impl Iterator<Item = &SizeTerm> {
        self.composites.iter().flat_map(|c| c.iter())
    }

    /// Count of `*` terms across the axis.
    pub fn remainder_count(&self) -> usize {
        self.terms().filter(|t| matches!(t, SizeTerm::Remainder)).count()
    }

    /// Sum of the explicitly declared percentages across the axis.
    pub fn declared_percent_total(&self) -> f64 {
        self.terms().filter_map(SizeTerm::declared_percentage).sum()
    }
}

impl fmt::Display for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, composite) in self.composites.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{composite}")?;
        }
        Ok(())
    }
}

/// Unchecked wire form of [`CompositeSpec`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CompositeSpecRepr {
    terms: SmallVec<[SizeTerm; 4]>,
    #[serde(default)]
    span: Span,
}

#[cfg(feature = "serde")]
impl TryFrom<CompositeSpecRepr> for CompositeSpec {
    type Error = ParseError;

    fn try_from(repr: CompositeSpecRepr) -> Result<Self, Self::Error> {
        CompositeSpec::new(repr.terms, repr.span)
    }
}

/// Unchecked wire form of [`AxisSpec`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AxisSpecRepr {
    composites: Vec<CompositeSpec>,
}

#[cfg(feature = "serde")]
impl TryFrom<AxisSpecRepr> for AxisSpec {
    type Error = ParseError;

    fn try_from(repr: AxisSpecRepr) -> Result<Self, Self::Error> {
        AxisSpec::new(repr.composites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite(terms: &[SizeTerm]) -> CompositeSpec {
        CompositeSpec::new(terms.iter().copied(), Span::default()).unwrap()
    }

    #[test]
    fn test_empty_composite_rejected() {
        let err = CompositeSpec::new([], Span::new(3, 3)).unwrap_err();
        assert!(matches!(err, ParseError::EmptyTerm { span } if span == Span::new(3, 3)));
    }

    #[test]
    fn test_empty_axis_rejected() {
        assert!(matches!(AxisSpec::new(Vec::new()), Err(ParseError::EmptyAxisSpec)));
    }

    #[test]
    fn test_axis_aggregates() {
        let axis = AxisSpec::new(vec![
            composite(&[SizeTerm::Fixed(10), SizeTerm::MaxPreferred]),
            composite(&[SizeTerm::Percent(25.0)]),
            composite(&[SizeTerm::Remainder, SizeTerm::Percent(5.0)]),
            composite(&[SizeTerm::Remainder]),
        ])
        .unwrap();

        assert_eq!(axis.len(), 4);
        assert_eq!(axis.remainder_count(), 2);
        assert!((axis.declared_percent_total() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_canonical_form() {
        let axis = AxisSpec::new(vec![
            composite(&[SizeTerm::Fixed(10), SizeTerm::MaxPreferred, SizeTerm::Percent(3.0)]),
            composite(&[SizeTerm::MaxMinimum]),
            composite(&[SizeTerm::Fixed(-4), SizeTerm::Remainder]),
        ])
        .unwrap();

        assert_eq!(axis.to_string(), "10+P+3%,M,-4+*");
    }

    #[test]
    fn test_term_classes() {
        assert!(SizeTerm::Fixed(1).is_fixed_size());
        assert!(SizeTerm::MaxMinimum.is_fixed_size());
        assert!(!SizeTerm::Remainder.is_fixed_size());
        assert!(!SizeTerm::Percent(1.0).is_fixed_size());
        assert_eq!(SizeTerm::MaxPreferred.extent_kind(), Some(ExtentKind::Preferred));
        assert_eq!(SizeTerm::Remainder.declared_percentage(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_empty_axis() {
        let err = serde_json::from_str::<AxisSpec>(r#"{"composites": []}"#).unwrap_err();
        assert!(err.to_string().contains("declares no columns or rows"), "{err}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_empty_composite() {
        let json = r#"{"composites": [{"terms": [], "span": {"start": 2, "end": 2}}]}"#;
        let err = serde_json::from_str::<AxisSpec>(json).unwrap_err();
        assert!(err.to_string().contains("Empty size term at 2..2"), "{err}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let axis = AxisSpec::new(vec![
            composite(&[SizeTerm::Fixed(10), SizeTerm::MaxPreferred]),
            composite(&[SizeTerm::Percent(25.0), SizeTerm::Remainder]),
        ])
        .unwrap();

        let json = serde_json::to_string(&axis).unwrap();
        assert_eq!(serde_json::from_str::<AxisSpec>(&json).unwrap(), axis);
    }
}
