//! Construction-time configuration.

use rgrid_core::{Axis, ConfigError, RGridError};
use rgrid_parser::parse_axis;

use crate::layout::RGridLayout;

/// The two specification strings a grid is built from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// Column widths, e.g. `"10 + P, *"`
    pub columns: String,
    /// Row heights, e.g. `"10%, 50, *, M"`
    pub rows: String,
}

impl GridSpec {
    pub fn new(columns: impl Into<String>, rows: impl Into<String>) -> Self {
        Self { columns: columns.into(), rows: rows.into() }
    }

    /// Read a spec from a JSON object with `columns` and `rows` keys.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    fn text(&self, axis: Axis) -> &str {
        match axis {
            Axis::Columns => &self.columns,
            Axis::Rows => &self.rows,
        }
    }

    fn parse(&self, axis: Axis) -> Result<rgrid_core::AxisSpec, ConfigError> {
        let text = self.text(axis);
        parse_axis(text).map_err(|source| ConfigError::Axis {
            axis: axis.name(),
            source_text: text.to_string(),
            source,
        })
    }

    /// Parse both axes into a layout.
    pub fn build(&self) -> Result<RGridLayout, RGridError> {
        let columns = self.parse(Axis::Columns)?;
        let rows = self.parse(Axis::Rows)?;
        Ok(RGridLayout::from_axes(columns, rows))
    }
}

impl RGridLayout {
    pub fn from_spec(spec: &GridSpec) -> Result<Self, RGridError> {
        spec.build()
    }
}
