use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TransformKind;
use crate::error::{Error, Result};
use crate::model::Axis;

/// Per-panel layout table of a built plot, with the scales and coordinate
/// system the rows refer to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub rows: Vec<LayoutRow>,
    pub scales_x: Vec<PositionScale>,
    pub scales_y: Vec<PositionScale>,
    #[serde(default)]
    pub coord: CoordSystem,
    #[serde(default)]
    pub facet: Facet,
}

impl Layout {
    pub fn row_for_panel(&self, panel: usize) -> Result<&LayoutRow> {
        self.rows
            .iter()
            .find(|row| row.panel == panel)
            .ok_or(Error::MissingLayoutRow { panel })
    }

    /// Dereferences a 1-based scale index.
    pub fn scale(&self, axis: Axis, index: usize) -> Result<&PositionScale> {
        let scales = match axis {
            Axis::X => &self.scales_x,
            Axis::Y => &self.scales_y,
        };

        index
            .checked_sub(1)
            .and_then(|i| scales.get(i))
            .ok_or(Error::ScaleIndexOutOfRange {
                axis,
                index,
                available: scales.len(),
            })
    }
}

/// One row of the layout table: a panel, its grid cell, its scales and the
/// values of the faceting variables in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub panel: usize,
    /// Grid row as the declarative layer laid it out. Informational only:
    /// panel rows and columns are read from the rendered figure.
    pub row: usize,
    /// Grid column, informational like [`LayoutRow::row`].
    pub col: usize,
    /// 1-based index into [`Layout::scales_x`].
    pub scale_x: usize,
    /// 1-based index into [`Layout::scales_y`].
    pub scale_y: usize,
    #[serde(default)]
    pub vars: BTreeMap<String, PanelValue>,
}

impl LayoutRow {
    /// A row for a single unfaceted panel using the first x and y scales.
    pub fn single(panel: usize, row: usize, col: usize) -> Self {
        Self {
            panel,
            row,
            col,
            scale_x: 1,
            scale_y: 1,
            vars: BTreeMap::new(),
        }
    }

    pub fn with_var(mut self, column: impl Into<String>, value: impl Into<PanelValue>) -> Self {
        self.vars.insert(column.into(), value.into());
        self
    }

    /// Value of `column` in this row as a plain float.
    pub fn numeric(&self, column: &str) -> Result<f64> {
        let value = self
            .vars
            .get(column)
            .ok_or_else(|| Error::MissingLayoutColumn {
                panel: self.panel,
                column: column.to_string(),
            })?;

        value.to_f64().ok_or_else(|| Error::NonNumericPanelValue {
            panel: self.panel,
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

/// A faceting variable's value in a layout row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanelValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl PanelValue {
    /// Numeric view of the value. Booleans count as `0`/`1`; strings must
    /// parse as a number. Non-finite results are rejected, since JSON has no
    /// representation for them.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Bool(value) => f64::from(u8::from(*value)),
            Self::Int(value) => *value as f64,
            Self::Float(value) => *value,
            Self::Str(value) => value.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl std::fmt::Display for PanelValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<bool> for PanelValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PanelValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PanelValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for PanelValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PanelValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PanelValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A trained position scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionScale {
    #[serde(default)]
    pub trans: TransformKind,
}

impl PositionScale {
    pub fn new(trans: TransformKind) -> Self {
        Self { trans }
    }
}

/// How panels are split by data variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Facet {
    /// A single panel.
    #[default]
    Null,
    /// Independent column and row variables.
    Grid { cols: Vec<String>, rows: Vec<String> },
    /// One set of variables laid out in a flowing grid.
    Wrap { vars: Vec<String> },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordKind {
    #[default]
    Cartesian,
    /// Cartesian with x and y roles swapped.
    Flip,
    /// Cartesian with its own per-axis transforms.
    Trans,
}

/// Coordinate system of a plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordSystem {
    pub kind: CoordKind,
    #[serde(default)]
    pub trans_x: Option<TransformKind>,
    #[serde(default)]
    pub trans_y: Option<TransformKind>,
}

impl CoordSystem {
    pub fn cartesian() -> Self {
        Self::default()
    }

    pub fn flip() -> Self {
        Self {
            kind: CoordKind::Flip,
            ..Self::default()
        }
    }

    pub fn trans(trans_x: Option<TransformKind>, trans_y: Option<TransformKind>) -> Self {
        Self {
            kind: CoordKind::Trans,
            trans_x,
            trans_y,
        }
    }

    pub const fn is_flipped(&self) -> bool {
        matches!(self.kind, CoordKind::Flip)
    }

    pub const fn trans_for(&self, axis: Axis) -> Option<&TransformKind> {
        match axis {
            Axis::X => self.trans_x.as_ref(),
            Axis::Y => self.trans_y.as_ref(),
        }
    }
}
