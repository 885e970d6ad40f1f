//! The coordinate map data model.
//!
//! All leaf numbers are plain `f64` and the serialized shape is what
//! interactive clients consume:
//!
//! ```json
//! {
//!   "dims": { "width": 640.0, "height": 480.0 },
//!   "panels": [{
//!     "panel": 1, "row": 1, "col": 1,
//!     "panel_vars": { "panelvar1": 4.0 },
//!     "domain": { "left": 1.5, "right": 5.5, "bottom": 10.0, "top": 35.0 },
//!     "range": { "left": 80.0, "right": 576.0, "bottom": 427.2, "top": 57.6 },
//!     "log": { "x": null, "y": null },
//!     "mapping": { "x": "wt", "y": "mpg", "panelvar1": "cyl" }
//!   }]
//! }
//! ```
//!
//! `range` uses client pixels with the origin at the top-left corner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scale::util::sorted_pair;
use crate::scale::{Linear, Scale};
use crate::transform::{PlotPoint, ScreenPoint};

/// One of the two position axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Snapshot of how every panel of a figure maps data space to pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMap {
    pub dims: Dims,
    pub panels: Vec<Panel>,
}

impl CoordinateMap {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// First panel whose pixel range contains `point` (client pixels).
    pub fn panel_at(&self, point: ScreenPoint) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.range.contains(point.x, point.y))
    }
}

/// Figure size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dims {
    pub width: f64,
    pub height: f64,
}

/// Rectangle given by its four edges.
///
/// Used for both the data-space `domain` and the pixel-space `range` of a
/// panel. Edges are not reordered: a reversed axis has `left > right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Bounds {
    /// Inclusive containment, whatever the edge order.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (x_min, x_max) = sorted_pair(self.left, self.right);
        let (y_min, y_max) = sorted_pair(self.bottom, self.top);
        (x_min..=x_max).contains(&x) && (y_min..=y_max).contains(&y)
    }

    fn horizontal(&self) -> Linear<f64, f64> {
        Linear::new(self.left, self.right)
    }

    fn vertical(&self) -> Linear<f64, f64> {
        Linear::new(self.bottom, self.top)
    }
}

/// Log base per axis; `None` for a linear axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelLog {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl PanelLog {
    pub const fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, base: Option<f64>) {
        match axis {
            Axis::X => self.x = base,
            Axis::Y => self.y = base,
        }
    }
}

/// Names of the variables bound to each role of a panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelMapping {
    pub x: Option<String>,
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panelvar1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panelvar2: Option<String>,
}

/// Values the paneling variables take in one panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelVars {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panelvar1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panelvar2: Option<f64>,
}

/// One rendered subplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// 1-based render order.
    #[serde(rename = "panel")]
    pub panel_number: usize,
    pub row: usize,
    pub col: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_vars: Option<PanelVars>,
    pub domain: Bounds,
    pub range: Bounds,
    pub log: PanelLog,
    pub mapping: PanelMapping,
}

impl Panel {
    /// Translates client pixels into data coordinates.
    ///
    /// On log axes the domain holds exponents, so the result is raised back
    /// to the log base.
    ///
    /// ```rust
    /// use coordmap::model::{Bounds, Panel, PanelLog, PanelMapping};
    /// use coordmap::transform::ScreenPoint;
    ///
    /// let panel = Panel {
    ///     panel_number: 1,
    ///     row: 1,
    ///     col: 1,
    ///     panel_vars: None,
    ///     domain: Bounds { left: 0.0, right: 10.0, bottom: 0.0, top: 2.0 },
    ///     range: Bounds { left: 0.0, right: 100.0, bottom: 200.0, top: 0.0 },
    ///     log: PanelLog { x: None, y: Some(10.0) },
    ///     mapping: PanelMapping::default(),
    /// };
    ///
    /// let data = panel.pixel_to_data(ScreenPoint::new(50.0, 100.0)).unwrap();
    /// assert!((data.x - 5.0).abs() < 1e-9);
    /// assert!((data.y - 10.0).abs() < 1e-9);
    /// ```
    pub fn pixel_to_data(&self, point: ScreenPoint) -> Option<PlotPoint> {
        let tx = self.range.horizontal().normalize_opt(&point.x)?;
        let ty = self.range.vertical().normalize_opt(&point.y)?;

        let x = self.domain.horizontal().denormalize_opt(tx)?;
        let y = self.domain.vertical().denormalize_opt(ty)?;

        Some(PlotPoint::new(
            self.log.x.map_or(x, |base| base.powf(x)),
            self.log.y.map_or(y, |base| base.powf(y)),
        ))
    }

    /// Translates data coordinates into client pixels.
    ///
    /// Returns `None` for non-positive values on a log axis.
    pub fn data_to_pixel(&self, point: PlotPoint) -> Option<ScreenPoint> {
        let x = to_scale_space(point.x, self.log.x)?;
        let y = to_scale_space(point.y, self.log.y)?;

        let tx = self.domain.horizontal().normalize_opt(&x)?;
        let ty = self.domain.vertical().normalize_opt(&y)?;

        Some(ScreenPoint::new(
            self.range.horizontal().denormalize_opt(tx)?,
            self.range.vertical().denormalize_opt(ty)?,
        ))
    }
}

fn to_scale_space(value: f64, log_base: Option<f64>) -> Option<f64> {
    match log_base {
        None => Some(value),
        Some(_) if value <= 0.0 => None,
        Some(base) => Some(value.ln() / base.ln()),
    }
}
