//! Coordinate maps for interactive plots
//!
//! `coordmap` describes how the data space of every panel in a rendered plot
//! relates to its pixel space. Interactive front ends use the map to turn
//! pointer clicks, drags and hovers into data coordinates, and back.
//!
//! # Core Concepts
//!
//! ## Extraction
//!
//! [`extract`] reads a rendered figure through the [`figure::Figure`] and
//! [`figure::Axes`] traits and produces one [`model::Panel`] per axes:
//! - `domain` - the axis limits in data space
//! - `range` - the plotting area in pixels, origin at the **top-left**
//! - `log` - the log base of each logarithmic axis
//!
//! Rendering engines report pixels with the origin at the bottom-left; the
//! extractor flips them against the figure height.
//!
//! ## Enrichment
//!
//! [`enrich`] pairs the figure with the declarative plot that produced it
//! ([`declarative::DeclarativePlot`]) and adds what only that layer knows:
//! - variable names per aesthetic and facet role
//! - the value of each facet variable in each panel
//! - log and reverse scale transforms applied before rendering
//!
//! Which layer wins when several report a log base is defined in
//! [`precedence`].
//!
//! # Examples
//!
//! ## Plain Figure
//!
//! ```rust
//! use coordmap::extract;
//! use coordmap::figure::{StaticAxes, StaticFigure, SubplotSpec};
//! use coordmap::transform::{ScreenPoint, ScreenRect};
//!
//! let bbox = ScreenRect { x: 50.0, y: 50.0, width: 500.0, height: 300.0 };
//! let axes = StaticAxes::new(bbox, (0.0, 10.0), (0.0, 100.0))
//!     .with_subplot(SubplotSpec::cell(0, 0));
//! let figure = StaticFigure::new((6.0, 4.0), 100.0, vec![axes]);
//!
//! let map = extract(&figure).unwrap().expect("figure is rendered");
//! assert_eq!(map.dims.width, 600.0);
//! assert_eq!(map.panels.len(), 1);
//!
//! // A click in the middle of the plotting area
//! let panel = map.panel_at(ScreenPoint::new(300.0, 200.0)).unwrap();
//! let data = panel.pixel_to_data(ScreenPoint::new(300.0, 200.0)).unwrap();
//! assert!((data.x - 5.0).abs() < 1e-9);
//! assert!((data.y - 50.0).abs() < 1e-9);
//! ```
//!
//! ## Serialized Shape
//!
//! ```rust
//! # use coordmap::extract;
//! # use coordmap::figure::{StaticAxes, StaticFigure, SubplotSpec};
//! # use coordmap::transform::ScreenRect;
//! # let bbox = ScreenRect { x: 50.0, y: 50.0, width: 500.0, height: 300.0 };
//! # let axes = StaticAxes::new(bbox, (0.0, 10.0), (0.0, 100.0))
//! #     .with_subplot(SubplotSpec::cell(0, 0));
//! # let figure = StaticFigure::new((6.0, 4.0), 100.0, vec![axes]);
//! let map = extract(&figure).unwrap().unwrap();
//! let json: serde_json::Value = serde_json::from_str(&map.to_json().unwrap()).unwrap();
//!
//! assert_eq!(json["panels"][0]["panel"], 1);
//! assert!(json["panels"][0]["log"]["x"].is_null());
//! assert!(json["panels"][0]["mapping"]["y"].is_null());
//! ```

pub mod config;
pub mod declarative;
mod enrich;
pub mod error;
mod extract;
pub mod figure;
mod log;
pub mod model;
pub mod precedence;
pub mod scale;
pub mod transform;

pub use enrich::{enrich, enrich_with};
pub use error::{Error, Result};
pub use extract::extract;
pub use model::{Axis, Bounds, CoordinateMap, Dims, Panel, PanelLog, PanelMapping, PanelVars};
