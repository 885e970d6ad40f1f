//! Which layer decides a panel's log base.
//!
//! Three layers can claim an axis is logarithmic. From lowest to highest
//! authority:
//!
//! 1. the rendering engine's axis scale,
//! 2. the declarative layer's position scale transform,
//! 3. the declarative layer's coordinate-system transform.
//!
//! The highest layer that reports a log base wins. Layers 2 and 3 are not
//! expected to both be logarithmic on one axis; when they are, the
//! configured [`LogConflictPolicy`] decides.

use crate::config::LogConflictPolicy;
use crate::error::{Error, Result};
use crate::model::Axis;

/// Log bases reported for one axis of one panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogSources {
    pub engine: Option<f64>,
    pub scale: Option<f64>,
    pub coord: Option<f64>,
}

/// Merges the layers' log bases for one axis.
///
/// ```rust
/// use coordmap::config::LogConflictPolicy;
/// use coordmap::model::Axis;
/// use coordmap::precedence::{LogSources, merge_log};
///
/// let sources = LogSources { engine: Some(2.0), scale: Some(10.0), coord: None };
/// let base = merge_log(1, Axis::X, sources, LogConflictPolicy::CoordWins).unwrap();
/// assert_eq!(base, Some(10.0));
/// ```
pub fn merge_log(
    panel: usize,
    axis: Axis,
    sources: LogSources,
    policy: LogConflictPolicy,
) -> Result<Option<f64>> {
    if let (Some(scale_base), Some(coord_base)) = (sources.scale, sources.coord) {
        match policy {
            LogConflictPolicy::CoordWins => {
                crate::log::warn!(
                    panel,
                    %axis,
                    scale_base,
                    coord_base,
                    "log scale and log coordinate transform on the same axis; using the coordinate base"
                );
            }
            LogConflictPolicy::Fault => {
                return Err(Error::ConflictingLogTransforms {
                    panel,
                    axis,
                    scale_base,
                    coord_base,
                });
            }
        }
    }

    Ok(sources.coord.or(sources.scale).or(sources.engine))
}
