//! Error type for coordinate map extraction and enrichment.
//!
//! A figure that cannot be introspected is not an error: the entry points
//! return `Ok(None)` for it. The variants here describe collaborator objects
//! whose shape breaks the contract the extraction relies on.

use crate::model::Axis;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("axes for panel {panel} has no subplot spec")]
    MissingSubplotSpec { panel: usize },

    #[error("plot layout is still empty after the build step")]
    LayoutNotBuilt,

    #[error("layout table has no row for panel {panel}")]
    MissingLayoutRow { panel: usize },

    #[error("layout row for panel {panel} has no column `{column}`")]
    MissingLayoutColumn { panel: usize, column: String },

    #[error("{axis} scale index {index} is out of range (layout has {available} {axis} scales)")]
    ScaleIndexOutOfRange {
        axis: Axis,
        index: usize,
        available: usize,
    },

    #[error("value `{value}` of `{column}` in panel {panel} is not numeric")]
    NonNumericPanelValue {
        panel: usize,
        column: String,
        value: String,
    },

    #[error(
        "panel {panel}: {axis} axis has both a log scale (base {scale_base}) and a log coordinate transform (base {coord_base})"
    )]
    ConflictingLogTransforms {
        panel: usize,
        axis: Axis,
        scale_base: f64,
        coord_base: f64,
    },

    #[error("failed to serialize coordinate map")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
