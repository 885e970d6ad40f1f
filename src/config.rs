//! Enrichment options.

use serde::{Deserialize, Serialize};

/// What to do when an axis has both a log scale transform and a log
/// coordinate-system transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogConflictPolicy {
    /// Report the coordinate-system base and log a warning.
    #[default]
    CoordWins,
    /// Fail with [`crate::Error::ConflictingLogTransforms`].
    Fault,
}

/// Options for [`crate::enrich_with`].
///
/// ```rust
/// use coordmap::config::{EnrichOptions, LogConflictPolicy};
///
/// let options: EnrichOptions = serde_json::from_str(r#"{ "log_conflict": "fault" }"#).unwrap();
/// assert_eq!(options.log_conflict, LogConflictPolicy::Fault);
///
/// let defaults: EnrichOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(defaults, EnrichOptions::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichOptions {
    pub log_conflict: LogConflictPolicy,
}
