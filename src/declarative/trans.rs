use serde::{Deserialize, Serialize};

/// What a declarative-layer transform does to data values.
///
/// Classification happens once, when the transform is described to this
/// crate, so enrichment only ever matches on the variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformKind {
    #[default]
    Identity,
    Log {
        base: f64,
    },
    /// Sign flip, `x -> -x`.
    Reverse,
    /// Any other transform; carried by name but never interpreted.
    Other {
        name: String,
    },
}

impl TransformKind {
    /// Classifies a transform from its name.
    ///
    /// Names of the form `log*_trans` are logarithmic. `base` is used when
    /// given; otherwise it is read from the name (`log10_trans`, `log2_trans`),
    /// falling back to the natural base.
    ///
    /// ```rust
    /// use coordmap::declarative::TransformKind;
    ///
    /// assert_eq!(TransformKind::classify("log10_trans", None), TransformKind::Log { base: 10.0 });
    /// assert_eq!(TransformKind::classify("log_trans", Some(3.0)), TransformKind::Log { base: 3.0 });
    /// assert_eq!(TransformKind::classify("reverse_trans", None), TransformKind::Reverse);
    /// assert!(matches!(TransformKind::classify("sqrt_trans", None), TransformKind::Other { .. }));
    /// ```
    pub fn classify(name: &str, base: Option<f64>) -> Self {
        match name {
            "identity_trans" => Self::Identity,
            "reverse_trans" => Self::Reverse,
            _ if is_log_name(name) => Self::Log {
                base: base.unwrap_or_else(|| base_from_name(name)),
            },
            _ => Self::Other {
                name: name.to_string(),
            },
        }
    }

    pub const fn log_base(&self) -> Option<f64> {
        match self {
            Self::Log { base } => Some(*base),
            _ => None,
        }
    }

    pub const fn is_reverse(&self) -> bool {
        matches!(self, Self::Reverse)
    }
}

/// Whole-name match of `log.*_trans`.
fn is_log_name(name: &str) -> bool {
    name.starts_with("log") && name.ends_with("_trans")
}

fn base_from_name(name: &str) -> f64 {
    let digits = name
        .strip_prefix("log")
        .and_then(|rest| rest.strip_suffix("_trans"))
        .unwrap_or_default();

    match digits.parse::<f64>() {
        Ok(base) if base > 0.0 && base != 1.0 => base,
        _ => std::f64::consts::E,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_names_are_matched_whole() {
        assert_eq!(
            TransformKind::classify("log2_trans", None),
            TransformKind::Log { base: 2.0 }
        );
        assert_eq!(
            TransformKind::classify("log_trans", None),
            TransformKind::Log {
                base: std::f64::consts::E
            }
        );
        assert!(matches!(
            TransformKind::classify("log10_transform", None),
            TransformKind::Other { .. }
        ));
        assert!(matches!(
            TransformKind::classify("pseudo_log_trans", None),
            TransformKind::Other { .. }
        ));
    }

    #[test]
    fn log1p_falls_back_to_natural_base() {
        assert_eq!(
            TransformKind::classify("log1p_trans", None).log_base(),
            Some(std::f64::consts::E)
        );
    }

    #[test]
    fn explicit_base_wins_over_name() {
        assert_eq!(
            TransformKind::classify("log10_trans", Some(2.0)).log_base(),
            Some(2.0)
        );
    }

    #[test]
    fn reverse_is_exact_name() {
        assert!(TransformKind::classify("reverse_trans", None).is_reverse());
        assert!(!TransformKind::classify("reverse_log_trans", None).is_reverse());
        assert_eq!(TransformKind::classify("identity_trans", None), TransformKind::Identity);
    }
}
