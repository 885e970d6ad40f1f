//! Axis scales.
//!
//! A [`Scale`] maps a data interval (its domain) onto the normalized `[0, 1]`
//! range. Rendering-engine axes use them to place data in pixel space, and
//! coordinate-map panels use them to translate pointer positions back.
//!
//! [`AxisScale`] is the scale *kind* an axis reports, which is what the
//! extractor reads to decide whether a panel is logarithmic.

pub mod linear;
pub mod log;
pub(crate) mod util;

pub use linear::Linear;
pub use log::Logarithmic;

/// Maps a domain interval onto `[0, 1]` and back.
pub trait Scale {
    type Domain;
    type Normalized;

    /// Returns the `(min, max)` endpoints of the domain, in the order given.
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    fn set_domain(&mut self, min: Self::Domain, max: Self::Domain);

    /// Maps a domain value to normalized space. Values outside the domain
    /// map outside `[0, 1]`; `None` when a numeric conversion fails.
    fn normalize_opt(&self, value: &Self::Domain) -> Option<Self::Normalized>;

    /// Inverse of [`Scale::normalize_opt`].
    fn denormalize_opt(&self, t: Self::Normalized) -> Option<Self::Domain>;

    fn is_valid_domain_value(&self, value: &Self::Domain) -> bool;
}

/// Value substituted for non-positive inputs of a log axis transform.
pub const LOG_CLIP_VALUE: f64 = -1000.0;

/// Scale kind reported by a rendering-engine axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log {
        base: f64,
    },
}

impl AxisScale {
    /// Log base if this is a logarithmic axis.
    pub const fn log_base(&self) -> Option<f64> {
        match self {
            Self::Linear => None,
            Self::Log { base } => Some(*base),
        }
    }

    /// Applies the axis' forward transform, taking a data value into the
    /// space the engine works in internally.
    ///
    /// Log axes clip non-positive values to [`LOG_CLIP_VALUE`].
    ///
    /// ```
    /// use coordmap::scale::AxisScale;
    ///
    /// let axis = AxisScale::Log { base: 10.0 };
    /// assert!((axis.forward(1000.0) - 3.0).abs() < 1e-12);
    /// assert_eq!(axis.forward(0.0), -1000.0);
    /// assert_eq!(AxisScale::Linear.forward(42.0), 42.0);
    /// ```
    pub fn forward(&self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log { .. } if value <= 0.0 => LOG_CLIP_VALUE,
            Self::Log { base } => value.ln() / base.ln(),
        }
    }
}
