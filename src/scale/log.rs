use super::Scale;
use num_traits::Float;

/// Logarithmic scale: maps a positive domain to normalized `[0, 1]` range using logarithmic transformation.
///
/// Equal distances in normalized space represent equal ratios in domain space,
/// so 1 → 10 covers the same share of the axis as 10 → 100.
///
/// # Domain Constraints
///
/// Only **positive values** (> 0) are valid. Zero and negative values
/// normalize to `0` as a fallback.
///
/// # Examples
///
/// ```rust
/// use coordmap::scale::{Logarithmic, Scale};
///
/// let scale = Logarithmic::<f64, f64>::new(10.0, 1.0, 1000.0);
/// assert_eq!(scale.normalize_opt(&1.0), Some(0.0));
/// assert_eq!(scale.normalize_opt(&1000.0), Some(1.0));
///
/// let norm_10 = scale.normalize_opt(&10.0).unwrap();
/// assert!((norm_10 - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logarithmic<D, N = f64>
where
    D: Float,
    N: Float,
{
    base: D,
    min: D,
    max: D,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> Logarithmic<D, N>
where
    D: Float,
    N: Float,
{
    /// Creates a new logarithmic scale with the given base and domain range.
    ///
    /// # Arguments
    ///
    /// * `base` - The logarithm base (typically 10 or e)
    /// * `min` - The minimum value of the domain (must be > 0)
    /// * `max` - The maximum value of the domain (must be > 0)
    pub const fn new(base: D, min: D, max: D) -> Self {
        Self {
            base,
            min,
            max,
            _phantom: std::marker::PhantomData,
        }
    }

    pub const fn base(&self) -> D {
        self.base
    }
}

impl<D, N> Scale for Logarithmic<D, N>
where
    D: Float,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn set_domain(&mut self, min: D, max: D) {
        self.min = min;
        self.max = max;
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        if !self.is_valid_domain_value(value) {
            return Some(N::zero());
        }

        let ln_min = self.min.ln();
        let ln_max = self.max.ln();
        let span_d = ln_max - ln_min;
        if span_d == D::zero() {
            return Some(N::zero());
        }

        let offset_d = value.ln() - ln_min;

        let offset_n: N = N::from(offset_d)?;
        let span_n: N = N::from(span_d)?;

        Some(offset_n / span_n)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let ln_min = self.min.ln();
        let ln_max = self.max.ln();
        let span_d = ln_max - ln_min;
        let span_n: N = N::from(span_d)?;

        let scaled_d: D = D::from(t * span_n)?;
        Some((ln_min + scaled_d).exp())
    }

    fn is_valid_domain_value(&self, value: &D) -> bool {
        *value > D::zero()
    }
}
