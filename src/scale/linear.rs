use super::Scale;
use num_traits::Float;

/// Linear scale: maps a numeric domain to normalized `[0, 1]` range.
///
/// # Type Parameters
///
/// - `D`: data value type
/// - `N`: type of the normalized position
///
/// Endpoints may be given in either order. A reversed domain (`max < min`)
/// flips the mapping, which is how inverted axes are expressed.
///
/// # Examples
///
/// ```rust
/// use coordmap::scale::{Linear, Scale};
///
/// let scale = Linear::<f64, f64>::new(0.0, 100.0);
/// assert_eq!(scale.normalize_opt(&25.0), Some(0.25));
/// assert_eq!(scale.denormalize_opt(0.5), Some(50.0));
///
/// // A pointer past the right edge
/// assert_eq!(scale.normalize_opt(&150.0), Some(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear<D, N = f64>
where
    D: Float,
    N: Float,
{
    min: D,
    max: D,
    _phantom: std::marker::PhantomData<N>,
}

impl<D, N> Linear<D, N>
where
    D: Float,
    N: Float,
{
    /// Scale over `min..max`, in display order.
    pub const fn new(min: D, max: D) -> Self {
        Self {
            min,
            max,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<D, N> Scale for Linear<D, N>
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
        let span = self.max - self.min;
        if span == D::zero() {
            return Some(N::zero());
        }

        let offset = *value - self.min;
        let offset_n: N = N::from(offset)?;
        let span_n: N = N::from(span)?;

        // No clamping: pointer positions outside a panel map outside [0, 1].
        Some(offset_n / span_n)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let span = self.max - self.min;
        let span_n: N = N::from(span)?;
        let scaled = t * span_n;
        let scaled_d: D = D::from(scaled)?;
        Some(self.min + scaled_d)
    }

    fn is_valid_domain_value(&self, _value: &D) -> bool {
        true
    }
}
