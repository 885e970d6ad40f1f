//! Points, rectangles and the data-to-display transform of an axes.
//!
//! Two pixel conventions meet in this crate:
//!
//! - **Display space** is what a rendering engine reports: pixels with the
//!   origin at the *bottom-left* of the figure, y increasing upward.
//! - **Client space** is what a coordinate map publishes: pixels with the
//!   origin at the *top-left*, y increasing downward.
//!
//! [`AxesTransform`] works in display space. Conversion to client space
//! happens once, in [`crate::extract`], by subtracting from the figure height.
//!
//! # Examples
//!
//! ```rust
//! use coordmap::transform::{AxesTransform, PlotPoint, ScreenRect};
//! use coordmap::scale::Linear;
//!
//! // Axes box 400x300 pixels, 50 px from the figure's left and bottom edges
//! let bbox = ScreenRect { x: 50.0, y: 50.0, width: 400.0, height: 300.0 };
//! let x_scale = Linear::<f64, f64>::new(0.0, 10.0);
//! let y_scale = Linear::<f64, f64>::new(0.0, 100.0);
//! let transform = AxesTransform::new(&bbox, &x_scale, &y_scale);
//!
//! let display = transform.data_to_display_opt(&PlotPoint::new(5.0, 100.0)).unwrap();
//! assert_eq!(display.x, 250.0);
//! assert_eq!(display.y, 350.0); // top of the axes box, measured from the bottom
//! ```

use num_traits::Float;

use crate::scale::Scale;

/// A rectangle in pixel coordinates.
///
/// `(x, y)` is the corner nearest the origin of whichever pixel convention
/// the rectangle is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect<S = f64> {
    pub x: S,
    pub y: S,
    pub width: S,
    pub height: S,
}

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint<S = f64> {
    pub x: S,
    pub y: S,
}

impl<S> ScreenPoint<S> {
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

/// A point in data coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotPoint<D = f64> {
    pub x: D,
    pub y: D,
}

impl<D> PlotPoint<D> {
    pub const fn new(x: D, y: D) -> Self {
        Self { x, y }
    }
}

/// Data-to-display transform of one axes.
///
/// Each scale normalizes its coordinate to `[0, 1]`; the result is then
/// stretched over the axes box. No y inversion happens here: normalized `0`
/// lands on the bottom edge of the box.
///
/// # Type Parameters
///
/// - `D`: Domain type (data values, typically `f64`)
/// - `N`: Normalized type (used between the scale and the box)
/// - `S`: Screen type (pixel coordinates)
#[derive(Clone, Copy)]
pub struct AxesTransform<'a, D = f64, N = f64, S = f64> {
    bbox: &'a ScreenRect<S>,
    x_scale: &'a dyn Scale<Domain = D, Normalized = N>,
    y_scale: &'a dyn Scale<Domain = D, Normalized = N>,
}

impl<'a, D, N, S> AxesTransform<'a, D, N, S> {
    pub const fn new(
        bbox: &'a ScreenRect<S>,
        x_scale: &'a dyn Scale<Domain = D, Normalized = N>,
        y_scale: &'a dyn Scale<Domain = D, Normalized = N>,
    ) -> Self {
        Self {
            bbox,
            x_scale,
            y_scale,
        }
    }
}

impl<D, N, S> AxesTransform<'_, D, N, S>
where
    D: Float,
    N: Float,
    S: Float,
{
    /// Transforms a data point into display coordinates.
    pub fn data_to_display_opt(&self, point: &PlotPoint<D>) -> Option<ScreenPoint<S>> {
        let sx = self.x_to_display_opt(&point.x)?;
        let sy = self.y_to_display_opt(&point.y)?;
        Some(ScreenPoint::new(sx, sy))
    }

    /// Transforms a display point back into data coordinates.
    pub fn display_to_data_opt(&self, point: &ScreenPoint<S>) -> Option<PlotPoint<D>> {
        let dx = self.x_from_display_opt(&point.x)?;
        let dy = self.y_from_display_opt(&point.y)?;
        Some(PlotPoint::new(dx, dy))
    }

    pub fn x_to_display_opt(&self, x: &D) -> Option<S> {
        let norm: S = S::from(self.x_scale.normalize_opt(x)?)?;
        Some(self.bbox.x + norm * self.bbox.width)
    }

    pub fn y_to_display_opt(&self, y: &D) -> Option<S> {
        let norm: S = S::from(self.y_scale.normalize_opt(y)?)?;
        Some(self.bbox.y + norm * self.bbox.height)
    }

    pub fn x_from_display_opt(&self, x: &S) -> Option<D> {
        let norm = (*x - self.bbox.x) / self.bbox.width;
        self.x_scale.denormalize_opt(N::from(norm)?)
    }

    pub fn y_from_display_opt(&self, y: &S) -> Option<D> {
        let norm = (*y - self.bbox.y) / self.bbox.height;
        self.y_scale.denormalize_opt(N::from(norm)?)
    }
}
