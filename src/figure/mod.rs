//! Rendering-engine interface.
//!
//! The extractor reads a rendered figure only through [`Figure`] and [`Axes`].
//! [`StaticFigure`] is a plain snapshot implementing both, for hosts that
//! capture layout from an engine up front and for tests.

mod snapshot;

use std::ops::Range;

use crate::scale::AxisScale;
use crate::transform::{PlotPoint, ScreenPoint};

pub use snapshot::{StaticAxes, StaticFigure};

/// A rendered figure made of one or more axes.
pub trait Figure {
    type Axes: Axes;

    /// Physical size `(width, height)` in inches.
    fn size_inches(&self) -> (f64, f64);

    /// Resolution in pixels per inch.
    fn dpi(&self) -> f64;

    /// All axes in render order, or `None` when the figure has no
    /// introspectable geometry yet.
    fn axes(&self) -> Option<&[Self::Axes]>;
}

/// One subplot of a rendered figure.
pub trait Axes {
    /// Data limits `(left, right)`, in the order the axis displays them.
    fn xlim(&self) -> (f64, f64);

    /// Data limits `(bottom, top)`, in the order the axis displays them.
    fn ylim(&self) -> (f64, f64);

    /// Maps a data point to display pixels (origin bottom-left).
    fn data_to_display(&self, point: PlotPoint) -> ScreenPoint;

    /// Grid cell occupied by this axes, `None` for freely placed axes.
    fn subplot_spec(&self) -> Option<SubplotSpec>;

    fn x_scale(&self) -> AxisScale;

    fn y_scale(&self) -> AxisScale;
}

/// Position of an axes in its figure's subplot grid.
///
/// Spans are 0-based, half-open row/column index ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubplotSpec {
    pub rowspan: Range<usize>,
    pub colspan: Range<usize>,
}

impl SubplotSpec {
    /// A spec covering the single cell at 0-based `(row, col)`.
    pub const fn cell(row: usize, col: usize) -> Self {
        Self {
            rowspan: row..row + 1,
            colspan: col..col + 1,
        }
    }

    /// 1-based row of the top-left cell.
    pub const fn row(&self) -> usize {
        self.rowspan.start + 1
    }

    /// 1-based column of the top-left cell.
    pub const fn col(&self) -> usize {
        self.colspan.start + 1
    }
}
