use super::{Axes, Figure, SubplotSpec};
use crate::scale::{AxisScale, Linear, Logarithmic, Scale};
use crate::transform::{AxesTransform, PlotPoint, ScreenPoint, ScreenRect};

/// Captured figure geometry.
///
/// ```rust
/// use coordmap::figure::{Figure, StaticAxes, StaticFigure, SubplotSpec};
/// use coordmap::transform::ScreenRect;
///
/// let bbox = ScreenRect { x: 60.0, y: 40.0, width: 500.0, height: 380.0 };
/// let axes = StaticAxes::new(bbox, (0.0, 10.0), (0.0, 35.0))
///     .with_subplot(SubplotSpec::cell(0, 0));
/// let figure = StaticFigure::new((6.4, 4.8), 100.0, vec![axes]);
///
/// assert_eq!(figure.axes().map(|axes| axes.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StaticFigure {
    size_inches: (f64, f64),
    dpi: f64,
    axes: Option<Vec<StaticAxes>>,
}

impl StaticFigure {
    pub fn new(size_inches: (f64, f64), dpi: f64, axes: Vec<StaticAxes>) -> Self {
        Self {
            size_inches,
            dpi,
            axes: Some(axes),
        }
    }

    /// A figure that has not been drawn, so it exposes no axes.
    pub const fn unrendered(size_inches: (f64, f64), dpi: f64) -> Self {
        Self {
            size_inches,
            dpi,
            axes: None,
        }
    }
}

impl Figure for StaticFigure {
    type Axes = StaticAxes;

    fn size_inches(&self) -> (f64, f64) {
        self.size_inches
    }

    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn axes(&self) -> Option<&[StaticAxes]> {
        self.axes.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AxisState {
    Linear(Linear<f64, f64>),
    Log(Logarithmic<f64, f64>),
}

impl AxisState {
    fn as_scale(&self) -> &dyn Scale<Domain = f64, Normalized = f64> {
        match self {
            Self::Linear(scale) => scale,
            Self::Log(scale) => scale,
        }
    }

    fn limits(&self) -> (f64, f64) {
        let (min, max) = self.as_scale().domain();
        (*min, *max)
    }

    fn kind(&self) -> AxisScale {
        match self {
            Self::Linear(_) => AxisScale::Linear,
            Self::Log(scale) => AxisScale::Log { base: scale.base() },
        }
    }

    fn set_limits(&mut self, (min, max): (f64, f64)) {
        match self {
            Self::Linear(scale) => scale.set_domain(min, max),
            Self::Log(scale) => scale.set_domain(min, max),
        }
    }

    fn into_log(self, base: f64) -> Self {
        let (min, max) = self.limits();
        Self::Log(Logarithmic::new(base, min, max))
    }
}

/// Captured geometry of one axes.
///
/// `bbox` is the plotting area in display pixels (origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub struct StaticAxes {
    bbox: ScreenRect,
    x: AxisState,
    y: AxisState,
    subplot: Option<SubplotSpec>,
}

impl StaticAxes {
    /// Linear axes with the given limits. Limits keep their order, so
    /// `(10.0, 0.0)` describes an inverted axis.
    pub const fn new(bbox: ScreenRect, xlim: (f64, f64), ylim: (f64, f64)) -> Self {
        Self {
            bbox,
            x: AxisState::Linear(Linear::new(xlim.0, xlim.1)),
            y: AxisState::Linear(Linear::new(ylim.0, ylim.1)),
            subplot: None,
        }
    }

    pub fn with_subplot(mut self, spec: SubplotSpec) -> Self {
        self.subplot = Some(spec);
        self
    }

    /// Switches the x axis to a log scale, keeping its limits.
    pub fn with_x_log(mut self, base: f64) -> Self {
        self.x = self.x.into_log(base);
        self
    }

    /// Switches the y axis to a log scale, keeping its limits.
    pub fn with_y_log(mut self, base: f64) -> Self {
        self.y = self.y.into_log(base);
        self
    }

    pub fn set_xlim(&mut self, left: f64, right: f64) {
        self.x.set_limits((left, right));
    }

    pub fn set_ylim(&mut self, bottom: f64, top: f64) {
        self.y.set_limits((bottom, top));
    }

    pub const fn bbox(&self) -> &ScreenRect {
        &self.bbox
    }

    fn transform(&self) -> AxesTransform<'_> {
        AxesTransform::new(&self.bbox, self.x.as_scale(), self.y.as_scale())
    }

    /// Maps display pixels (origin bottom-left) back to data coordinates.
    pub fn display_to_data(&self, point: ScreenPoint) -> Option<PlotPoint> {
        self.transform().display_to_data_opt(&point)
    }
}

impl Axes for StaticAxes {
    fn xlim(&self) -> (f64, f64) {
        self.x.limits()
    }

    fn ylim(&self) -> (f64, f64) {
        self.y.limits()
    }

    fn data_to_display(&self, point: PlotPoint) -> ScreenPoint {
        // f64 -> f64 casts cannot fail; NaN marks a point the scale rejected.
        self.transform()
            .data_to_display_opt(&point)
            .unwrap_or(ScreenPoint::new(f64::NAN, f64::NAN))
    }

    fn subplot_spec(&self) -> Option<SubplotSpec> {
        self.subplot.clone()
    }

    fn x_scale(&self) -> AxisScale {
        self.x.kind()
    }

    fn y_scale(&self) -> AxisScale {
        self.y.kind()
    }
}
