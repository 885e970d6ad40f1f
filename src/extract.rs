//! Coordinate map extraction from a rendered figure.

use crate::error::{Error, Result};
use crate::figure::{Axes, Figure};
use crate::model::{Bounds, CoordinateMap, Dims, Panel, PanelLog, PanelMapping};
use crate::transform::PlotPoint;

/// Builds the coordinate map of a rendered figure.
///
/// Returns `Ok(None)` when the figure has no introspectable geometry. Panels
/// are numbered from 1 in the figure's axes order. Variable names are not
/// known at this layer, so every `mapping` is empty.
///
/// ```rust
/// use coordmap::extract;
/// use coordmap::figure::{StaticAxes, StaticFigure, SubplotSpec};
/// use coordmap::transform::ScreenRect;
///
/// let bbox = ScreenRect { x: 80.0, y: 52.8, width: 496.0, height: 369.6 };
/// let axes = StaticAxes::new(bbox, (1.5, 5.5), (10.0, 35.0))
///     .with_subplot(SubplotSpec::cell(0, 0));
/// let figure = StaticFigure::new((6.4, 4.8), 100.0, vec![axes]);
///
/// let map = extract(&figure).unwrap().unwrap();
/// let panel = &map.panels[0];
/// assert_eq!(panel.panel_number, 1);
/// assert!((panel.range.bottom - 427.2).abs() < 1e-9); // 480 - 52.8
/// assert!((panel.range.top - 57.6).abs() < 1e-9); // 480 - 422.4
/// ```
pub fn extract<F: Figure>(figure: &F) -> Result<Option<CoordinateMap>> {
    let Some(all_axes) = figure.axes() else {
        crate::log::debug!("figure exposes no axes; no coordinate map");
        return Ok(None);
    };

    let (width_in, height_in) = figure.size_inches();
    let dpi = figure.dpi();
    let dims = Dims {
        width: width_in * dpi,
        height: height_in * dpi,
    };

    if !(dims.width.is_finite() && dims.height.is_finite()) {
        crate::log::debug!(?dims, "figure size is not finite; no coordinate map");
        return Ok(None);
    }

    let panels = all_axes
        .iter()
        .enumerate()
        .map(|(i, axes)| extract_panel(axes, i + 1, dims.height))
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(CoordinateMap { dims, panels }))
}

fn extract_panel<A: Axes>(axes: &A, panel_number: usize, height: f64) -> Result<Panel> {
    let spec = axes
        .subplot_spec()
        .ok_or(Error::MissingSubplotSpec {
            panel: panel_number,
        })?;

    let (left, right) = axes.xlim();
    let (bottom, top) = axes.ylim();
    let mut domain = Bounds {
        left,
        right,
        bottom,
        top,
    };

    // Opposite corners are enough: the data-to-display transform is affine
    // per axis, so the plotting area stays an axis-aligned rectangle.
    let low = axes.data_to_display(PlotPoint::new(domain.left, domain.bottom));
    let high = axes.data_to_display(PlotPoint::new(domain.right, domain.top));

    // Display pixels grow upward from the bottom; client pixels grow
    // downward from the top.
    let range = Bounds {
        left: low.x,
        right: high.x,
        bottom: height - low.y,
        top: height - high.y,
    };

    let mut log = PanelLog::default();

    let x_scale = axes.x_scale();
    if let Some(base) = x_scale.log_base() {
        log.x = Some(base);
        domain.left = x_scale.forward(domain.left);
        domain.right = x_scale.forward(domain.right);
    }

    let y_scale = axes.y_scale();
    if let Some(base) = y_scale.log_base() {
        log.y = Some(base);
        domain.bottom = y_scale.forward(domain.bottom);
        domain.top = y_scale.forward(domain.top);
    }

    crate::log::debug!(panel = panel_number, ?domain, ?range, "extracted panel");

    Ok(Panel {
        panel_number,
        row: spec.row(),
        col: spec.col(),
        panel_vars: None,
        domain,
        range,
        log,
        mapping: PanelMapping::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{StaticAxes, StaticFigure, SubplotSpec};
    use crate::transform::ScreenRect;

    fn bbox() -> ScreenRect {
        ScreenRect {
            x: 50.0,
            y: 40.0,
            width: 300.0,
            height: 200.0,
        }
    }

    #[test]
    fn dims_come_from_size_and_dpi() {
        let figure = StaticFigure::new((5.0, 3.0), 96.0, Vec::new());
        let map = extract(&figure).unwrap().unwrap();
        assert_eq!(map.dims.width, 480.0);
        assert_eq!(map.dims.height, 288.0);
        assert!(map.panels.is_empty());
    }

    #[test]
    fn unrendered_figure_yields_none() {
        let figure = StaticFigure::unrendered((5.0, 3.0), 96.0);
        assert!(extract(&figure).unwrap().is_none());
    }

    #[test]
    fn non_finite_size_yields_none() {
        let figure = StaticFigure::new((f64::NAN, 3.0), 96.0, Vec::new());
        assert!(extract(&figure).unwrap().is_none());
    }

    #[test]
    fn missing_subplot_spec_is_an_error() {
        let figure = StaticFigure::new(
            (5.0, 3.0),
            100.0,
            vec![
                StaticAxes::new(bbox(), (0.0, 1.0), (0.0, 1.0)).with_subplot(SubplotSpec::cell(0, 0)),
                StaticAxes::new(bbox(), (0.0, 1.0), (0.0, 1.0)),
            ],
        );
        assert!(matches!(
            extract(&figure),
            Err(Error::MissingSubplotSpec { panel: 2 })
        ));
    }

    #[test]
    fn range_is_flipped_to_top_left_origin() {
        let axes = StaticAxes::new(bbox(), (0.0, 10.0), (0.0, 1.0))
            .with_subplot(SubplotSpec::cell(0, 0));
        let figure = StaticFigure::new((4.0, 3.0), 100.0, vec![axes]);

        let panel = &extract(&figure).unwrap().unwrap().panels[0];
        assert_eq!(panel.range.left, 50.0);
        assert_eq!(panel.range.right, 350.0);
        assert_eq!(panel.range.bottom, 260.0);
        assert_eq!(panel.range.top, 60.0);
    }

    #[test]
    fn engine_log_axis_reports_base_and_log_domain() {
        let axes = StaticAxes::new(bbox(), (1.0, 1000.0), (0.0, 1.0))
            .with_subplot(SubplotSpec::cell(0, 0))
            .with_x_log(10.0);
        let figure = StaticFigure::new((4.0, 3.0), 100.0, vec![axes]);

        let panel = &extract(&figure).unwrap().unwrap().panels[0];
        assert_eq!(panel.log.x, Some(10.0));
        assert_eq!(panel.log.y, None);
        assert!(panel.domain.left.abs() < 1e-12);
        assert!((panel.domain.right - 3.0).abs() < 1e-12);
        assert_eq!(panel.domain.top, 1.0);
    }

    #[test]
    fn grid_position_comes_from_subplot_spec() {
        let axes = StaticAxes::new(bbox(), (0.0, 1.0), (0.0, 1.0))
            .with_subplot(SubplotSpec::cell(1, 2));
        let figure = StaticFigure::new((4.0, 3.0), 100.0, vec![axes]);

        let panel = &extract(&figure).unwrap().unwrap().panels[0];
        assert_eq!((panel.row, panel.col), (2, 3));
        assert_eq!(panel.mapping, PanelMapping::default());
        assert!(panel.panel_vars.is_none());
    }
}
