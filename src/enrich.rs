//! Coordinate map enrichment from a declarative plot.

use crate::config::EnrichOptions;
use crate::declarative::{Aesthetics, DeclarativePlot, Facet, Layout};
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::figure::Figure;
use crate::model::{Axis, CoordinateMap, Panel, PanelMapping, PanelVars};
use crate::precedence::{LogSources, merge_log};

/// [`enrich_with`] using default options.
pub fn enrich<P, F>(plot: &P, figure: &F) -> Result<Option<CoordinateMap>>
where
    P: DeclarativePlot,
    F: Figure,
{
    enrich_with(plot, figure, &EnrichOptions::default())
}

/// Builds the coordinate map of `figure` and overlays what only the
/// declarative `plot` knows: variable names, facet values, and scale or
/// coordinate transforms.
///
/// `plot` is cloned and the clone is built; the caller's value is never
/// touched. Returns `Ok(None)` exactly when [`extract`] does.
pub fn enrich_with<P, F>(plot: &P, figure: &F, options: &EnrichOptions) -> Result<Option<CoordinateMap>>
where
    P: DeclarativePlot,
    F: Figure,
{
    let Some(mut coordmap) = extract(figure)? else {
        return Ok(None);
    };

    let mut plot = plot.clone();
    plot.build();
    let layout = plot.layout().ok_or(Error::LayoutNotBuilt)?;

    let mapping = shared_mapping(plot.aesthetics(), layout);

    coordmap.panels = coordmap
        .panels
        .into_iter()
        .map(|panel| enrich_panel(panel, &mapping, layout, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(coordmap))
}

/// Variable names shared by every panel.
fn shared_mapping(aesthetics: &Aesthetics, layout: &Layout) -> PanelMapping {
    let mut mapping = PanelMapping {
        x: aesthetics.get("x").map(str::to_string),
        y: aesthetics.get("y").map(str::to_string),
        ..PanelMapping::default()
    };

    if layout.coord.is_flipped() {
        std::mem::swap(&mut mapping.x, &mut mapping.y);
    }

    match &layout.facet {
        Facet::Null => {}
        Facet::Grid { cols, rows } => {
            // Column variable first; a row-only grid puts its row in slot 1.
            let mut names = cols.first().into_iter().chain(rows.first()).cloned();
            mapping.panelvar1 = names.next();
            mapping.panelvar2 = names.next();
        }
        Facet::Wrap { vars } => {
            mapping.panelvar1 = vars.first().cloned();
        }
    }

    mapping
}

fn enrich_panel(
    mut panel: Panel,
    mapping: &PanelMapping,
    layout: &Layout,
    options: &EnrichOptions,
) -> Result<Panel> {
    let number = panel.panel_number;
    let row = layout.row_for_panel(number)?;

    panel.mapping = mapping.clone();

    if let Some(var1) = &mapping.panelvar1 {
        let mut vars = PanelVars {
            panelvar1: Some(row.numeric(var1)?),
            panelvar2: None,
        };
        if let Some(var2) = &mapping.panelvar2 {
            vars.panelvar2 = Some(row.numeric(var2)?);
        }
        panel.panel_vars = Some(vars);
    }

    for (axis, index) in [(Axis::X, row.scale_x), (Axis::Y, row.scale_y)] {
        let trans = &layout.scale(axis, index)?.trans;

        let sources = LogSources {
            engine: panel.log.get(axis),
            scale: trans.log_base(),
            coord: layout.coord.trans_for(axis).and_then(|t| t.log_base()),
        };
        panel.log.set(axis, merge_log(number, axis, sources, options.log_conflict)?);

        // The engine drew -x; report the data value.
        if trans.is_reverse() {
            let domain = &mut panel.domain;
            match axis {
                Axis::X => {
                    domain.left = -domain.left;
                    domain.right = -domain.right;
                }
                Axis::Y => {
                    domain.bottom = -domain.bottom;
                    domain.top = -domain.top;
                }
            }
        }
    }

    crate::log::debug!(
        panel = number,
        mapping = ?panel.mapping,
        log = ?panel.log,
        "enriched panel"
    );

    Ok(panel)
}
