//! Declarative plotting layer interface.
//!
//! A declarative plot knows things its rendered figure does not: which data
//! variables feed each aesthetic, how panels are faceted, and which scale
//! transforms it applied before handing data to the engine. The enricher
//! reads these through [`DeclarativePlot`].

mod layout;
mod trans;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use layout::{
    CoordKind, CoordSystem, Facet, Layout, LayoutRow, PanelValue, PositionScale,
};
pub use trans::TransformKind;

/// A declarative plot specification.
///
/// `Clone` must be a deep copy: the enricher builds a clone, never the
/// caller's value.
pub trait DeclarativePlot: Clone {
    /// Finalizes the plot so that [`DeclarativePlot::layout`] is populated.
    /// Calling it on an already built plot must not change it.
    fn build(&mut self);

    /// Top-level aesthetic mapping.
    fn aesthetics(&self) -> &Aesthetics;

    /// Layout table; `None` until the plot is built.
    fn layout(&self) -> Option<&Layout>;
}

/// Aesthetic name to variable name, e.g. `x -> "wt"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aesthetics(BTreeMap<String, String>);

impl Aesthetics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, aesthetic: impl Into<String>, variable: impl Into<String>) -> Self {
        self.0.insert(aesthetic.into(), variable.into());
        self
    }

    pub fn get(&self, aesthetic: &str) -> Option<&str> {
        self.0.get(aesthetic).map(String::as_str)
    }
}
