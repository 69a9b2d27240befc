//! Options for graph synthesis.

use serde::Deserialize;
use strum_macros::{Display, EnumString};

use typegraph_core::PrimitiveSet;

/// Overall layout direction handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Layout {
    /// Rank nodes left to right (`rankdir=LR`).
    #[default]
    LeftToRight,
    /// Let the layout engine decide.
    Free,
}

/// Colors used for text, edges and cluster fills.
#[derive(Debug, Clone)]
pub struct Palette {
    pub full: &'static str,
    pub muted: &'static str,
    pub object_fill: &'static str,
    pub enum_fill: &'static str,
    pub union_fill: &'static str,
    pub alias_fill: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            full: "#212121",
            muted: "#9E9E9E",
            object_fill: "#FFF8E1",
            enum_fill: "#E8F5E9",
            union_fill: "#E3F2FD",
            alias_fill: "#F3E5F5",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Type spellings that never produce aggregation or membership edges.
    pub primitives: PrimitiveSet,
    pub layout: Layout,
    pub palette: Palette,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primitives(mut self, primitives: PrimitiveSet) -> Self {
        self.primitives = primitives;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}
