//! TOML configuration for a run.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use typegraph_core::{DEFAULT_PRIMITIVES, Error, PrimitiveSet, Result};
use typegraph_dot::{Layout, RenderOptions};

use crate::render::Renderer;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Type spellings that never produce edges.
    pub primitives: Vec<String>,
    /// Treat `(x: T) => U` style types as primitive.
    pub function_types_are_primitive: bool,
    pub layout: Layout,
    pub renderer: RendererConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    pub program: String,
    pub format: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            primitives: DEFAULT_PRIMITIVES.iter().map(|s| s.to_string()).collect(),
            function_types_are_primitive: true,
            layout: Layout::default(),
            renderer: RendererConfig::default(),
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        let renderer = Renderer::default();
        Self {
            program: renderer.program,
            format: renderer.format,
        }
    }
}

impl GraphConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::config_invalid(format!("failed to read config {}", path.display()))
                .with_operation("config::from_path")
                .with_context("path", path.display().to_string())
                .set_source(e)
        })?;
        Self::from_toml(&text).map_err(|e| e.with_context("path", path.display().to_string()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            Error::config_invalid(format!("invalid TOML config: {}", e.message()))
                .with_operation("config::from_toml")
                .set_source(e)
        })
    }

    pub fn primitive_set(&self) -> PrimitiveSet {
        PrimitiveSet::new(self.primitives.iter().cloned())
            .with_function_types(self.function_types_are_primitive)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_primitives(self.primitive_set())
            .with_layout(self.layout)
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(&self.renderer.program, &self.renderer.format)
    }
}
