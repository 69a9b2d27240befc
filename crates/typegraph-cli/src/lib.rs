//! typegraph command-line interface.
//!
//! Runs the whole pipeline: discover files, extract entities in parallel,
//! synthesize the DOT document and hand it to the renderer.
pub mod config;
pub mod discovery;
pub mod pipeline;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use typegraph_core::{Error, Result, SourceLanguage};
use typegraph_dot::render_graph_with_options;

pub use config::{GraphConfig, RendererConfig};
pub use discovery::discover_files;
pub use pipeline::{Extraction, extract_files};
pub use render::{RenderOutcome, Renderer};

/// Options for running typegraph.
#[derive(Debug, Clone)]
pub struct TypegraphOptions {
    pub patterns: Vec<String>,
    /// Image written by the renderer.
    pub output: PathBuf,
    pub config: GraphConfig,
    /// Run the renderer; when false only DOT text is produced.
    pub render: bool,
    /// Also write the DOT text to this file.
    pub dot_output: Option<PathBuf>,
}

/// What a run produced.
#[derive(Debug)]
pub struct RunOutput {
    pub dot: String,
    /// `None` when rendering was disabled.
    pub render: Option<RenderOutcome>,
}

/// Discover, extract and synthesize, returning the DOT text.
pub fn generate_dot<L: SourceLanguage>(patterns: &[String], config: &GraphConfig) -> Result<String> {
    let files: Vec<String> = discover_files(patterns)?
        .into_iter()
        .filter(|path| {
            let supported = L::supports_path(Path::new(path));
            if !supported {
                debug!(path = %path, language = L::NAME, "skipping unsupported file");
            }
            supported
        })
        .collect();

    let extraction = extract_files::<L>(&files)?;

    let synth_start = Instant::now();
    let dot = render_graph_with_options(&extraction.entities, &config.render_options());
    info!(
        "Graph synthesis: {:.2}s",
        synth_start.elapsed().as_secs_f64()
    );
    Ok(dot)
}

/// Main entry point
pub fn run_main<L: SourceLanguage>(opts: &TypegraphOptions) -> Result<RunOutput> {
    let dot = generate_dot::<L>(&opts.patterns, &opts.config)?;

    if let Some(path) = &opts.dot_output {
        fs::write(path, &dot).map_err(|e| {
            Error::io_at(e, path.display().to_string()).with_operation("run_main::write_dot")
        })?;
        info!(path = %path.display(), "DOT written");
    }

    let render = if opts.render {
        Some(opts.config.renderer().render(&dot, &opts.output)?)
    } else {
        None
    };

    Ok(RunOutput { dot, render })
}
