//! File discovery: resolve glob patterns into an ordered list of paths.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};
use tracing::{debug, info, warn};

use typegraph_core::{Error, ErrorKind, Result};

fn has_glob_meta(segment: &str) -> bool {
    segment.contains(['*', '?', '[', '{'])
}

/// A pattern split at its first glob segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternParts {
    /// Literal directory the walk starts from.
    pub base: PathBuf,
    /// Glob matched relative to `base`; `None` when the pattern names one file.
    pub glob: Option<String>,
    /// Whether `base` was implied (`.`) rather than written in the pattern.
    pub implicit_base: bool,
}

/// Split `pattern` into its literal leading directories and the glob remainder.
pub fn split_pattern(pattern: &str) -> PatternParts {
    let segments: Vec<&str> = pattern.split('/').collect();
    let Some(first_glob) = segments.iter().position(|s| has_glob_meta(s)) else {
        return PatternParts {
            base: PathBuf::from(pattern),
            glob: None,
            implicit_base: false,
        };
    };

    let base = segments[..first_glob].join("/");
    let glob = segments[first_glob..].join("/");
    if first_glob == 0 {
        PatternParts {
            base: PathBuf::from("."),
            glob: Some(glob),
            implicit_base: true,
        }
    } else if base.is_empty() {
        // Absolute pattern whose first segment is already a glob.
        PatternParts {
            base: PathBuf::from("/"),
            glob: Some(glob),
            implicit_base: false,
        }
    } else {
        PatternParts {
            base: PathBuf::from(base),
            glob: Some(glob),
            implicit_base: false,
        }
    }
}

fn compile_glob(pattern: &str, base: &Path, glob: &str) -> Result<Override> {
    let mut builder = OverrideBuilder::new(base);
    // Leading slash anchors the glob at `base`, as a shell glob would be.
    builder
        .add(&format!("/{glob}"))
        .map_err(|e| Error::invalid_pattern(pattern, &e).with_operation("discovery::compile_glob"))?;
    builder
        .build()
        .map_err(|e| Error::invalid_pattern(pattern, &e).with_operation("discovery::compile_glob"))
}

fn display_path(path: &Path, implicit_base: bool) -> String {
    let path = if implicit_base {
        path.strip_prefix(".").unwrap_or(path)
    } else {
        path
    };
    path.to_string_lossy().into_owned()
}

/// Expand one pattern into files, sorted by path and free of duplicates.
pub fn expand_pattern(pattern: &str) -> Result<Vec<String>> {
    let parts = split_pattern(pattern);
    let Some(glob) = parts.glob.as_deref() else {
        if parts.base.is_file() {
            return Ok(vec![pattern.to_string()]);
        }
        warn!(pattern, "pattern names no existing file");
        return Ok(Vec::new());
    };

    let overrides = compile_glob(pattern, &parts.base, glob)?;
    if !parts.base.is_dir() {
        warn!(pattern, base = %parts.base.display(), "pattern base is not a directory");
        return Ok(Vec::new());
    }

    let mut builder = WalkBuilder::new(&parts.base);
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(false)
        .overrides(overrides)
        .sort_by_file_path(|a, b| a.cmp(b));

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|e| {
            Error::new(ErrorKind::TraversalFailed, format!("failed to walk '{pattern}'"))
                .with_operation("discovery::expand_pattern")
                .with_context("pattern", pattern)
                .set_source(e)
        })?;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        // Whitelist overrides win over the hidden filter, so dotfiles are checked here.
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = display_path(entry.path(), parts.implicit_base);
        if seen.insert(path.clone()) {
            files.push(path);
        }
    }

    debug!(pattern, files = files.len(), "expanded pattern");
    Ok(files)
}

/// Resolve every pattern in order and concatenate the results.
///
/// Duplicates are removed within a pattern but not across patterns.
pub fn discover_files(patterns: &[String]) -> Result<Vec<String>> {
    let discovery_start = Instant::now();

    let mut files = Vec::new();
    for pattern in patterns {
        files.extend(expand_pattern(pattern)?);
    }

    info!(
        "File discovery: {:.2}s ({} files)",
        discovery_start.elapsed().as_secs_f64(),
        files.len()
    );

    if files.is_empty() {
        return Err(Error::invalid_argument(
            "no input files found; check that the patterns match existing files",
        )
        .with_operation("discovery::discover_files"));
    }

    Ok(files)
}
