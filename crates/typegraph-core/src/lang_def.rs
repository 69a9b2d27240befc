use std::path::Path;

use crate::Result;
use crate::model::Entity;

/// A source language the pipeline can extract entities from.
///
/// Implementations own parsing: they turn raw text into their own syntax
/// tree, adapt it to [`crate::SyntaxNode`], and run the extractor.
pub trait SourceLanguage {
    /// Human readable language name, used in logs.
    const NAME: &'static str;

    /// File extensions (without the dot) handled by this language.
    fn supported_extensions() -> &'static [&'static str];

    /// Parse `source` and extract its entities in declaration order.
    ///
    /// A file-scoped `Err` (see [`crate::ErrorKind::is_file_scoped`]) means
    /// the file could not be parsed and the caller drops it. Any other kind
    /// ends the run.
    fn extract_source(path: &str, source: &str) -> Result<Vec<Entity>>;

    fn supports_path(path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        Self::supported_extensions()
            .iter()
            .any(|ext| name.len() > ext.len() + 1 && name.ends_with(&format!(".{ext}")))
    }
}
