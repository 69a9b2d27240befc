//! Error kinds for typegraph operations

use strum_macros::{Display, IntoStaticStr};

/// What went wrong.
///
/// Callers match on the kind to decide whether a failure ends the run
/// (discovery, configuration) or only drops one file's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Catch-all for failures with no better kind.
    Unexpected,
    /// The TOML config could not be read or does not match the schema.
    ConfigInvalid,
    /// A command-line or API argument is unusable.
    InvalidArgument,

    /// A glob pattern did not compile.
    InvalidPattern,
    /// Walking a pattern's base directory failed.
    TraversalFailed,

    FileNotFound,
    PermissionDenied,
    IoFailed,
    /// Source text is not valid UTF-8.
    EncodingError,

    /// tree-sitter returned no tree.
    ParseFailed,
    /// The grammar could not be loaded into a parser.
    GrammarError,

    /// The renderer process could not be driven.
    RenderFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether an error of this kind is confined to one input file.
    ///
    /// Such errors drop that file from the run instead of aborting it.
    pub fn is_file_scoped(&self) -> bool {
        matches!(
            self,
            ErrorKind::ParseFailed
                | ErrorKind::EncodingError
                | ErrorKind::FileNotFound
                | ErrorKind::PermissionDenied
                | ErrorKind::IoFailed
        )
    }
}
