use std::fmt;
use std::io;

use crate::ErrorKind;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for all typegraph operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: Option<&'static str>,
    context: Vec<(&'static str, String)>,
    source: Option<BoxedSource>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: None,
            context: Vec::new(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The most recently recorded operation, `""` when none was.
    pub fn operation(&self) -> &'static str {
        self.operation.unwrap_or("")
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// First context value recorded under `key`.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(v.as_str()))
    }

    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Record the failing operation.
    ///
    /// An operation set earlier is kept in context under `called`, so the
    /// chain reads outermost first in `operation()` and inner calls in context.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if let Some(previous) = self.operation.replace(operation) {
            self.context.push(("called", previous.to_string()));
        }
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Attach the underlying error. Only one source is kept.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }

    pub fn is_file_scoped(&self) -> bool {
        self.kind.is_file_scoped()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(operation) = self.operation {
            write!(f, " in {operation}")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " [{}]", pairs.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Error");
        debug
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("operation", &self.operation());
        if !self.context.is_empty() {
            debug.field("context", &self.context);
        }
        if let Some(source) = &self.source {
            debug.field("source", source);
        }
        debug.finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::InvalidData => ErrorKind::EncodingError,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string()).set_source(err)
    }
}

impl Error {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    pub fn render_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RenderFailed, message)
    }

    /// A glob that failed to compile; the pattern is kept in context.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl fmt::Display) -> Self {
        let pattern = pattern.into();
        Self::new(
            ErrorKind::InvalidPattern,
            format!("invalid pattern '{pattern}': {reason}"),
        )
        .with_context("pattern", pattern)
    }

    /// Wrap an IO error that happened while touching `path`.
    pub fn io_at(err: io::Error, path: impl Into<String>) -> Self {
        Error::from(err).with_context("path", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_error_has_no_operation_or_context() {
        let err = Error::new(ErrorKind::ParseFailed, "no tree produced");
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.message(), "no tree produced");
        assert_eq!(err.operation(), "");
        assert!(err.context().is_empty());
        assert!(err.source_ref().is_none());
    }

    #[test]
    fn context_lookup_returns_first_match() {
        let err = Error::new(ErrorKind::InvalidPattern, "bad glob")
            .with_context("pattern", "src/[.ts")
            .with_context("base", "src")
            .with_context("base", "lib");

        assert_eq!(err.context().len(), 3);
        assert_eq!(err.context_value("base"), Some("src"));
        assert_eq!(err.context_value("missing"), None);
    }

    #[test]
    fn nested_operations_are_kept() {
        let err = Error::parse_failed("failed")
            .with_operation("ts::parse_tree")
            .with_operation("pipeline::read_file");

        assert_eq!(err.operation(), "pipeline::read_file");
        assert_eq!(err.context_value("called"), Some("ts::parse_tree"));
    }

    #[test]
    fn display_is_one_line() {
        let err = Error::parse_failed("no tree produced")
            .with_operation("ts::parse_tree")
            .with_context("path", "src/model.ts");

        assert_eq!(
            err.to_string(),
            "ParseFailed in ts::parse_tree: no tree produced [path=src/model.ts]"
        );
    }

    #[test]
    fn convenience_constructors() {
        let err = Error::invalid_pattern("src/[.ts", "unclosed class");
        assert_eq!(err.kind(), ErrorKind::InvalidPattern);
        assert!(err.message().contains("src/[.ts"));
        assert_eq!(err.context_value("pattern"), Some("src/[.ts"));

        let err = Error::config_invalid("unknown field `colour`");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(!err.is_file_scoped());
    }

    #[test]
    fn io_errors_map_onto_kinds() {
        let err = Error::io_at(io::Error::new(io::ErrorKind::NotFound, "gone"), "a.ts");
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.context_value("path"), Some("a.ts"));
        assert!(err.source_ref().is_some());

        let err = Error::from(io::Error::new(io::ErrorKind::InvalidData, "not utf-8"));
        assert_eq!(err.kind(), ErrorKind::EncodingError);

        let err = Error::from(io::Error::other("boom"));
        assert_eq!(err.kind(), ErrorKind::IoFailed);
    }
}
