//! TypeScript language support for typegraph.
//!
//! Parsing is done with tree-sitter-typescript; the resulting tree is
//! adapted to [`typegraph_core::SyntaxNode`] and fed to the core extractor.

mod node;
pub mod token;

use std::cell::RefCell;

use tracing::{debug, warn};

use typegraph_core::{Entity, Error, ErrorKind, Extractor, Result, SourceLanguage};

pub use node::TsNode;

/// Grammar variant, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    pub fn for_path(path: &str) -> Self {
        if path.ends_with(".tsx") {
            Dialect::Tsx
        } else {
            Dialect::TypeScript
        }
    }

    fn language(self) -> tree_sitter::Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

fn new_parser(dialect: Dialect) -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&dialect.language()).map_err(|e| {
        Error::new(ErrorKind::GrammarError, e.to_string())
            .with_operation("ts::new_parser")
            .with_context("dialect", format!("{dialect:?}"))
            .set_source(e)
    })?;
    Ok(parser)
}

/// Parse `source` into a tree-sitter tree.
///
/// Parsers are created once per thread and reused.
pub fn parse_tree(dialect: Dialect, source: &str) -> Result<tree_sitter::Tree> {
    thread_local! {
        static PARSERS: RefCell<[Option<tree_sitter::Parser>; 2]> = const { RefCell::new([None, None]) };
    }

    PARSERS.with(|parsers| {
        let mut parsers = parsers.borrow_mut();
        let slot = &mut parsers[dialect as usize];
        if slot.is_none() {
            *slot = Some(new_parser(dialect)?);
        }
        let Some(parser) = slot.as_mut() else {
            return Err(Error::unexpected("parser slot empty").with_operation("ts::parse_tree"));
        };
        parser
            .parse(source, None)
            .ok_or_else(|| Error::parse_failed("tree-sitter produced no tree").with_operation("ts::parse_tree"))
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LangTypeScript;

impl SourceLanguage for LangTypeScript {
    const NAME: &'static str = "typescript";

    fn supported_extensions() -> &'static [&'static str] {
        &["ts", "tsx", "mts", "cts"]
    }

    fn extract_source(path: &str, source: &str) -> Result<Vec<Entity>> {
        let tree = parse_tree(Dialect::for_path(path), source)
            .map_err(|e| e.with_context("path", path))?;

        let root = tree.root_node();
        if root.has_error() {
            warn!(path, "syntax errors in file; extracting what parsed");
        }

        let mut extractor = Extractor::new();
        extractor.visit_node(&TsNode::new(root, source));
        if extractor.skipped() > 0 {
            debug!(path, skipped = extractor.skipped(), "dropped malformed declarations");
        }
        Ok(extractor.into_entities())
    }
}
