//! Mapping from tree-sitter-typescript node kinds to [`SyntaxKind`].

use typegraph_core::SyntaxKind;

/// Classify a grammar node kind.
///
/// Kinds not listed here are irrelevant to extraction and map to
/// [`SyntaxKind::Other`].
pub fn syntax_kind(ts_kind: &str) -> SyntaxKind {
    match ts_kind {
        "interface_declaration" => SyntaxKind::InterfaceDeclaration,
        "type_alias_declaration" => SyntaxKind::TypeAliasDeclaration,
        "property_signature" => SyntaxKind::PropertySignature,
        "extends_type_clause" => SyntaxKind::ExtendsClause,
        "type_annotation" => SyntaxKind::TypeAnnotation,
        "union_type" => SyntaxKind::UnionType,
        "literal_type" => SyntaxKind::LiteralType,
        "?" => SyntaxKind::OptionalMarker,
        _ => SyntaxKind::Other,
    }
}
