//! Parser-independent view of a syntax tree.
//!
//! A parser collaborator adapts its own node type to [`SyntaxNode`] and
//! classifies its node kinds into the closed [`SyntaxKind`] set. Everything
//! the extractor does not care about is [`SyntaxKind::Other`].

use strum_macros::{Display, IntoStaticStr};

/// Syntactic kinds the extractor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum SyntaxKind {
    /// `interface Foo extends Bar { ... }`
    InterfaceDeclaration,
    /// `type Foo = ...`
    TypeAliasDeclaration,
    /// `name?: Type` inside an interface body
    PropertySignature,
    /// `extends A, B` on an interface
    ExtendsClause,
    /// `: Type` attached to a member
    TypeAnnotation,
    UnionType,
    LiteralType,
    /// The `?` token on an optional member
    OptionalMarker,
    Other,
}

/// Named child slots the extractor asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Body,
    Type,
    Value,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

pub trait SyntaxNode: Sized {
    fn kind(&self) -> SyntaxKind;

    /// Exact source text of the node, `None` when the span cannot be read.
    fn text(&self) -> Option<&str>;

    /// All children, named and anonymous, left to right.
    fn children(&self) -> Vec<Self>;

    fn child_by_field(&self, field: Field) -> Option<Self>;

    /// Whether the node is a named grammar node rather than a bare token.
    fn is_named(&self) -> bool;

    fn named_children(&self) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(|child| child.is_named())
            .collect()
    }

    fn first_child_of_kind(&self, kind: SyntaxKind) -> Option<Self> {
        self.children().into_iter().find(|child| child.kind() == kind)
    }

    fn owned_text(&self) -> Option<String> {
        self.text().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_grammar_spelling() {
        assert_eq!(Field::Name.as_str(), "name");
        assert_eq!(Field::Value.as_str(), "value");
        assert_eq!(Field::Body.to_string(), "body");
    }
}
