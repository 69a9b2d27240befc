//! [`SyntaxNode`] adapter over tree-sitter nodes.

use typegraph_core::{Field, SyntaxKind, SyntaxNode};

use crate::token::syntax_kind;

/// A tree-sitter node paired with the source it spans.
#[derive(Debug, Clone, Copy)]
pub struct TsNode<'t> {
    node: tree_sitter::Node<'t>,
    source: &'t str,
}

impl<'t> TsNode<'t> {
    pub fn new(node: tree_sitter::Node<'t>, source: &'t str) -> Self {
        Self { node, source }
    }

    /// The grammar wraps `undefined` in `literal_type`, but it is a keyword
    /// type and must not turn a union into an enum.
    fn is_undefined_literal(&self) -> bool {
        let mut cursor = self.node.walk();
        let mut named = self.node.named_children(&mut cursor);
        matches!(
            (named.next(), named.next()),
            (Some(only), None) if only.kind() == "undefined"
        )
    }
}

impl<'t> SyntaxNode for TsNode<'t> {
    fn kind(&self) -> SyntaxKind {
        match syntax_kind(self.node.kind()) {
            SyntaxKind::LiteralType if self.is_undefined_literal() => SyntaxKind::Other,
            kind => kind,
        }
    }

    fn text(&self) -> Option<&str> {
        self.source.get(self.node.start_byte()..self.node.end_byte())
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|child| TsNode::new(child, self.source))
            .collect()
    }

    fn child_by_field(&self, field: Field) -> Option<Self> {
        self.node
            .child_by_field_name(field.as_str())
            .map(|child| TsNode::new(child, self.source))
    }

    fn is_named(&self) -> bool {
        self.node.is_named()
    }
}
