//! Classification of declarations into entities.
//!
//! The extractor walks the whole tree in pre-order. Interface and type-alias
//! declarations become entities; every other node is only descended into.
//! A match never prunes the walk, so nested declarations are found too.
//!
//! Anomalies (a member without a readable name or type, an alias without a
//! right-hand side) drop that member or declaration and are counted, never
//! raised.

use tracing::{debug, trace};

use crate::model::{AliasType, Entity, EnumType, ObjectType, Property, UnionType};
use crate::syntax::{Field, SyntaxKind, SyntaxNode};

// Grow the stack before it runs out on deeply nested trees.
const RED_ZONE: usize = 64 * 1024;
const STACK_GROWTH: usize = 1024 * 1024;

/// Extract every entity below `root`, in pre-order.
pub fn extract_entities<N: SyntaxNode>(root: &N) -> Vec<Entity> {
    let mut extractor = Extractor::new();
    extractor.visit_node(root);
    extractor.into_entities()
}

/// Declaration shapes that produce an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declaration {
    Interface,
    TypeAlias,
}

impl Declaration {
    fn classify(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::InterfaceDeclaration => Some(Declaration::Interface),
            SyntaxKind::TypeAliasDeclaration => Some(Declaration::TypeAlias),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Extractor {
    entities: Vec<Entity>,
    skipped: usize,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities found so far.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of members or declarations dropped as malformed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }

    pub fn visit_node<N: SyntaxNode>(&mut self, node: &N) {
        let entity = match Declaration::classify(node.kind()) {
            Some(Declaration::Interface) => self.object_type(node).map(Entity::Object),
            Some(Declaration::TypeAlias) => self.type_alias(node),
            None => None,
        };
        if let Some(entity) = entity {
            trace!(name = entity.name(), kind = %entity.kind(), "extracted entity");
            self.entities.push(entity);
        }
        self.visit_children(node);
    }

    fn visit_children<N: SyntaxNode>(&mut self, node: &N) {
        stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || {
            for child in node.children() {
                self.visit_node(&child);
            }
        });
    }

    fn declared_name<N: SyntaxNode>(&mut self, node: &N) -> Option<String> {
        let name = node
            .child_by_field(Field::Name)
            .and_then(|ident| ident.owned_text());
        if name.is_none() {
            self.skipped += 1;
            debug!(kind = %node.kind(), "declaration without a readable name, skipped");
        }
        name
    }

    fn object_type<N: SyntaxNode>(&mut self, node: &N) -> Option<ObjectType> {
        let name = self.declared_name(node)?;

        let mut properties = Vec::new();
        if let Some(body) = node.child_by_field(Field::Body) {
            for member in body.named_children() {
                if member.kind() != SyntaxKind::PropertySignature {
                    continue;
                }
                if let Some(property) = self.property(&name, &member) {
                    properties.push(property);
                }
            }
        }

        let includes = node
            .children()
            .into_iter()
            .filter(|child| child.kind() == SyntaxKind::ExtendsClause)
            .flat_map(|clause| clause.named_children())
            .filter_map(|ty| ty.owned_text())
            .collect();

        Some(ObjectType {
            name,
            properties,
            includes,
        })
    }

    fn property<N: SyntaxNode>(&mut self, owner: &str, member: &N) -> Option<Property> {
        let annotation = member
            .child_by_field(Field::Type)
            .or_else(|| member.first_child_of_kind(SyntaxKind::TypeAnnotation));
        // No annotation at all: nothing to draw, not an anomaly.
        let annotation = annotation?;

        let name = member.child_by_field(Field::Name).and_then(|n| n.owned_text());
        let ty = annotation_type(&annotation);
        let (Some(name), Some(ty)) = (name, ty) else {
            self.skipped += 1;
            debug!(owner, "property signature without readable name or type, skipped");
            return None;
        };

        let nullable = member
            .first_child_of_kind(SyntaxKind::OptionalMarker)
            .is_some();
        Some(Property::new(name, ty, nullable))
    }

    fn type_alias<N: SyntaxNode>(&mut self, node: &N) -> Option<Entity> {
        let name = self.declared_name(node)?;

        let Some(union) = node.first_child_of_kind(SyntaxKind::UnionType) else {
            let value = node.child_by_field(Field::Value).and_then(|v| v.owned_text());
            let Some(ty) = value else {
                self.skipped += 1;
                debug!(name, "type alias without a readable right-hand side, skipped");
                return None;
            };
            return Some(Entity::Alias(AliasType { name, ty }));
        };

        let members = union_members(union);
        let values: Vec<String> = members
            .iter()
            .filter(|member| member.kind() == SyntaxKind::LiteralType)
            .filter_map(|member| member.owned_text())
            .collect();
        if !values.is_empty() {
            return Some(Entity::Enum(EnumType { name, values }));
        }

        let types: Vec<String> = members.iter().filter_map(|m| m.owned_text()).collect();
        if types.is_empty() {
            self.skipped += 1;
            debug!(name, "union without members, skipped");
            return None;
        }
        Some(Entity::Union(UnionType { name, types }))
    }
}

/// The type inside a `: Type` annotation, without the colon.
///
/// Parsers that hand the bare type node over instead of an annotation
/// wrapper are accepted as well.
fn annotation_type<N: SyntaxNode>(annotation: &N) -> Option<String> {
    if annotation.kind() != SyntaxKind::TypeAnnotation {
        return annotation.owned_text().map(|t| t.trim().to_string());
    }
    annotation
        .named_children()
        .into_iter()
        .next()
        .and_then(|ty| ty.owned_text())
        .map(|t| t.trim().to_string())
}

/// Members of a union in source order.
///
/// Grammars that parse `A | B | C` as nested binary unions are flattened;
/// parenthesised unions stay a single member.
fn union_members<N: SyntaxNode>(union: N) -> Vec<N> {
    let mut members = Vec::new();
    let mut pending = vec![union];
    while let Some(node) = pending.pop() {
        if node.kind() == SyntaxKind::UnionType {
            pending.extend(node.named_children().into_iter().rev());
        } else {
            members.push(node);
        }
    }
    members
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::simple_tree::*;

    #[test]
    fn interface_properties_keep_order_and_drop_untyped() {
        let root = program(vec![interface(
            "Account",
            &[],
            vec![
                prop("id", Some("string"), false),
                prop("untyped", None, false),
                prop("owner", Some("User"), true),
                method("close"),
                index_signature("[key: string]: unknown"),
                prop("tags", Some("string[]"), false),
            ],
        )]);

        let entities = extract_entities(&&root);
        assert_eq!(
            entities,
            vec![Entity::Object(ObjectType {
                name: "Account".into(),
                properties: vec![
                    Property::new("id", "string", false),
                    Property::new("owner", "User", true),
                    Property::new("tags", "string[]", false),
                ],
                includes: vec![],
            })]
        );
    }

    #[test]
    fn heritage_clauses_concatenate_in_order() {
        let root = program(vec![interface("Admin", &[&["User", "Auditable"], &["Base<T>"]], vec![])]);
        let entities = extract_entities(&&root);
        let Entity::Object(object) = &entities[0] else {
            panic!("expected object type");
        };
        assert_eq!(object.includes, vec!["User", "Auditable", "Base<T>"]);
    }

    #[test]
    fn literal_unions_become_enums() {
        let root = program(vec![type_alias(
            "Status",
            union(vec![literal("\"OPEN\""), type_ref("Other"), literal("\"CLOSED\"")]),
        )]);
        let entities = extract_entities(&&root);
        assert_eq!(
            entities,
            vec![Entity::Enum(EnumType {
                name: "Status".into(),
                values: vec!["\"OPEN\"".into(), "\"CLOSED\"".into()],
            })]
        );
    }

    #[test]
    fn non_literal_unions_keep_every_member() {
        let root = program(vec![type_alias(
            "Shape",
            union(vec![type_ref("Circle"), type_ref("Square"), type_ref("string")]),
        )]);
        let entities = extract_entities(&&root);
        assert_eq!(
            entities,
            vec![Entity::Union(UnionType {
                name: "Shape".into(),
                types: vec!["Circle".into(), "Square".into(), "string".into()],
            })]
        );
    }

    #[test]
    fn nested_binary_unions_are_flattened() {
        let nested = union(vec![
            union(vec![type_ref("A"), type_ref("B")]),
            type_ref("C"),
        ]);
        let root = program(vec![type_alias("Abc", nested)]);
        let entities = extract_entities(&&root);
        let Entity::Union(union) = &entities[0] else {
            panic!("expected union type");
        };
        assert_eq!(union.types, vec!["A", "B", "C"]);
    }

    #[test]
    fn non_union_alias_keeps_right_hand_side() {
        let root = program(vec![type_alias("Handler", type_ref("(e: Event) => void"))]);
        let entities = extract_entities(&&root);
        assert_eq!(
            entities,
            vec![Entity::Alias(AliasType {
                name: "Handler".into(),
                ty: "(e: Event) => void".into(),
            })]
        );
    }

    #[test]
    fn nested_declarations_are_found_in_pre_order() {
        let inner = interface("Inner", &[], vec![]);
        let outer = SimpleNode::named(SyntaxKind::Other, "namespace N { ... }")
            .with_children(vec![interface("Early", &[], vec![]), wrapper(inner)]);
        let root = program(vec![outer, type_alias("Last", type_ref("Inner"))]);

        let names: Vec<String> = extract_entities(&&root)
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, vec!["Early", "Inner", "Last"]);
    }

    #[test]
    fn malformed_members_are_skipped_without_aborting() {
        let broken = SimpleNode::named(SyntaxKind::PropertySignature, "bad: ???")
            .with_children(vec![
                ident("bad").as_field(Field::Name),
                SimpleNode::named(SyntaxKind::TypeAnnotation, ": ???")
                    .as_field(Field::Type)
                    .with_children(vec![SimpleNode::unreadable(SyntaxKind::Other)]),
            ]);
        let root = program(vec![
            interface("First", &[], vec![broken, prop("ok", Some("number"), false)]),
            interface("Second", &[], vec![prop("x", Some("string"), false)]),
        ]);

        let mut extractor = Extractor::new();
        extractor.visit_node(&&root);
        assert_eq!(extractor.skipped(), 1);

        let entities = extractor.into_entities();
        assert_eq!(entities.len(), 2);
        let Entity::Object(first) = &entities[0] else {
            panic!("expected object type");
        };
        assert_eq!(first.properties, vec![Property::new("ok", "number", false)]);
    }

    #[test]
    fn declarations_without_names_are_dropped() {
        let nameless = SimpleNode::named(SyntaxKind::TypeAliasDeclaration, "type = A");
        let root = program(vec![nameless, type_alias("Kept", type_ref("A"))]);
        let mut extractor = Extractor::new();
        extractor.visit_node(&&root);
        assert_eq!(extractor.skipped(), 1);
        assert_eq!(extractor.entities().len(), 1);
        assert_eq!(extractor.entities()[0].name(), "Kept");
    }
}
