//! Relationship edges between entities.
//!
//! Only object and union entities originate edges. Targets are named by
//! singular type text and are not checked against the emitted nodes; an
//! edge to an unknown name is left for the renderer to resolve.

use typegraph_core::{Entity, ObjectType, PrimitiveSet, UnionType, singularize};

use crate::dot::{DotBuilder, Endpoint};
use crate::options::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Supertype to subtype, hollow arrowhead at the supertype.
    Inheritance,
    /// Owning property row to the property's type, hollow diamond at the owner.
    Aggregation { nullable: bool },
    /// Union member row to the member type.
    Membership,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<'a> {
    pub from: Endpoint<'a>,
    pub to: Endpoint<'a>,
    pub kind: EdgeKind,
}

impl EdgeKind {
    pub fn attrs(&self, palette: &Palette) -> Vec<(&'static str, &'static str)> {
        match self {
            EdgeKind::Inheritance => vec![("dir", "back"), ("arrowtail", "empty")],
            EdgeKind::Aggregation { nullable: true } => vec![
                ("dir", "back"),
                ("arrowtail", "odiamond"),
                ("style", "dashed"),
                ("color", palette.muted),
            ],
            EdgeKind::Aggregation { nullable: false } => vec![
                ("dir", "back"),
                ("arrowtail", "odiamond"),
                ("color", palette.full),
            ],
            EdgeKind::Membership => vec![
                ("dir", "forward"),
                ("arrowhead", "vee"),
                ("style", "dotted"),
            ],
        }
    }
}

/// Collect every edge in entity order.
pub fn collect_edges<'a>(entities: &'a [Entity], primitives: &PrimitiveSet) -> Vec<Edge<'a>> {
    let mut edges = Vec::new();
    for entity in entities {
        match entity {
            Entity::Object(object) => object_edges(object, primitives, &mut edges),
            Entity::Union(union) => union_edges(union, primitives, &mut edges),
            Entity::Enum(_) | Entity::Alias(_) => {}
        }
    }
    edges
}

fn object_edges<'a>(object: &'a ObjectType, primitives: &PrimitiveSet, edges: &mut Vec<Edge<'a>>) {
    for parent in &object.includes {
        edges.push(Edge {
            from: Endpoint::node(parent),
            to: Endpoint::node(&object.name),
            kind: EdgeKind::Inheritance,
        });
    }

    for property in &object.properties {
        if primitives.is_primitive(&property.ty) {
            continue;
        }
        edges.push(Edge {
            from: Endpoint::port(&object.name, &property.name),
            to: Endpoint::node(singularize(&property.ty)),
            kind: EdgeKind::Aggregation {
                nullable: property.nullable,
            },
        });
    }
}

fn union_edges<'a>(union: &'a UnionType, primitives: &PrimitiveSet, edges: &mut Vec<Edge<'a>>) {
    for ty in &union.types {
        if primitives.is_primitive(ty) {
            continue;
        }
        let member = singularize(ty);
        edges.push(Edge {
            from: Endpoint::port(&union.name, member),
            to: Endpoint::node(member),
            kind: EdgeKind::Membership,
        });
    }
}

pub fn write_edges(dot: &mut DotBuilder, edges: &[Edge<'_>], palette: &Palette) {
    for edge in edges {
        dot.edge(&edge.from, &edge.to, &edge.kind.attrs(palette));
    }
}
