//! Entity model: the closed set of declaration shapes extracted from source.
//!
//! Every textual type (`Property::ty`, `Union::types`, `Alias::ty`) is kept
//! verbatim. Whether such a text refers to another entity is decided later by
//! name matching, never by semantic resolution.

use strum_macros::{Display, IntoStaticStr};

/// Discriminator of an [`Entity`]; also the order clusters are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, IntoStaticStr)]
pub enum EntityKind {
    Object,
    Enum,
    Union,
    Alias,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Object,
        EntityKind::Enum,
        EntityKind::Union,
        EntityKind::Alias,
    ];
}

/// One extracted type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Object(ObjectType),
    Enum(EnumType),
    Union(UnionType),
    Alias(AliasType),
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::Object(e) => &e.name,
            Entity::Enum(e) => &e.name,
            Entity::Union(e) => &e.name,
            Entity::Alias(e) => &e.name,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Object(_) => EntityKind::Object,
            Entity::Enum(_) => EntityKind::Enum,
            Entity::Union(_) => EntityKind::Union,
            Entity::Alias(_) => EntityKind::Alias,
        }
    }
}

/// An interface-like declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectType {
    pub name: String,
    pub properties: Vec<Property>,
    /// Declared supertypes in heritage-clause order.
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub nullable: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable,
        }
    }
}

/// A union whose members include literal types, e.g. `"OPEN" | "CLOSED"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumType {
    pub name: String,
    /// Verbatim literal texts, quotes included.
    pub values: Vec<String>,
}

/// A union of non-literal member types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnionType {
    pub name: String,
    pub types: Vec<String>,
}

/// Any other type declaration; `ty` is the right-hand side text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasType {
    pub name: String,
    pub ty: String,
}

/// Strip trailing array markers: `Foo[]` and `Foo[][]` both become `Foo`.
///
/// Idempotent; used wherever a type text becomes a node or port identifier.
pub fn singularize(ty: &str) -> &str {
    let mut text = ty.trim();
    while let Some(rest) = text.strip_suffix("[]") {
        text = rest.trim_end();
    }
    text
}

/// Whether `ty` is a function type expression such as `(a: A) => B`.
///
/// Only the top level counts: `Array<() => void>` is not a function type.
pub fn is_function_type(ty: &str) -> bool {
    let text = singularize(ty);
    let text = text
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .filter(|inner| balanced(inner))
        .map_or(text, str::trim);

    let mut depth = 0i32;
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' | b'[' | b'{' | b'<' => depth += 1,
            b')' | b']' | b'}' => depth -= 1,
            b'>' if i > 0 && bytes[i - 1] == b'=' => {
                if depth == 0 {
                    return true;
                }
            }
            b'>' => depth -= 1,
            _ => {}
        }
    }
    false
}

fn balanced(text: &str) -> bool {
    let mut depth = 0i32;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
