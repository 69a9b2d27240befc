//! Core of typegraph: the entity model and the extractor that fills it.
//!
//! - [`model`]: entities (object, enum, union, alias) and type-text helpers
//! - [`syntax`]: the parser-independent syntax node abstraction
//! - [`extract`]: pre-order classification of declarations into entities
//! - [`primitive`]: the injectable primitive allow-list
//! - [`lang_def`]: the trait a parser collaborator implements
pub mod extract;
pub mod lang_def;
pub mod model;
pub mod primitive;
pub mod syntax;

#[cfg(test)]
mod tests;

pub use extract::{Extractor, extract_entities};
pub use lang_def::SourceLanguage;
pub use model::{
    AliasType, Entity, EntityKind, EnumType, ObjectType, Property, UnionType, is_function_type,
    singularize,
};
pub use primitive::{DEFAULT_PRIMITIVES, PrimitiveSet};
pub use syntax::{Field, SyntaxKind, SyntaxNode};
pub use typegraph_error::{Error, ErrorKind, Result};
