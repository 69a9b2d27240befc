//! The primitive allow-list: type spellings that never produce an edge.

use std::collections::HashSet;

use crate::model::{is_function_type, singularize};

/// Spellings treated as leaf values when no configuration overrides them.
pub const DEFAULT_PRIMITIVES: &[&str] = &[
    "string",
    "string[]",
    "number",
    "number[]",
    "boolean",
    "boolean[]",
    "object",
    "object[]",
    "Function",
    "Function[]",
];

/// An injectable set of primitive type spellings.
#[derive(Debug, Clone)]
pub struct PrimitiveSet {
    spellings: HashSet<String>,
    function_types: bool,
}

impl Default for PrimitiveSet {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMITIVES.iter().copied())
    }
}

impl PrimitiveSet {
    pub fn new<I, S>(spellings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            spellings: spellings.into_iter().map(Into::into).collect(),
            function_types: true,
        }
    }

    /// Whether textual function types (`(x: T) => U`) count as primitive.
    pub fn with_function_types(mut self, enabled: bool) -> Self {
        self.function_types = enabled;
        self
    }

    pub fn insert(&mut self, spelling: impl Into<String>) {
        self.spellings.insert(spelling.into());
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }

    /// Check a type text against the allow-list.
    ///
    /// The verbatim text is looked up first, then its singular form, so
    /// `string[][]` is as primitive as `string`.
    pub fn is_primitive(&self, ty: &str) -> bool {
        let ty = ty.trim();
        if self.spellings.contains(ty) || self.spellings.contains(singularize(ty)) {
            return true;
        }
        self.function_types && is_function_type(ty)
    }
}
