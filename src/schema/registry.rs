//! Type registry: native type descriptor → schema type.
//!
//! Populated once while the hooks are built, then only read. A missing
//! entry means "no override": the engine falls back to its own mapping.

use hashbrown::HashMap;

use super::GraphQLType;
use crate::model::TypeDescriptor;

/// Lookup table from native types to the schema types that replace them.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<TypeDescriptor, GraphQLType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the schema type for `descriptor`.
    pub fn register(&mut self, descriptor: TypeDescriptor, ty: impl Into<GraphQLType>) -> &mut Self {
        let ty = ty.into();
        tracing::trace!(native = %descriptor, graphql = ty.name(), "registered type override");
        self.types.insert(descriptor, ty);
        self
    }

    /// Exact lookup, generic arguments included.
    pub fn get(&self, descriptor: &TypeDescriptor) -> Option<&GraphQLType> {
        self.types.get(descriptor)
    }

    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.types.contains_key(descriptor)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeDescriptor, &GraphQLType)> {
        self.types.iter()
    }
}
