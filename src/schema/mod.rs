//! # Schema Types
//!
//! The small slice of schema-building vocabulary the hooks hand back to the
//! engine: scalars, input object types and type references.

pub mod registry;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::ScalarType;

pub use registry::TypeRegistry;

/// A schema type produced for a native type.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphQLType {
    Scalar(ScalarType),
    InputObject(InputObjectType),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Scalar(s) => s.name(),
            GraphQLType::InputObject(o) => &o.name,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            GraphQLType::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            GraphQLType::InputObject(o) => Some(o),
            _ => None,
        }
    }
}

impl From<ScalarType> for GraphQLType {
    fn from(s: ScalarType) -> Self { GraphQLType::Scalar(s) }
}

impl From<InputObjectType> for GraphQLType {
    fn from(o: InputObjectType) -> Self { GraphQLType::InputObject(o) }
}

// ============================================================================
// Type references
// ============================================================================

/// Reference to a named type, possibly wrapped: `String`, `[Int]`, `ID!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// The innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(n) => n,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.base_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(n) => write!(f, "{n}"),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

// ============================================================================
// Input objects
// ============================================================================

/// Input object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<InputField>,
}

/// One field of an input object type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    pub name: String,
    pub type_ref: TypeRef,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, fields: Vec::new() }
    }

    pub fn field(mut self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        self.fields.push(InputField { name: name.into(), type_ref });
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&InputField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl fmt::Display for InputObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input {} {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.name, field.type_ref)?;
        }
        write!(f, "}}")
    }
}
