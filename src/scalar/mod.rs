//! # Scalar Coercion
//!
//! `Coercing` is the contract between the execution engine and a custom
//! scalar. The engine calls:
//!
//! | Direction | Operation | Failure |
//! |-----------|-----------|---------|
//! | inbound, variables / JSON | `parse_value` | `Error::InvalidScalarValue` |
//! | inbound, document literal | `parse_literal` | `Error::InvalidScalarLiteral` |
//! | outbound, resolver result | `serialize` | `Error::SerializationError` |
//!
//! ## Implementations
//!
//! | Codec | Scalar | Native type |
//! |-------|--------|-------------|
//! | `UuidCoercing` | `UUID` | `uuid::Uuid` |
//! | `PeriodCoercing` | `Period` | `model::Period` |
//! | `StringCoercing` | `String` | `String` |
//!
//! Codecs are unit structs: no fields, no locks, shareable across threads.

pub mod uuid;
pub mod period;
pub mod string;

use std::fmt;
use std::sync::Arc;

use crate::literal::Literal;
use crate::model::{Value, Variables};
use crate::Result;

pub use self::uuid::{UuidCoercing, uuid_type};
pub use self::period::{PeriodCoercing, period_type};
pub use self::string::{StringCoercing, string_type};

// ============================================================================
// Coercing Trait
// ============================================================================

/// Bidirectional conversion between a native value and its wire forms.
pub trait Coercing: Send + Sync + 'static {
    /// The in-memory representation of the scalar.
    type Native: Into<Value>;

    /// Coerce a runtime value (variables, pre-parsed JSON).
    fn parse_value(&self, input: &Value) -> Result<Self::Native>;

    /// Coerce a literal written in the document.
    fn parse_literal(&self, input: &Literal, variables: &Variables) -> Result<Self::Native>;

    /// Render a resolver result as the wire string.
    fn serialize(&self, value: &Value) -> Result<String>;
}

/// Object-safe view of a [`Coercing`], with natives widened to [`Value`].
///
/// Blanket-implemented for every `Coercing`, so schema types can hold
/// codecs of different native types behind one pointer.
pub trait ErasedCoercing: Send + Sync {
    fn coerce_value(&self, input: &Value) -> Result<Value>;
    fn coerce_literal(&self, input: &Literal, variables: &Variables) -> Result<Value>;
    fn serialize_value(&self, value: &Value) -> Result<String>;
}

impl<C: Coercing> ErasedCoercing for C {
    fn coerce_value(&self, input: &Value) -> Result<Value> {
        self.parse_value(input).map(Into::into)
    }

    fn coerce_literal(&self, input: &Literal, variables: &Variables) -> Result<Value> {
        self.parse_literal(input, variables).map(Into::into)
    }

    fn serialize_value(&self, value: &Value) -> Result<String> {
        self.serialize(value)
    }
}

// ============================================================================
// ScalarType
// ============================================================================

/// A named scalar registered with the schema once, at build time.
#[derive(Clone)]
pub struct ScalarType {
    name: String,
    description: Option<String>,
    coercing: Arc<dyn ErasedCoercing>,
}

impl ScalarType {
    pub fn new<C: Coercing>(name: impl Into<String>, coercing: C) -> Self {
        Self {
            name: name.into(),
            description: None,
            coercing: Arc::new(coercing),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn coercing(&self) -> &dyn ErasedCoercing {
        self.coercing.as_ref()
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Scalars are identified by name and description; the codec is behavior.
impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.description == other.description
    }
}
