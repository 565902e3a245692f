//! # gql-scalars: engine-independent GraphQL scalar wiring
//!
//! Value logic that a GraphQL server hands to its execution engine through
//! extension points: custom scalar coercion and directive argument rewriting.
//! Nothing here parses documents or executes queries; the engine calls in.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `Coercing` is the contract between the engine and a scalar codec
//! 2. **Pure values**: `Value`, `Period` and literal AST nodes are plain data
//! 3. **Stateless codecs**: every codec and the rewriter is a unit struct, safe to share
//! 4. **Registries, not type checks**: native types map to schema types through a lookup table
//!
//! ## Quick Start
//!
//! ```rust
//! use gql_scalars::{literal, Coercing, PeriodCoercing, UuidCoercing, Value, Variables};
//!
//! # fn example() -> gql_scalars::Result<()> {
//! let vars = Variables::new();
//!
//! let period = PeriodCoercing.parse_literal(&literal::parse(r#""2021-01-01..2021-02-01""#)?, &vars)?;
//! assert_eq!(PeriodCoercing.serialize(&Value::from(period))?, "2021-01-01..2021-02-01");
//!
//! let id = UuidCoercing.parse_value(&Value::from("123e4567-e89b-12d3-a456-426614174000"))?;
//! assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | (default) | Codecs, literal parser, registry, directive rewriter |
//! | `download` | Fetch a remote SDL document and write it to disk |
//! | `cli` | `download-schema` binary |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod literal;
pub mod scalar;
pub mod schema;
pub mod directive;
pub mod hooks;
pub mod config;
#[cfg(feature = "download")]
pub mod download;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Value, Period, TypeDescriptor, Variables};
pub use literal::{Literal, ObjectField};

// ============================================================================
// Re-exports: Scalars
// ============================================================================

pub use scalar::{
    Coercing, ErasedCoercing, ScalarType,
    UuidCoercing, PeriodCoercing, StringCoercing,
};

// ============================================================================
// Re-exports: Schema, directives, hooks
// ============================================================================

pub use schema::{GraphQLType, InputObjectType, InputField, TypeRef, TypeRegistry};
pub use directive::{
    AppliedArgument, AppliedDirective, ArgumentValue, DirectiveDefinition,
    DirectiveInstance, CustomDirective, CustomObject,
};
pub use hooks::{SchemaHooks, CustomSchemaHooks};
pub use config::HooksConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid scalar value: {0}")]
    InvalidScalarValue(String),

    #[error("Invalid scalar literal: {0}")]
    InvalidScalarLiteral(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Literal syntax error at position {position}: {message}")]
    SyntaxError { position: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "download")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
