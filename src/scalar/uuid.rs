//! `UUID` scalar: 128-bit identifiers in 8-4-4-4-12 hex form.

use ::uuid::Uuid;

use super::{Coercing, ScalarType};
use crate::literal::Literal;
use crate::model::{Value, Variables};
use crate::{Error, Result};

pub const UUID_SCALAR_NAME: &str = "UUID";

/// The `UUID` scalar type.
pub fn uuid_type() -> ScalarType {
    ScalarType::new(UUID_SCALAR_NAME, UuidCoercing)
        .with_description("A type representing a formatted UUID")
}

/// Codec for [`Uuid`]. Renders lowercase hyphenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCoercing;

impl Coercing for UuidCoercing {
    type Native = Uuid;

    /// Goes through `serialize` first, so anything that serializes as a
    /// UUID also parses as one.
    fn parse_value(&self, input: &Value) -> Result<Uuid> {
        self.serialize(input)
            .ok()
            .and_then(|text| parse_hyphenated(&text))
            .ok_or_else(|| {
                tracing::debug!(input = %input, "rejected UUID value");
                Error::InvalidScalarValue(format!("Expected valid UUID but was {input}"))
            })
    }

    fn parse_literal(&self, input: &Literal, _variables: &Variables) -> Result<Uuid> {
        match input {
            Literal::String(text) => parse_hyphenated(text).ok_or_else(|| {
                tracing::debug!(literal = %input, "rejected UUID literal");
                Error::InvalidScalarLiteral(format!("Expected valid UUID literal but was {text}"))
            }),
            other => Err(Error::InvalidScalarLiteral(format!(
                "Expected StringValue for UUID literal but was {}",
                other.kind_name()
            ))),
        }
    }

    fn serialize(&self, value: &Value) -> Result<String> {
        let uuid = match value {
            Value::Uuid(u) => Some(*u),
            Value::String(s) => parse_hyphenated(s),
            _ => None,
        };
        uuid.map(|u| u.hyphenated().to_string()).ok_or_else(|| {
            Error::SerializationError(format!(
                "Data fetcher result {value} cannot be serialized to a String"
            ))
        })
    }
}

/// Only the hyphenated 8-4-4-4-12 form; the simple, braced and URN forms
/// the `uuid` crate also accepts are rejected.
fn parse_hyphenated(text: &str) -> Option<Uuid> {
    let bytes = text.as_bytes();
    let grouped = bytes.len() == 36
        && [8, 13, 18, 23].iter().all(|&i| bytes[i] == b'-');
    if !grouped {
        return None;
    }
    Uuid::try_parse(text).ok()
}
