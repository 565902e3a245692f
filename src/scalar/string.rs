//! Built-in `String` scalar, used for native types that map onto plain text.

use super::{Coercing, ScalarType};
use crate::literal::Literal;
use crate::model::{Value, Variables};
use crate::{Error, Result};

pub const STRING_SCALAR_NAME: &str = "String";

pub fn string_type() -> ScalarType {
    ScalarType::new(STRING_SCALAR_NAME, StringCoercing)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringCoercing;

impl Coercing for StringCoercing {
    type Native = String;

    fn parse_value(&self, input: &Value) -> Result<String> {
        input
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::InvalidScalarValue(format!(
                "Expected a String input but was {}",
                input.type_name()
            )))
    }

    fn parse_literal(&self, input: &Literal, _variables: &Variables) -> Result<String> {
        input
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::InvalidScalarLiteral(format!(
                "Expected StringValue but was {}",
                input.kind_name()
            )))
    }

    /// Any leaf value prints as a string; null and composites do not.
    fn serialize(&self, value: &Value) -> Result<String> {
        match value {
            Value::Null | Value::List(_) | Value::Object(_) => Err(Error::SerializationError(
                format!("{} cannot be serialized to a String", value.type_name()),
            )),
            leaf => Ok(leaf.stringify().into_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(StringCoercing.parse_value(&Value::from("a")).unwrap(), "a");
        assert!(StringCoercing.parse_value(&Value::Int(1)).is_err());
        assert_eq!(StringCoercing.parse_literal(&Literal::from("b"), &Variables::new()).unwrap(), "b");
        assert!(StringCoercing.parse_literal(&Literal::Int(1), &Variables::new()).is_err());
    }

    #[test]
    fn test_serialize_leaves() {
        assert_eq!(StringCoercing.serialize(&Value::Int(12)).unwrap(), "12");
        assert_eq!(StringCoercing.serialize(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(StringCoercing.serialize(&Value::from("x")).unwrap(), "x");
        assert!(StringCoercing.serialize(&Value::Null).is_err());
    }
}
