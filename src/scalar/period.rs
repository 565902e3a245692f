//! `Period` scalar: inclusive date ranges written `"<start>..<end>"`.

use super::{Coercing, ScalarType};
use crate::literal::Literal;
use crate::model::{Period, Value, Variables};
use crate::{Error, Result};

pub const PERIOD_SCALAR_NAME: &str = "Period";

/// The `Period` scalar type.
pub fn period_type() -> ScalarType {
    ScalarType::new(PERIOD_SCALAR_NAME, PeriodCoercing).with_description(
        "A period of local date to local date, inclusive on both ends i.e. a closed range.",
    )
}

/// Codec for [`Period`].
///
/// Bounds are never reordered; `"2021-02-01..2021-01-01"` is accepted as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodCoercing;

impl Coercing for PeriodCoercing {
    type Native = Period;

    fn parse_value(&self, input: &Value) -> Result<Period> {
        Period::parse(&input.stringify()).map_err(|e| {
            tracing::debug!(input = %input, error = %e, "rejected Period value");
            Error::InvalidScalarValue(format!("Expected valid Period but was {input}: {e}"))
        })
    }

    fn parse_literal(&self, input: &Literal, _variables: &Variables) -> Result<Period> {
        let Literal::String(text) = input else {
            return Err(Error::InvalidScalarLiteral(format!(
                "Expected valid Period literal but was {}",
                input.kind_name()
            )));
        };
        Period::parse(text).map_err(|e| {
            tracing::debug!(literal = %input, error = %e, "rejected Period literal");
            Error::InvalidScalarLiteral(format!("Expected valid Period literal but was {input}: {e}"))
        })
    }

    /// Renders the period itself, `start..end`, each date in ISO-8601.
    fn serialize(&self, value: &Value) -> Result<String> {
        let period = match value {
            Value::Period(p) => Some(*p),
            Value::String(s) => Period::parse(s).ok(),
            _ => None,
        };
        period.map(|p| p.to_string()).ok_or_else(|| {
            Error::SerializationError(format!(
                "Data fetcher result {value} cannot be serialized to a String"
            ))
        })
    }
}
