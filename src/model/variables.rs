//! Variables: coerced variable values of one operation, by name.

use hashbrown::HashMap;
use super::Value;

/// A map of variable names to already-coerced values.
pub type Variables = HashMap<String, Value>;
