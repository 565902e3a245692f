//! Value-literal AST.
//!
//! Values written inline in a GraphQL document. Pure data plus a printer
//! that renders them back in document syntax.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Value, Variables};
use crate::{Error, Result};

/// A literal value node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Literal {
    /// `$name`
    Variable(String),
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Bare name that is not `true`, `false` or `null`
    Enum(String),
    List(Vec<Literal>),
    /// Fields in document order
    Object(Vec<ObjectField>),
}

/// One `name: value` entry of an object literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    pub name: String,
    pub value: Literal,
}

impl ObjectField {
    pub fn new(name: impl Into<String>, value: Literal) -> Self {
        Self { name: name.into(), value }
    }
}

impl Literal {
    /// Node kind, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Variable(_) => "Variable",
            Literal::Null => "NullValue",
            Literal::Bool(_) => "BooleanValue",
            Literal::Int(_) => "IntValue",
            Literal::Float(_) => "FloatValue",
            Literal::String(_) => "StringValue",
            Literal::Enum(_) => "EnumValue",
            Literal::List(_) => "ArrayValue",
            Literal::Object(_) => "ObjectValue",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Look up a field of an object literal by name.
    pub fn field(&self, name: &str) -> Option<&Literal> {
        match self {
            Literal::Object(fields) => fields.iter().find(|f| f.name == name).map(|f| &f.value),
            _ => None,
        }
    }

    /// Render a runtime value as a literal. Native scalars become string
    /// literals in their canonical text form.
    pub fn from_value(value: &Value) -> Literal {
        match value {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Int(i) => Literal::Int(*i),
            Value::Float(f) => Literal::Float(*f),
            Value::String(s) => Literal::String(s.clone()),
            Value::List(items) => Literal::List(items.iter().map(Literal::from_value).collect()),
            Value::Object(m) => Literal::Object(
                m.iter().map(|(k, v)| ObjectField::new(k.clone(), Literal::from_value(v))).collect(),
            ),
            Value::Uuid(u) => Literal::String(u.to_string()),
            Value::Date(d) => Literal::String(d.to_string()),
            Value::Period(p) => Literal::String(p.to_string()),
        }
    }

    /// Replace every variable reference with the literal form of its value.
    pub fn resolve(&self, variables: &Variables) -> Result<Literal> {
        Ok(match self {
            Literal::Variable(name) => {
                let value = variables.get(name).ok_or_else(|| {
                    Error::InvalidScalarLiteral(format!("Undefined variable ${name}"))
                })?;
                Literal::from_value(value)
            }
            Literal::List(items) => Literal::List(
                items.iter().map(|l| l.resolve(variables)).collect::<Result<_>>()?,
            ),
            Literal::Object(fields) => Literal::Object(
                fields
                    .iter()
                    .map(|f| Ok(ObjectField::new(f.name.clone(), f.value.resolve(variables)?)))
                    .collect::<Result<_>>()?,
            ),
            other => other.clone(),
        })
    }
}

impl From<&str> for Literal { fn from(v: &str) -> Self { Literal::String(v.to_owned()) } }
impl From<String> for Literal { fn from(v: String) -> Self { Literal::String(v) } }
impl From<i64> for Literal { fn from(v: i64) -> Self { Literal::Int(v) } }
impl From<i32> for Literal { fn from(v: i32) -> Self { Literal::Int(v as i64) } }
impl From<bool> for Literal { fn from(v: bool) -> Self { Literal::Bool(v) } }

// ============================================================================
// Printer
// ============================================================================

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Variable(name) => write!(f, "${name}"),
            Literal::Null => write!(f, "null"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Int(i) => write!(f, "{i}"),
            // Debug keeps a fractional part or exponent, so it lexes back as a float
            Literal::Float(v) => write!(f, "{v:?}"),
            Literal::String(s) => write_quoted(f, s),
            Literal::Enum(name) => write!(f, "{name}"),
            Literal::List(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Literal::Object(fields) => {
                write!(f, "{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            '\u{8}' => write!(f, "\\b")?,
            '\u{c}' => write!(f, "\\f")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}
