//! Native type descriptors, the keys the schema generator asks about.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A native type as seen by the schema generator: a classifier name plus
/// generic arguments, e.g. `RangeInclusive<NaiveDate>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Non-generic type.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), arguments: Vec::new() }
    }

    /// Generic type with the given arguments.
    pub fn generic(name: impl Into<String>, arguments: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        Self { name: name.into(), arguments: arguments.into_iter().collect() }
    }

    /// The classifier without generic arguments.
    pub fn classifier(&self) -> &str {
        &self.name
    }

    pub fn argument(&self, index: usize) -> Option<&TypeDescriptor> {
        self.arguments.get(index)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 { write!(f, ", ")?; }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl FromStr for TypeDescriptor {
    type Err = Error;

    /// Parses `Name` or `Name<Arg, ...>`; whitespace around tokens is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut rest = s;
        let descriptor = parse_descriptor(&mut rest, s)?;
        if !rest.trim().is_empty() {
            return Err(Error::Config(format!("trailing input in type '{s}': '{}'", rest.trim())));
        }
        Ok(descriptor)
    }
}

fn parse_descriptor(rest: &mut &str, whole: &str) -> Result<TypeDescriptor> {
    *rest = rest.trim_start();
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
        .unwrap_or(rest.len());
    if end == 0 {
        return Err(Error::Config(format!("expected a type name in '{whole}'")));
    }
    let name = rest[..end].to_string();
    *rest = rest[end..].trim_start();

    let mut arguments = Vec::new();
    if let Some(after) = rest.strip_prefix('<') {
        *rest = after;
        loop {
            arguments.push(parse_descriptor(rest, whole)?);
            *rest = rest.trim_start();
            if let Some(after) = rest.strip_prefix(',') {
                *rest = after;
            } else if let Some(after) = rest.strip_prefix('>') {
                *rest = after;
                break;
            } else {
                return Err(Error::Config(format!("unclosed generic arguments in '{whole}'")));
            }
        }
    }

    Ok(TypeDescriptor { name, arguments })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_generic() {
        let d = TypeDescriptor::generic("RangeInclusive", [TypeDescriptor::named("NaiveDate")]);
        assert_eq!(d.to_string(), "RangeInclusive<NaiveDate>");
    }

    #[test]
    fn test_parse_nested() {
        let d: TypeDescriptor = "HashMap<String, Vec< Uuid >>".parse().unwrap();
        assert_eq!(d.classifier(), "HashMap");
        assert_eq!(d.argument(0), Some(&TypeDescriptor::named("String")));
        assert_eq!(
            d.argument(1),
            Some(&TypeDescriptor::generic("Vec", [TypeDescriptor::named("Uuid")])),
        );
    }

    #[test]
    fn test_parse_path_names() {
        let d: TypeDescriptor = "chrono::NaiveDate".parse().unwrap();
        assert_eq!(d, TypeDescriptor::named("chrono::NaiveDate"));
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<TypeDescriptor>().is_err());
        assert!("Vec<Uuid".parse::<TypeDescriptor>().is_err());
        assert!("Vec<Uuid> x".parse::<TypeDescriptor>().is_err());
    }
}
