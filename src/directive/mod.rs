//! # Directives
//!
//! Directive definitions, their applied instances and the rewrite that turns
//! native directive metadata into literal-only applied directives.
//!
//! ```text
//! DirectiveInstance (native metadata) ─┐
//! DirectiveDefinition (schema)        ─┼─► DirectiveRewriter ─► AppliedDirective (literals only)
//! default AppliedDirective            ─┘
//! ```

pub mod custom;
pub mod wiring;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::literal::Literal;
use crate::model::Value;
use crate::schema::TypeRef;

pub use custom::{
    CustomDirective, CustomObject, DirectiveRewriter,
    CUSTOM_DIRECTIVE_NAME, custom_directive_definition, custom_object_input_type, expected_members,
};
pub use wiring::{
    CustomDirectiveWiring, DataFetcher, DirectiveWiring, FieldDefinition, WiringFactory,
};

// ============================================================================
// Definitions
// ============================================================================

/// Where a directive may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectiveLocation {
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        };
        f.write_str(s)
    }
}

/// Declared argument of a directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    pub name: String,
    pub type_ref: TypeRef,
    pub default_value: Option<Literal>,
}

impl ArgumentDefinition {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self { name: name.into(), type_ref, default_value: None }
    }

    /// Unbound applied argument: the default literal if declared, else unset.
    pub fn to_applied_argument(&self) -> AppliedArgument {
        AppliedArgument {
            name: self.name.clone(),
            type_ref: self.type_ref.clone(),
            value: self
                .default_value
                .clone()
                .map(ArgumentValue::Literal)
                .unwrap_or(ArgumentValue::NotSet),
        }
    }
}

/// Static definition of a directive in the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: SmallVec<[ArgumentDefinition; 2]>,
    pub locations: Vec<DirectiveLocation>,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: SmallVec::new(),
            locations: Vec::new(),
        }
    }

    pub fn argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn location(mut self, location: DirectiveLocation) -> Self {
        self.locations.push(location);
        self
    }

    pub fn get_argument(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// The engine's default applied form: every argument at its declared default.
    pub fn to_applied_directive(&self) -> AppliedDirective {
        AppliedDirective {
            name: self.name.clone(),
            arguments: self.arguments.iter().map(ArgumentDefinition::to_applied_argument).collect(),
        }
    }
}

impl fmt::Display for DirectiveDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "directive @{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "(")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 { write!(f, ", ")?; }
                write!(f, "{}: {}", arg.name, arg.type_ref)?;
                if let Some(default) = &arg.default_value {
                    write!(f, " = {default}")?;
                }
            }
            write!(f, ")")?;
        }
        if !self.locations.is_empty() {
            write!(f, " on ")?;
            for (i, loc) in self.locations.iter().enumerate() {
                if i > 0 { write!(f, " | ")?; }
                write!(f, "{loc}")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Applied directives
// ============================================================================

/// Value bound to an applied argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgumentValue {
    NotSet,
    /// Native value the engine still has to serialize.
    Programmatic(Value),
    /// Already in document form.
    Literal(Literal),
}

impl ArgumentValue {
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            ArgumentValue::Literal(l) => Some(l),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, ArgumentValue::NotSet)
    }

    /// Literal form of the value; programmatic values are rendered, unset stays `None`.
    pub fn to_literal(&self) -> Option<Literal> {
        match self {
            ArgumentValue::NotSet => None,
            ArgumentValue::Programmatic(v) => Some(Literal::from_value(v)),
            ArgumentValue::Literal(l) => Some(l.clone()),
        }
    }
}

/// One argument of an applied directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedArgument {
    pub name: String,
    pub type_ref: TypeRef,
    pub value: ArgumentValue,
}

impl AppliedArgument {
    pub fn with_value(mut self, value: ArgumentValue) -> Self {
        self.value = value;
        self
    }
}

/// A directive bound to one schema element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedDirective {
    pub name: String,
    pub arguments: SmallVec<[AppliedArgument; 2]>,
}

impl AppliedDirective {
    pub fn get_argument(&self, name: &str) -> Option<&AppliedArgument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Replace the argument with the same name, or append it.
    pub fn with_argument(mut self, argument: AppliedArgument) -> Self {
        match self.arguments.iter_mut().find(|a| a.name == argument.name) {
            Some(existing) => *existing = argument,
            None => self.arguments.push(argument),
        }
        self
    }

    /// True if no argument carries a programmatic value.
    pub fn is_literal_only(&self) -> bool {
        self.arguments
            .iter()
            .all(|a| !matches!(a.value, ArgumentValue::Programmatic(_)))
    }
}

impl fmt::Display for AppliedDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        let bound: Vec<(&str, Literal)> = self
            .arguments
            .iter()
            .filter_map(|a| a.value.to_literal().map(|l| (a.name.as_str(), l)))
            .collect();
        if !bound.is_empty() {
            write!(f, "(")?;
            for (i, (name, lit)) in bound.iter().enumerate() {
                if i > 0 { write!(f, ", ")?; }
                write!(f, "{name}: {lit}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

// ============================================================================
// Native directive metadata
// ============================================================================

/// A directive as declared on a native element: effective name plus its
/// member values, read from the declaration as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DirectiveInstance {
    pub effective_name: String,
    pub members: BTreeMap<String, Value>,
}

impl DirectiveInstance {
    pub fn new(effective_name: impl Into<String>) -> Self {
        Self { effective_name: effective_name.into(), members: BTreeMap::new() }
    }

    pub fn member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deprecated_like() -> DirectiveDefinition {
        DirectiveDefinition::new("note")
            .argument(ArgumentDefinition {
                name: "reason".into(),
                type_ref: TypeRef::named("String"),
                default_value: Some(Literal::from("none")),
            })
            .argument(ArgumentDefinition::new("level", TypeRef::named("Int")))
            .location(DirectiveLocation::FieldDefinition)
            .location(DirectiveLocation::EnumValue)
    }

    #[test]
    fn test_definition_sdl() {
        assert_eq!(
            deprecated_like().to_string(),
            r#"directive @note(reason: String = "none", level: Int) on FIELD_DEFINITION | ENUM_VALUE"#,
        );
    }

    #[test]
    fn test_default_applied_directive() {
        let applied = deprecated_like().to_applied_directive();
        assert_eq!(applied.name, "note");
        assert_eq!(
            applied.get_argument("reason").map(|a| &a.value),
            Some(&ArgumentValue::Literal(Literal::from("none"))),
        );
        assert_eq!(applied.get_argument("level").map(|a| &a.value), Some(&ArgumentValue::NotSet));
        assert_eq!(applied.to_string(), r#"@note(reason: "none")"#);
    }

    #[test]
    fn test_with_argument_replaces_in_place() {
        let def = deprecated_like();
        let level = def.get_argument("level").unwrap().to_applied_argument()
            .with_value(ArgumentValue::Programmatic(Value::Int(3)));
        let applied = def.to_applied_directive().with_argument(level);

        assert_eq!(applied.arguments.len(), 2);
        assert_eq!(applied.arguments[1].name, "level");
        assert!(!applied.is_literal_only());
        assert_eq!(applied.to_string(), r#"@note(reason: "none", level: 3)"#);
    }

    #[test]
    fn test_instance_members() {
        let instance = DirectiveInstance::new("note").member("reason", "x");
        assert_eq!(instance.get("reason"), Some(&Value::from("x")));
        assert_eq!(instance.get("level"), None);
    }
}
