//! The `@custom` directive and the rewrite that binds its arguments as literals.
//!
//! `@custom(name: String!, customObject: CustomInputObject!)` carries an
//! input-object argument. Input objects cannot be bound from native values
//! when the directive sits on an explicit schema element, so the rewriter
//! turns both arguments into literal AST nodes up front.

use serde::{Deserialize, Serialize};

use super::{
    AppliedDirective, ArgumentDefinition, ArgumentValue, DirectiveDefinition, DirectiveInstance,
    DirectiveLocation,
};
use crate::literal::{Literal, ObjectField};
use crate::model::Value;
use crate::schema::{InputObjectType, TypeRef};
use crate::{Error, Result};

pub const CUSTOM_DIRECTIVE_NAME: &str = "custom";
pub const CUSTOM_OBJECT_TYPE_NAME: &str = "CustomInputObject";

/// Member names each rewritten directive must declare, keyed by directive name.
const DIRECTIVE_MEMBERS: &[(&str, &[&str])] = &[
    (CUSTOM_DIRECTIVE_NAME, &["name", "customObject"]),
];

/// Members expected on a directive, if it is one the rewriter handles.
pub fn expected_members(directive: &str) -> Option<&'static [&'static str]> {
    DIRECTIVE_MEMBERS
        .iter()
        .find(|(name, _)| *name == directive)
        .map(|(_, members)| *members)
}

// ============================================================================
// Native forms
// ============================================================================

/// Nested record argument of `@custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomObject {
    pub first: String,
    pub second: i32,
}

impl CustomObject {
    /// `{first: "<first>", second: <second>}`, fields in declaration order.
    pub fn to_literal(&self) -> Literal {
        Literal::Object(vec![
            ObjectField::new("first", Literal::String(self.first.clone())),
            ObjectField::new("second", Literal::Int(i64::from(self.second))),
        ])
    }

    fn from_member(value: &Value) -> Result<Self> {
        let fields = value.as_object().ok_or_else(|| {
            illegal(format!("member 'customObject' must be an object, got {}", value.type_name()))
        })?;
        let first = fields
            .get("first")
            .and_then(Value::as_str)
            .ok_or_else(|| illegal("member 'customObject.first' must be a string".into()))?;
        let second = fields
            .get("second")
            .and_then(Value::as_int)
            .and_then(|i| i32::try_from(i).ok())
            .ok_or_else(|| illegal("member 'customObject.second' must be a 32-bit integer".into()))?;
        Ok(Self { first: first.to_string(), second })
    }
}

impl From<CustomObject> for Value {
    fn from(o: CustomObject) -> Self {
        Value::object([
            ("first", Value::String(o.first)),
            ("second", Value::from(o.second)),
        ])
    }
}

/// Typed view of a `@custom` directive instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDirective {
    pub name: String,
    pub custom_object: CustomObject,
}

impl CustomDirective {
    /// Instance metadata carrying this directive's members.
    pub fn to_instance(&self) -> DirectiveInstance {
        DirectiveInstance::new(CUSTOM_DIRECTIVE_NAME)
            .member("name", self.name.as_str())
            .member("customObject", self.custom_object.clone())
    }
}

impl TryFrom<&DirectiveInstance> for CustomDirective {
    type Error = Error;

    /// Every member in the lookup table must be present with the right
    /// shape; anything else is a schema authoring error.
    fn try_from(instance: &DirectiveInstance) -> Result<Self> {
        let members = expected_members(&instance.effective_name).ok_or_else(|| {
            illegal(format!("no member table for directive @{}", instance.effective_name))
        })?;
        for member in members {
            if instance.get(member).is_none() {
                return Err(illegal(format!(
                    "directive @{} is missing member '{member}'",
                    instance.effective_name
                )));
            }
        }

        let name = instance
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| illegal("member 'name' must be a string".into()))?;
        let custom_object = instance
            .get("customObject")
            .map(CustomObject::from_member)
            .transpose()?
            .ok_or_else(|| illegal("member 'customObject' is missing".into()))?;

        Ok(Self { name: name.to_string(), custom_object })
    }
}

// ============================================================================
// Schema forms
// ============================================================================

/// `input CustomInputObject { first: String!, second: Int! }`
pub fn custom_object_input_type() -> InputObjectType {
    InputObjectType::new(CUSTOM_OBJECT_TYPE_NAME)
        .field("first", TypeRef::non_null(TypeRef::named("String")))
        .field("second", TypeRef::non_null(TypeRef::named("Int")))
}

/// `directive @custom(name: String!, customObject: CustomInputObject!) on FIELD_DEFINITION`
pub fn custom_directive_definition() -> DirectiveDefinition {
    DirectiveDefinition::new(CUSTOM_DIRECTIVE_NAME)
        .argument(ArgumentDefinition::new("name", TypeRef::non_null(TypeRef::named("String"))))
        .argument(ArgumentDefinition::new(
            "customObject",
            TypeRef::non_null(TypeRef::named(CUSTOM_OBJECT_TYPE_NAME)),
        ))
        .location(DirectiveLocation::FieldDefinition)
}

// ============================================================================
// Rewriter
// ============================================================================

/// Rewrites `@custom` applications into literal-only applied directives.
/// Every other directive passes through as the engine's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectiveRewriter;

impl DirectiveRewriter {
    pub fn rewrite(
        &self,
        instance: &DirectiveInstance,
        definition: &DirectiveDefinition,
        default: AppliedDirective,
    ) -> Result<AppliedDirective> {
        if instance.effective_name != CUSTOM_DIRECTIVE_NAME {
            return Ok(default);
        }

        let custom = CustomDirective::try_from(instance)?;
        let argument = |name: &str| {
            definition
                .get_argument(name)
                .map(ArgumentDefinition::to_applied_argument)
                .ok_or_else(|| illegal(format!("definition @{} has no argument '{name}'", definition.name)))
        };

        let name_arg = argument("name")?
            .with_value(ArgumentValue::Literal(Literal::String(custom.name.clone())));
        let object_arg = argument("customObject")?
            .with_value(ArgumentValue::Literal(custom.custom_object.to_literal()));

        let applied = definition
            .to_applied_directive()
            .with_argument(name_arg)
            .with_argument(object_arg);

        tracing::debug!(directive = %applied, "rewrote directive arguments as literals");
        Ok(applied)
    }
}

fn illegal(message: String) -> Error {
    Error::IllegalState(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn greeting() -> CustomDirective {
        CustomDirective {
            name: "greeting".into(),
            custom_object: CustomObject { first: "hi".into(), second: 5 },
        }
    }

    #[test]
    fn test_member_table() {
        assert_eq!(expected_members("custom"), Some(&["name", "customObject"][..]));
        assert_eq!(expected_members("deprecated"), None);
    }

    #[test]
    fn test_instance_round_trip() {
        let instance = greeting().to_instance();
        assert_eq!(CustomDirective::try_from(&instance).unwrap(), greeting());
    }

    #[test]
    fn test_missing_member_is_illegal_state() {
        let instance = DirectiveInstance::new("custom").member("name", "greeting");
        let err = CustomDirective::try_from(&instance).unwrap_err();
        assert!(matches!(err, Error::IllegalState(ref m) if m.contains("customObject")));
    }

    #[test]
    fn test_wrong_member_shape_is_illegal_state() {
        let instance = DirectiveInstance::new("custom")
            .member("name", 7)
            .member("customObject", CustomObject { first: "a".into(), second: 1 });
        assert!(matches!(CustomDirective::try_from(&instance), Err(Error::IllegalState(_))));

        let instance = DirectiveInstance::new("custom")
            .member("name", "n")
            .member("customObject", Value::object([("first", Value::from("a")), ("second", Value::Int(1 << 40))]));
        assert!(matches!(CustomDirective::try_from(&instance), Err(Error::IllegalState(_))));
    }

    #[test]
    fn test_rewrite_custom() {
        let def = custom_directive_definition();
        let applied = DirectiveRewriter
            .rewrite(&greeting().to_instance(), &def, def.to_applied_directive())
            .unwrap();

        assert!(applied.is_literal_only());
        assert_eq!(
            applied.get_argument("name").and_then(|a| a.value.as_literal()),
            Some(&Literal::String("greeting".into())),
        );
        assert_eq!(
            applied.get_argument("customObject").and_then(|a| a.value.as_literal()),
            Some(&Literal::Object(vec![
                ObjectField::new("first", Literal::String("hi".into())),
                ObjectField::new("second", Literal::Int(5)),
            ])),
        );
        assert_eq!(applied.to_string(), r#"@custom(name: "greeting", customObject: {first: "hi", second: 5})"#);
    }

    #[test]
    fn test_other_directives_pass_through() {
        let def = DirectiveDefinition::new("auth")
            .argument(ArgumentDefinition::new("role", TypeRef::named("String")));
        let default = def.to_applied_directive();
        let instance = DirectiveInstance::new("auth").member("role", "admin");

        let out = DirectiveRewriter.rewrite(&instance, &def, default.clone()).unwrap();
        assert_eq!(out, default);
    }

    #[test]
    fn test_definition_without_argument_is_illegal_state() {
        let def = DirectiveDefinition::new("custom")
            .argument(ArgumentDefinition::new("name", TypeRef::named("String")));
        let err = DirectiveRewriter
            .rewrite(&greeting().to_instance(), &def, def.to_applied_directive())
            .unwrap_err();
        assert!(matches!(err, Error::IllegalState(_)));
    }

    #[test]
    fn test_custom_object_input_sdl() {
        assert_eq!(
            custom_object_input_type().to_string(),
            "input CustomInputObject {\n  first: String!\n  second: Int!\n}",
        );
        assert_eq!(
            custom_directive_definition().to_string(),
            "directive @custom(name: String!, customObject: CustomInputObject!) on FIELD_DEFINITION",
        );
    }
}
