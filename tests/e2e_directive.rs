//! End-to-end tests for `@custom`: native metadata -> rewrite -> applied
//! directive -> field wiring, driven through `SchemaHooks` the way a schema
//! generator would.

use gql_scalars::directive::{
    custom_directive_definition, ArgumentDefinition, DataFetcher, DirectiveLocation, FieldDefinition,
};
use gql_scalars::{
    literal, ArgumentValue, CustomDirective, CustomObject, CustomSchemaHooks, DirectiveDefinition,
    DirectiveInstance, Error, Literal, SchemaHooks, TypeRef, Value,
};
use pretty_assertions::assert_eq;

fn greeting() -> DirectiveInstance {
    CustomDirective {
        name: "greeting".into(),
        custom_object: CustomObject { first: "hi".into(), second: 5 },
    }
    .to_instance()
}

// ============================================================================
// 1. Rewrite
// ============================================================================

#[test]
fn test_custom_rewritten_to_literals() {
    let hooks = CustomSchemaHooks::new();
    let def = custom_directive_definition();
    let applied = hooks
        .rewrite_directive(&greeting(), &def, def.to_applied_directive())
        .unwrap();

    assert!(applied.is_literal_only());
    let expected = literal::parse(r#"{first: "hi", second: 5}"#).unwrap();
    assert_eq!(
        applied.get_argument("customObject").map(|a| &a.value),
        Some(&ArgumentValue::Literal(expected)),
    );
    assert_eq!(
        applied.get_argument("name").map(|a| &a.value),
        Some(&ArgumentValue::Literal(Literal::from("greeting"))),
    );
}

#[test]
fn test_other_directive_returns_default() {
    let hooks = CustomSchemaHooks::new();
    let def = DirectiveDefinition::new("length")
        .argument(ArgumentDefinition::new("max", TypeRef::named("Int")))
        .location(DirectiveLocation::FieldDefinition);
    let default = def.to_applied_directive();
    let instance = DirectiveInstance::new("length").member("max", 10);

    let out = hooks.rewrite_directive(&instance, &def, default.clone()).unwrap();
    assert_eq!(out, default);
}

#[test]
fn test_incomplete_instance_is_illegal_state() {
    let hooks = CustomSchemaHooks::new();
    let def = custom_directive_definition();
    let instance = DirectiveInstance::new("custom").member("name", "greeting");

    let err = hooks
        .rewrite_directive(&instance, &def, def.to_applied_directive())
        .unwrap_err();
    assert!(matches!(err, Error::IllegalState(_)));
}

// ============================================================================
// 2. Wiring
// ============================================================================

#[test]
fn test_custom_field_resolves_to_greeting() {
    let hooks = CustomSchemaHooks::new();
    let def = custom_directive_definition();
    let applied = hooks
        .rewrite_directive(&greeting(), &def, def.to_applied_directive())
        .unwrap();

    let field = hooks
        .on_field(FieldDefinition::new("hello", TypeRef::named("String")).directive(applied))
        .unwrap();
    assert_eq!(field.data_fetcher, DataFetcher::Constant(Value::from("greeting:hi5")));
    assert_eq!(field.data_fetcher.fetch(&Value::Null), Value::from("greeting:hi5"));
}

#[test]
fn test_plain_field_keeps_property_fetcher() {
    let hooks = CustomSchemaHooks::new();
    let field = hooks
        .on_field(FieldDefinition::new("name", TypeRef::named("String")))
        .unwrap();

    let parent = Value::object([("name", "Ada")]);
    assert_eq!(field.data_fetcher.fetch(&parent), Value::from("Ada"));
}

#[test]
fn test_unrewritten_directive_fails_wiring() {
    let hooks = CustomSchemaHooks::new();
    let def = custom_directive_definition();
    let field = FieldDefinition::new("hello", TypeRef::named("String"))
        .directive(def.to_applied_directive());

    let err = hooks.on_field(field).unwrap_err();
    assert!(matches!(err, Error::IllegalState(_)));
}
