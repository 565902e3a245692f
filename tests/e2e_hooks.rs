//! End-to-end tests for hook construction from configuration and the
//! lookups a schema generator performs while walking native types.

use gql_scalars::config::DownloadConfig;
use gql_scalars::{CustomSchemaHooks, Error, HooksConfig, SchemaHooks, TypeDescriptor};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn resolved_name(hooks: &impl SchemaHooks, native: &str) -> Option<String> {
    let descriptor: TypeDescriptor = native.parse().unwrap();
    hooks.resolve_type(&descriptor).map(|t| t.name().to_string())
}

#[test]
fn test_default_mappings() {
    let hooks = CustomSchemaHooks::new();
    assert_eq!(resolved_name(&hooks, "Uuid").as_deref(), Some("UUID"));
    assert_eq!(resolved_name(&hooks, "RangeInclusive<NaiveDate>").as_deref(), Some("Period"));
    assert_eq!(resolved_name(&hooks, "CustomObject").as_deref(), Some("CustomInputObject"));
    assert_eq!(resolved_name(&hooks, "RangeInclusive<u8>"), None);
    assert_eq!(resolved_name(&hooks, "OrderNumber"), None);
}

#[test]
fn test_custom_input_object_fields() {
    let hooks = CustomSchemaHooks::new();
    let ty = hooks.resolve_type(&TypeDescriptor::named("CustomObject")).unwrap();
    let input = ty.as_input_object().unwrap();
    assert_eq!(input.get_field("first").map(|f| f.type_ref.to_string()).as_deref(), Some("String!"));
    assert_eq!(input.get_field("second").map(|f| f.type_ref.to_string()).as_deref(), Some("Int!"));
}

#[test]
fn test_config_file_round_trip() {
    let config = HooksConfig {
        string_types: vec!["OrderNumber".into(), "Wrapper<Email>".into()],
        list_wrappers: vec!["IndexSet".into()],
        download: Some(DownloadConfig {
            endpoint: "http://localhost:8080/schema".into(),
            output: "schema.graphqls".into(),
        }),
        ..Default::default()
    };
    let dir = tempdir().unwrap();
    let path = dir.path().join("hooks.json");
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = HooksConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);

    let hooks = CustomSchemaHooks::from_config(&loaded).unwrap();
    assert_eq!(resolved_name(&hooks, "OrderNumber").as_deref(), Some("String"));
    assert_eq!(resolved_name(&hooks, "Wrapper<Email>").as_deref(), Some("String"));
    assert_eq!(resolved_name(&hooks, "Email"), None);

    let set: TypeDescriptor = "IndexSet<Uuid>".parse().unwrap();
    assert_eq!(hooks.resolve_wrapper(set).to_string(), "Vec<Uuid>");
    let hash_set: TypeDescriptor = "HashSet<Uuid>".parse().unwrap();
    assert_eq!(hooks.resolve_wrapper(hash_set.clone()), hash_set);
}

#[test]
fn test_wrapper_then_type() {
    let hooks = CustomSchemaHooks::new();
    let future: TypeDescriptor = "Future<RangeInclusive<NaiveDate>>".parse().unwrap();
    let inner = hooks.resolve_wrapper(future);
    assert_eq!(hooks.resolve_type(&inner).map(|t| t.name().to_string()).as_deref(), Some("Period"));

    let set: TypeDescriptor = "BTreeSet<Uuid>".parse().unwrap();
    let list = hooks.resolve_wrapper(set);
    assert_eq!(list.classifier(), "Vec");
    assert_eq!(
        list.argument(0).and_then(|d| hooks.resolve_type(d)).map(|t| t.name().to_string()).as_deref(),
        Some("UUID"),
    );
}

#[test]
fn test_invalid_config_json() {
    assert!(matches!(HooksConfig::from_json_str("{\"string_types\": 3}"), Err(Error::Json(_))));
    assert!(matches!(HooksConfig::from_json_str("not json"), Err(Error::Json(_))));
}
