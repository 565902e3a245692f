//! Directive wiring: per-directive field transforms run while the schema is built.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{AppliedDirective, CUSTOM_DIRECTIVE_NAME};
use crate::literal::Literal;
use crate::model::Value;
use crate::schema::TypeRef;
use crate::{Error, Result};

/// How a field obtains its value at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataFetcher {
    /// Read the property of the same name from the parent object (engine default).
    Property(String),
    /// Always return this value.
    Constant(Value),
}

impl DataFetcher {
    pub fn fetch(&self, source: &Value) -> Value {
        match self {
            DataFetcher::Property(name) => source
                .as_object()
                .and_then(|m| m.get(name))
                .cloned()
                .unwrap_or(Value::Null),
            DataFetcher::Constant(v) => v.clone(),
        }
    }
}

/// Output field of an object type, with its applied directives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub type_ref: TypeRef,
    pub directives: Vec<AppliedDirective>,
    pub data_fetcher: DataFetcher,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        let name = name.into();
        Self {
            data_fetcher: DataFetcher::Property(name.clone()),
            name,
            type_ref,
            directives: Vec::new(),
        }
    }

    pub fn directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn get_applied_directive(&self, name: &str) -> Option<&AppliedDirective> {
        self.directives.iter().find(|d| d.name == name)
    }
}

// ============================================================================
// Wiring trait + factory
// ============================================================================

/// Transform applied to every field carrying the wired directive.
pub trait DirectiveWiring: Send + Sync {
    fn on_field(&self, field: FieldDefinition) -> Result<FieldDefinition> {
        Ok(field)
    }
}

/// Directive name → wiring.
#[derive(Clone, Default)]
pub struct WiringFactory {
    wirings: HashMap<String, Arc<dyn DirectiveWiring>>,
}

impl WiringFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, directive: impl Into<String>, wiring: impl DirectiveWiring + 'static) -> &mut Self {
        self.wirings.insert(directive.into(), Arc::new(wiring));
        self
    }

    pub fn get(&self, directive: &str) -> Option<&dyn DirectiveWiring> {
        self.wirings.get(directive).map(Arc::as_ref)
    }

    /// Run the wiring of every directive on the field, in application order.
    pub fn wire_field(&self, mut field: FieldDefinition) -> Result<FieldDefinition> {
        let names: Vec<String> = field.directives.iter().map(|d| d.name.clone()).collect();
        for name in names {
            if let Some(wiring) = self.get(&name) {
                field = wiring.on_field(field)?;
            }
        }
        Ok(field)
    }
}

impl fmt::Debug for WiringFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.wirings.keys().collect();
        names.sort();
        f.debug_struct("WiringFactory").field("directives", &names).finish()
    }
}

// ============================================================================
// @custom wiring
// ============================================================================

/// Replaces the fetcher of `@custom` fields with a constant
/// `"<name>:<first><second>"`, read from the literal arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomDirectiveWiring;

impl DirectiveWiring for CustomDirectiveWiring {
    fn on_field(&self, mut field: FieldDefinition) -> Result<FieldDefinition> {
        let Some(directive) = field.get_applied_directive(CUSTOM_DIRECTIVE_NAME) else {
            return Ok(field);
        };

        let literal = |arg: &str| {
            directive
                .get_argument(arg)
                .and_then(|a| a.value.as_literal())
                .ok_or_else(|| Error::IllegalState(format!("@custom argument '{arg}' is not a literal")))
        };
        let name = literal("name")?
            .as_str()
            .ok_or_else(|| Error::IllegalState("@custom argument 'name' must be a string".into()))?;
        let object = literal("customObject")?;
        let first = object
            .field("first")
            .and_then(Literal::as_str)
            .ok_or_else(|| Error::IllegalState("@custom customObject.first must be a string".into()))?;
        let second = object
            .field("second")
            .and_then(Literal::as_int)
            .ok_or_else(|| Error::IllegalState("@custom customObject.second must be an int".into()))?;

        let greeting = format!("{name}:{first}{second}");
        tracing::debug!(field = %field.name, value = %greeting, "wired @custom constant fetcher");
        field.data_fetcher = DataFetcher::Constant(Value::String(greeting));
        Ok(field)
    }
}
