//! # Schema Generator Hooks
//!
//! The extension points a schema generator consults while it turns native
//! types into a GraphQL schema. Every hook has a "no override" default, so
//! an implementation only supplies what it changes.
//!
//! | Hook | Default |
//! |------|---------|
//! | `resolve_type` | `None`, the generator keeps its own mapping |
//! | `rewrite_directive` | the generator's applied directive, unchanged |
//! | `resolve_wrapper` | the descriptor, unchanged |
//! | `on_field` | the field, unchanged |

use crate::config::HooksConfig;
use crate::directive::{
    custom_object_input_type, AppliedDirective, CustomDirectiveWiring, DirectiveDefinition,
    DirectiveInstance, DirectiveRewriter, FieldDefinition, WiringFactory, CUSTOM_DIRECTIVE_NAME,
};
use crate::model::TypeDescriptor;
use crate::scalar::{period_type, string_type, uuid_type};
use crate::schema::{GraphQLType, TypeRegistry};
use crate::Result;

/// Native classifier of the UUID type.
pub const UUID_NATIVE: &str = "Uuid";
/// Native classifier of an inclusive range.
pub const RANGE_NATIVE: &str = "RangeInclusive";
/// Native classifier of a calendar date.
pub const DATE_NATIVE: &str = "NaiveDate";
/// Native classifier of the `@custom` nested record.
pub const CUSTOM_OBJECT_NATIVE: &str = "CustomObject";
/// Native classifier lists resolve to.
pub const LIST_NATIVE: &str = "Vec";

// ============================================================================
// Hooks trait
// ============================================================================

pub trait SchemaHooks: Send + Sync {
    /// Schema type for a native type, or `None` for no override.
    fn resolve_type(&self, _descriptor: &TypeDescriptor) -> Option<GraphQLType> {
        None
    }

    /// Applied form of a directive declared on a native element.
    fn rewrite_directive(
        &self,
        _instance: &DirectiveInstance,
        _definition: &DirectiveDefinition,
        default: AppliedDirective,
    ) -> Result<AppliedDirective> {
        Ok(default)
    }

    /// The type the generator should inspect in place of a wrapper type.
    fn resolve_wrapper(&self, descriptor: TypeDescriptor) -> TypeDescriptor {
        descriptor
    }

    /// Last look at an output field before it enters the schema.
    fn on_field(&self, field: FieldDefinition) -> Result<FieldDefinition> {
        Ok(field)
    }
}

// ============================================================================
// CustomSchemaHooks
// ============================================================================

/// Hooks for the custom scalars and the `@custom` directive.
#[derive(Debug, Clone)]
pub struct CustomSchemaHooks {
    registry: TypeRegistry,
    rewriter: Option<DirectiveRewriter>,
    wiring: WiringFactory,
    unwrap_wrappers: Vec<String>,
    list_wrappers: Vec<String>,
}

impl CustomSchemaHooks {
    /// Hooks with every mapping enabled and no value classes.
    pub fn new() -> Self {
        // The default config has no descriptors to parse.
        Self::build(&HooksConfig::default(), Vec::new())
    }

    pub fn from_config(config: &HooksConfig) -> Result<Self> {
        let string_types = config.string_type_descriptors()?;
        Ok(Self::build(config, string_types))
    }

    fn build(config: &HooksConfig, string_types: Vec<TypeDescriptor>) -> Self {
        let mut registry = TypeRegistry::new();
        if config.uuid_scalar {
            registry.register(TypeDescriptor::named(UUID_NATIVE), uuid_type());
        }
        if config.period_scalar {
            registry.register(
                TypeDescriptor::generic(RANGE_NATIVE, [TypeDescriptor::named(DATE_NATIVE)]),
                period_type(),
            );
        }
        for descriptor in string_types {
            registry.register(descriptor, string_type());
        }

        let mut wiring = WiringFactory::new();
        let rewriter = if config.custom_directive {
            registry.register(TypeDescriptor::named(CUSTOM_OBJECT_NATIVE), custom_object_input_type());
            wiring.register(CUSTOM_DIRECTIVE_NAME, CustomDirectiveWiring);
            Some(DirectiveRewriter)
        } else {
            None
        };

        tracing::info!(
            types = registry.len(),
            custom_directive = config.custom_directive,
            "schema hooks ready"
        );

        Self {
            registry,
            rewriter,
            wiring,
            unwrap_wrappers: config.unwrap_wrappers.clone(),
            list_wrappers: config.list_wrappers.clone(),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn wiring(&self) -> &WiringFactory {
        &self.wiring
    }
}

impl Default for CustomSchemaHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaHooks for CustomSchemaHooks {
    fn resolve_type(&self, descriptor: &TypeDescriptor) -> Option<GraphQLType> {
        let resolved = self.registry.get(descriptor).cloned();
        if let Some(ty) = &resolved {
            tracing::trace!(native = %descriptor, graphql = ty.name(), "type override");
        }
        resolved
    }

    fn rewrite_directive(
        &self,
        instance: &DirectiveInstance,
        definition: &DirectiveDefinition,
        default: AppliedDirective,
    ) -> Result<AppliedDirective> {
        match &self.rewriter {
            Some(rewriter) => rewriter.rewrite(instance, definition, default),
            None => Ok(default),
        }
    }

    fn resolve_wrapper(&self, descriptor: TypeDescriptor) -> TypeDescriptor {
        if descriptor.arguments.len() != 1 {
            return descriptor;
        }
        let classifier = descriptor.classifier();
        if self.unwrap_wrappers.iter().any(|w| w == classifier) {
            let TypeDescriptor { mut arguments, .. } = descriptor;
            return arguments.remove(0);
        }
        if self.list_wrappers.iter().any(|w| w == classifier) {
            return TypeDescriptor::generic(LIST_NATIVE, descriptor.arguments);
        }
        descriptor
    }

    fn on_field(&self, field: FieldDefinition) -> Result<FieldDefinition> {
        self.wiring.wire_field(field)
    }
}
