//! Export transform: store-relative content to portable form.
//!
//! A recursive walk over an entity's field layout in declaration order.
//! Relations become handle tuples, option sets keep only their selected
//! values, block containers become ordered mappings keyed `new1..newk` with
//! each block's own fields exported recursively. Every field's final value
//! passes through the `before_export_field_value` hook.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::dispatch::{Dispatcher, Strategy};
use crate::error::Result;
use crate::portable::{PortableBlock, PortableFields, PortableRelation};
use crate::resolve::RelationResolver;
use crate::schema::FieldDescriptor;
use crate::store::{
    ContentStore, EntityDescription, SchemaProvider, TransformHooks, NOOP_HOOKS,
};
use crate::value::{BlockInstance, ContentEntity, ElementId, FieldValue, StoreRef};

/// Walks store-relative content and produces a portable document.
pub struct Exporter<'a> {
    store: &'a dyn ContentStore,
    schema: &'a dyn SchemaProvider,
    hooks: &'a dyn TransformHooks,
    dispatcher: Dispatcher,
}

impl<'a> Exporter<'a> {
    pub fn new(store: &'a dyn ContentStore, schema: &'a dyn SchemaProvider) -> Self {
        Self {
            store,
            schema,
            hooks: &NOOP_HOOKS,
            dispatcher: Dispatcher::new(),
        }
    }

    /// Install extension hooks.
    pub fn with_hooks(mut self, hooks: &'a dyn TransformHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replace the strategy table, e.g. after registering custom kinds.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Export an entity's field values under the given layout.
    pub fn export_entity(
        &self,
        entity: &ContentEntity,
        layout: &[FieldDescriptor],
    ) -> Result<PortableFields> {
        self.export_fields(&entity.fields, layout)
    }

    /// Export a field-value mapping under a layout. Fields are walked in
    /// layout declaration order; values the entity does not carry export as
    /// null.
    pub fn export_fields(
        &self,
        fields: &HashMap<String, FieldValue>,
        layout: &[FieldDescriptor],
    ) -> Result<PortableFields> {
        let mut out = Map::new();

        for field in layout {
            let value = fields.get(&field.handle);
            let exported = self.export_field(field, value)?;
            let exported = self.hooks.before_export_field_value(field, exported)?;
            out.insert(field.handle.clone(), exported);
        }

        Ok(out)
    }

    fn export_field(
        &self,
        field: &FieldDescriptor,
        value: Option<&FieldValue>,
    ) -> Result<Value> {
        let strategy = self.dispatcher.strategy_for(field);
        debug!(field = %field.handle, ?strategy, "exporting field");

        let exported = match (strategy, value) {
            (_, None) => Value::Null,

            (Strategy::Relation, Some(FieldValue::Relations(refs))) => {
                self.export_relations(&field.handle, refs)?
            }

            (Strategy::OptionSet, Some(FieldValue::OptionSet(options))) => Value::Array(
                options
                    .iter()
                    .filter(|o| o.selected)
                    .map(|o| o.value.clone())
                    .collect(),
            ),

            (Strategy::Blocks, Some(FieldValue::Blocks(blocks))) => {
                self.export_blocks(field, blocks)?
            }

            (Strategy::Dropdown, Some(FieldValue::Dropdown(v)))
            | (Strategy::Scalar, Some(FieldValue::Scalar(v)))
            | (Strategy::Passthrough, Some(FieldValue::Scalar(v)))
            | (Strategy::Passthrough, Some(FieldValue::Dropdown(v))) => v.clone(),

            // Value shape does not match the routed strategy: copy what can
            // be copied rather than failing the transform.
            (_, Some(other)) => {
                warn!(
                    field = %field.handle,
                    "field value does not match its strategy, passing through"
                );
                raw_value(other)
            }
        };

        Ok(exported)
    }

    /// Build the ordered handle-tuple list for a relation field. References
    /// whose entities cannot be described (stale ids) are dropped with a
    /// warning; output order matches input store order.
    fn export_relations(&self, handle: &str, refs: &[StoreRef]) -> Result<Value> {
        let resolver = RelationResolver::new(self.store);
        let mut items = Vec::with_capacity(refs.len());

        for reference in refs {
            match resolver.describe(reference.kind, reference.id)? {
                Some(description) => {
                    let portable = self.portable_relation(description, reference.id)?;
                    items.push(serde_json::to_value(portable)?);
                }
                None => {
                    warn!(
                        field = %handle,
                        kind = ?reference.kind,
                        id = reference.id,
                        "relation target not found in source store, dropping reference"
                    );
                }
            }
        }

        Ok(Value::Array(items))
    }

    fn portable_relation(
        &self,
        description: EntityDescription,
        id: ElementId,
    ) -> Result<PortableRelation> {
        let portable = match description {
            EntityDescription::Asset {
                volume,
                folder,
                filename,
            } => PortableRelation::Asset {
                volume,
                folder,
                filename,
            },
            EntityDescription::Category { group, slug } => {
                PortableRelation::Category { group, slug }
            }
            EntityDescription::Entry { section, slug } => {
                PortableRelation::Entry { section, slug }
            }
            EntityDescription::Tag { group, slug } => {
                // Tags carry their own field layout; export it recursively
                // so the tag can be recreated with content elsewhere.
                let fields = match self.store.tag_content(id)? {
                    Some(tag) => {
                        let layout = self.schema.field_layout(&tag)?;
                        self.export_entity(&tag, &layout)?
                    }
                    None => PortableFields::new(),
                };
                PortableRelation::Tag {
                    group,
                    slug,
                    fields,
                }
            }
            EntityDescription::User { username } => PortableRelation::User { username },
        };

        Ok(portable)
    }

    /// Export a block container: blocks in store order, keyed by sequential
    /// placeholder keys starting at 1. The counter is local to this
    /// container pass, so nested containers restart their own sequence.
    fn export_blocks(&self, field: &FieldDescriptor, blocks: &[BlockInstance]) -> Result<Value> {
        let mut out = Map::new();

        for (index, block) in blocks.iter().enumerate() {
            let layout = self.schema.block_type_fields(&block.type_handle)?;
            let fields = self.export_fields(&block.fields, &layout)?;

            let portable = PortableBlock {
                type_handle: block.type_handle.clone(),
                enabled: block.enabled,
                modified: field.hierarchical_blocks.then_some(block.modified),
                collapsed: field.hierarchical_blocks.then_some(block.collapsed),
                level: field.hierarchical_blocks.then_some(block.level),
                fields,
            };

            let key = format!("new{}", index + 1);
            out.insert(key, serde_json::to_value(portable)?);
        }

        Ok(Value::Object(out))
    }
}

/// Best-effort copy of a store-relative value for passthrough of shapes the
/// strategy did not expect.
fn raw_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Scalar(v) | FieldValue::Dropdown(v) => v.clone(),
        FieldValue::OptionSet(options) => Value::Array(
            options
                .iter()
                .filter(|o| o.selected)
                .map(|o| o.value.clone())
                .collect(),
        ),
        FieldValue::Relations(refs) => Value::Array(
            refs.iter()
                .map(|r| Value::Number(r.id.into()))
                .collect(),
        ),
        FieldValue::Blocks(_) => Value::Null,
    }
}
