//! Import transform: portable form back to store-relative content.
//!
//! The structural inverse of the export walk. Handle tuples resolve against
//! the destination store; tuples that do not resolve are dropped with a
//! warning and processing continues (only a failure of the resolver itself
//! is fatal). Block containers are reconstructed entry by entry in key
//! order, recursing into each block's own layout. Every field's final value
//! passes through the `before_import_field_value` hook before it is handed
//! to the persistence collaborator.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::dispatch::{Dispatcher, Strategy};
use crate::error::Result;
use crate::portable::{PortableBlock, PortableFields, PortableRelation};
use crate::resolve::RelationResolver;
use crate::schema::FieldDescriptor;
use crate::store::{ContentStore, SchemaProvider, TransformHooks, NOOP_HOOKS};
use crate::value::{BlockInstance, FieldValue, OptionValue};

/// Walks a portable document and reconstructs store-relative content.
pub struct Importer<'a> {
    store: &'a dyn ContentStore,
    schema: &'a dyn SchemaProvider,
    hooks: &'a dyn TransformHooks,
    dispatcher: Dispatcher,
}

impl<'a> Importer<'a> {
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

    /// Import a portable field-value mapping under the destination layout.
    ///
    /// Fields are walked in layout declaration order; handles the portable
    /// document does not carry are skipped.
    pub fn import_fields(
        &self,
        portable: &PortableFields,
        layout: &[FieldDescriptor],
    ) -> Result<HashMap<String, FieldValue>> {
        let mut out = HashMap::with_capacity(layout.len());

        for field in layout {
            let Some(raw) = portable.get(&field.handle) else {
                continue;
            };

            let value = self.import_field(field, raw)?;
            let value = self.hooks.before_import_field_value(field, value)?;
            out.insert(field.handle.clone(), value);
        }

        Ok(out)
    }

    fn import_field(&self, field: &FieldDescriptor, raw: &Value) -> Result<FieldValue> {
        let strategy = self.dispatcher.strategy_for(field);
        debug!(field = %field.handle, ?strategy, "importing field");

        let value = match (strategy, raw) {
            (Strategy::Relation, Value::Array(items)) => {
                self.import_relations(&field.handle, items)?
            }

            // The selected-values set passes through unchanged; the
            // destination persistence layer applies it to the live option
            // model.
            (Strategy::OptionSet, Value::Array(values)) => FieldValue::OptionSet(
                values.iter().cloned().map(OptionValue::selected).collect(),
            ),

            (Strategy::Blocks, Value::Object(entries)) => self.import_blocks(field, entries)?,

            (Strategy::Dropdown, v) => FieldValue::Dropdown(v.clone()),

            (Strategy::Scalar, v) | (Strategy::Passthrough, v) => FieldValue::Scalar(v.clone()),

            // Portable shape does not match the routed strategy: keep the
            // value as an opaque scalar rather than failing the transform.
            (_, v) => {
                warn!(
                    field = %field.handle,
                    "portable value does not match its strategy, passing through"
                );
                FieldValue::Scalar(v.clone())
            }
        };

        Ok(value)
    }

    /// Resolve each handle tuple against the destination store. Unresolved
    /// and malformed references are dropped; list order otherwise matches
    /// the portable document.
    fn import_relations(&self, handle: &str, items: &[Value]) -> Result<FieldValue> {
        let resolver = RelationResolver::new(self.store);
        let mut refs = Vec::with_capacity(items.len());

        for item in items {
            let reference: PortableRelation = match serde_json::from_value(item.clone()) {
                Ok(reference) => reference,
                Err(err) => {
                    warn!(
                        field = %handle,
                        error = %err,
                        "malformed relation reference, dropping"
                    );
                    continue;
                }
            };

            match resolver.resolve(&reference)? {
                Some(store_ref) => refs.push(store_ref),
                None => {
                    warn!(
                        field = %handle,
                        reference = ?reference,
                        "relation reference does not resolve in destination store, dropping"
                    );
                }
            }
        }

        Ok(FieldValue::Relations(refs))
    }

    /// Rebuild block instances in key order, whether keyed by placeholder
    /// (`newN`) or by an already-remapped real id.
    fn import_blocks(
        &self,
        field: &FieldDescriptor,
        entries: &serde_json::Map<String, Value>,
    ) -> Result<FieldValue> {
        let mut blocks = Vec::with_capacity(entries.len());

        for (key, entry) in entries {
            let portable: PortableBlock = match serde_json::from_value(entry.clone()) {
                Ok(portable) => portable,
                Err(err) => {
                    warn!(
                        field = %field.handle,
                        key = %key,
                        error = %err,
                        "malformed block entry, skipping"
                    );
                    continue;
                }
            };

            let layout = self.schema.block_type_fields(&portable.type_handle)?;
            let fields = self.import_fields(&portable.fields, &layout)?;

            blocks.push(BlockInstance {
                // Real ids survive as block ids; placeholder keys have none
                // until persistence assigns one.
                id: key.parse().ok(),
                type_handle: portable.type_handle,
                enabled: portable.enabled,
                modified: portable.modified.unwrap_or(false),
                collapsed: portable.collapsed.unwrap_or(false),
                level: portable.level.unwrap_or(0),
                fields,
            });
        }

        Ok(FieldValue::Blocks(blocks))
    }
}
