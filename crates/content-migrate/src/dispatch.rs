//! Field strategy dispatch.
//!
//! Routes a field to its encode/decode strategy by kind tag plus capability
//! check, never by the live type of the field implementation. Unrecognized
//! kinds fall through to passthrough; custom kinds integrate by registering
//! a strategy for their tag.

use std::collections::HashMap;

use crate::schema::{FieldDescriptor, FieldKind};

/// The encode/decode strategies the transforms know how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Scalar,
    Dropdown,
    OptionSet,
    Relation,
    Blocks,
    /// Copy the value unchanged. Default for anything unrecognized.
    Passthrough,
}

/// Strategy table keyed by kind tag, with a default passthrough entry.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    custom: HashMap<String, Strategy>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy for a custom kind tag. Later registrations for
    /// the same tag win.
    pub fn register(&mut self, kind_tag: impl Into<String>, strategy: Strategy) {
        self.custom.insert(kind_tag.into(), strategy);
    }

    /// Pick the strategy for a field.
    ///
    /// Capabilities take precedence over the kind tag: any field exposing
    /// the relation capability routes to [`Strategy::Relation`], any field
    /// exposing the option-set capability to [`Strategy::OptionSet`],
    /// regardless of its concrete kind.
    pub fn strategy_for(&self, field: &FieldDescriptor) -> Strategy {
        if field.capabilities.relational {
            return Strategy::Relation;
        }
        if field.capabilities.option_set {
            return Strategy::OptionSet;
        }

        match &field.kind {
            FieldKind::Scalar => Strategy::Scalar,
            FieldKind::Dropdown => Strategy::Dropdown,
            FieldKind::OptionSet => Strategy::OptionSet,
            FieldKind::Relation => Strategy::Relation,
            FieldKind::BlockContainer => Strategy::Blocks,
            FieldKind::Other(tag) => self
                .custom
                .get(tag)
                .copied()
                .unwrap_or(Strategy::Passthrough),
        }
    }
}
