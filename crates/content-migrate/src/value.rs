//! Store-relative content values.
//!
//! These are the in-memory shapes the engine reads during export and
//! produces during import. Relations are expressed as numeric ids scoped to
//! one store instance; the portable counterparts in [`crate::portable`]
//! express them as resolvable handle tuples instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Store-assigned sequential numeric identifier, unique within one store.
pub type ElementId = i64;

/// The entity kinds a relation field can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Asset,
    Category,
    Entry,
    Tag,
    User,
}

/// A resolved, store-relative relation reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreRef {
    pub kind: EntityKind,
    pub id: ElementId,
}

impl StoreRef {
    pub fn new(kind: EntityKind, id: ElementId) -> Self {
        Self { kind, id }
    }
}

/// One selectable option of an option-set field.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionValue {
    pub value: Value,
    pub selected: bool,
}

impl OptionValue {
    pub fn selected(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            selected: true,
        }
    }

    pub fn unselected(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            selected: false,
        }
    }
}

/// A field value in store-relative form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain value, including rich text already flattened to raw text.
    Scalar(Value),
    /// Bare selected value of a dropdown.
    Dropdown(Value),
    /// Full option model; export keeps only the selected values, in order.
    OptionSet(Vec<OptionValue>),
    /// Ordered relation references. Order is significant and preserved
    /// round-trip.
    Relations(Vec<StoreRef>),
    /// Ordered block instances of a nested block container.
    Blocks(Vec<BlockInstance>),
}

/// One block instance inside a block container field.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockInstance {
    /// Real id once persisted; `None` for blocks reconstructed from a
    /// portable document that have not been saved yet.
    pub id: Option<ElementId>,

    /// Handle of the block type; its field layout comes from the schema
    /// collaborator.
    pub type_handle: String,

    pub enabled: bool,

    // Hierarchy flags, only meaningful when the owning container is marked
    // hierarchical.
    pub modified: bool,
    pub collapsed: bool,
    /// Nesting depth, >= 0.
    pub level: u32,

    /// The block's own field values, recursive.
    pub fields: HashMap<String, FieldValue>,
}

impl BlockInstance {
    /// Create an enabled, unpersisted block of the given type.
    pub fn new(type_handle: impl Into<String>) -> Self {
        Self {
            id: None,
            type_handle: type_handle.into(),
            enabled: true,
            modified: false,
            collapsed: false,
            level: 0,
            fields: HashMap::new(),
        }
    }

    pub fn with_id(mut self, id: ElementId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_field(mut self, handle: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(handle.into(), value);
        self
    }
}

/// A content entity: a persisted (or to-be-persisted) element together with
/// its field values, keyed by field handle.
///
/// The field layout is not owned here; it is supplied per call by the
/// schema collaborator so the same value mapping can be walked under
/// different layout scopes (entity layouts, tag layouts, block types).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentEntity {
    pub id: Option<ElementId>,
    pub fields: HashMap<String, FieldValue>,
}

impl ContentEntity {
    pub fn new(id: Option<ElementId>) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, handle: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(handle.into(), value);
        self
    }
}
