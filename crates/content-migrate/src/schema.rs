//! Field layout descriptors.
//!
//! A field layout is the ordered schema of fields attached to an entity or
//! block type. Layouts are supplied by the external schema collaborator
//! ([`SchemaProvider`](crate::store::SchemaProvider)); the engine only reads
//! them to drive traversal order and strategy dispatch.

/// The finite set of field kind tags the dispatcher routes on.
///
/// Kinds the engine does not recognize arrive as [`FieldKind::Other`] with
/// the store's own tag string; those fall through to the passthrough
/// strategy unless a strategy has been registered for the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain value: text, number, boolean, rich text flattened to raw text.
    Scalar,
    /// Multi-select option field (checkboxes, multi-select).
    OptionSet,
    /// Relation to other entities (assets, categories, entries, tags, users).
    Relation,
    /// Repeatable nested block container (matrix-style).
    BlockContainer,
    /// Single-select dropdown; exports its bare selected value.
    Dropdown,
    /// Any kind the engine has no built-in tag for.
    Other(String),
}

/// Capabilities a field exposes independently of its concrete kind tag.
///
/// Dispatch consults these before the kind tag: any field that behaves as a
/// relation is routed to the relation strategy, any field that behaves as an
/// option set to the option-set strategy, whatever its registered kind. This
/// is the extension point that lets new field kinds integrate without
/// central registry edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Field value is a list of entity references.
    pub relational: bool,
    /// Field value is a set of selectable options.
    pub option_set: bool,
}

/// Schema descriptor for a single field within a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Human-assigned handle, unique within its layout scope.
    pub handle: String,

    /// Kind tag used for strategy dispatch.
    pub kind: FieldKind,

    /// Block containers only: block instances carry `modified`, `collapsed`
    /// and `level` hierarchy flags in portable form.
    pub hierarchical_blocks: bool,

    /// Block containers only: one copy of the blocks serves every locale.
    /// Containers with this unset get their placeholder keys rewritten to
    /// real ids by the localization remapper after persistence; shared
    /// containers are never remapped.
    pub shared_across_locales: bool,

    /// Behavioral capabilities, checked ahead of the kind tag.
    pub capabilities: Capabilities,
}

impl FieldDescriptor {
    /// Create a descriptor with default flags.
    pub fn new(handle: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            handle: handle.into(),
            kind,
            hierarchical_blocks: false,
            shared_across_locales: false,
            capabilities: Capabilities::default(),
        }
    }

    /// Mark this container's blocks as hierarchy-capable.
    pub fn hierarchical(mut self) -> Self {
        self.hierarchical_blocks = true;
        self
    }

    /// Mark this container as shared across locales.
    pub fn shared(mut self) -> Self {
        self.shared_across_locales = true;
        self
    }

    /// Override the field's behavioral capabilities.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}
