//! External collaborator interfaces.
//!
//! The engine never talks to a concrete content store. Everything it needs
//! from the outside world comes through three traits:
//!
//! - [`ContentStore`]: lookup-by-unique-attribute operations, the inverse
//!   describe-by-id operations, and permission target lookups
//! - [`SchemaProvider`]: field layouts for entities and block types
//! - [`TransformHooks`]: the `beforeExportFieldValue` /
//!   `beforeImportFieldValue` extension points
//!
//! All store methods return `Result<Option<T>>`: `Ok(None)` is the normal
//! not-found result, `Err` is reserved for collaborator I/O failure and
//! aborts the whole transform. Calls are blocking from the engine's
//! perspective; an implementation may be asynchronous internally as long as
//! results come back in call order.

use serde_json::Value;

use crate::error::Result;
use crate::permission::{PermissionTarget, ResourceKind};
use crate::schema::FieldDescriptor;
use crate::value::{ContentEntity, ElementId, EntityKind, FieldValue};

/// Descriptive attributes of an entity, as returned by
/// [`ContentStore::describe`]. The export transform turns these into
/// portable handle tuples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityDescription {
    Asset {
        volume: String,
        folder: String,
        filename: String,
    },
    Category {
        group: String,
        slug: String,
    },
    Entry {
        section: String,
        slug: String,
    },
    Tag {
        group: String,
        slug: String,
    },
    User {
        username: String,
    },
}

/// Lookup operations the engine requires from a store instance.
///
/// The scoped lookups mirror how handles nest: a folder handle only means
/// something within a volume, an entry slug within a section. The relation
/// resolver composes them into whole-tuple resolution where any partial
/// match is not-found.
pub trait ContentStore {
    // ===== Handle lookups (import direction) =====

    /// Volume id by volume handle.
    fn volume_id(&self, handle: &str) -> Result<Option<ElementId>>;

    /// Folder id by name, scoped to a volume.
    fn folder_id(&self, volume: ElementId, name: &str) -> Result<Option<ElementId>>;

    /// Asset id by filename, scoped to a folder.
    fn asset_id(&self, folder: ElementId, filename: &str) -> Result<Option<ElementId>>;

    /// Category group id by group handle.
    fn category_group_id(&self, handle: &str) -> Result<Option<ElementId>>;

    /// Category id by slug, scoped to a group.
    fn category_id(&self, group: ElementId, slug: &str) -> Result<Option<ElementId>>;

    /// Section id by section handle.
    fn section_id(&self, handle: &str) -> Result<Option<ElementId>>;

    /// Entry id by slug, scoped to a section.
    fn entry_id(&self, section: ElementId, slug: &str) -> Result<Option<ElementId>>;

    /// Tag group id by group handle.
    fn tag_group_id(&self, handle: &str) -> Result<Option<ElementId>>;

    /// Tag id by slug, scoped to a group.
    fn tag_id(&self, group: ElementId, slug: &str) -> Result<Option<ElementId>>;

    /// User id by username or email.
    fn user_id(&self, username_or_email: &str) -> Result<Option<ElementId>>;

    // ===== Id lookups (export direction) =====

    /// Descriptive attributes for an entity, or `None` if the id does not
    /// exist in this store.
    fn describe(&self, kind: EntityKind, id: ElementId) -> Result<Option<EntityDescription>>;

    /// Field content of a tag element; tags carry their own field layout
    /// and are exported recursively.
    fn tag_content(&self, id: ElementId) -> Result<Option<ContentEntity>>;

    // ===== Permission targets =====

    /// Permission target (id, uid, handle) by handle.
    fn permission_target_by_handle(
        &self,
        kind: ResourceKind,
        handle: &str,
    ) -> Result<Option<PermissionTarget>>;

    /// Permission target by sequential id.
    fn permission_target_by_id(
        &self,
        kind: ResourceKind,
        id: ElementId,
    ) -> Result<Option<PermissionTarget>>;

    /// Permission target by opaque unique id.
    fn permission_target_by_uid(
        &self,
        kind: ResourceKind,
        uid: &str,
    ) -> Result<Option<PermissionTarget>>;
}

/// Field layout lookups, supplied by the external schema collaborator.
pub trait SchemaProvider {
    /// Ordered field layout of an entity. Declaration order drives the
    /// export traversal and is observable through placeholder numbering.
    fn field_layout(&self, entity: &ContentEntity) -> Result<Vec<FieldDescriptor>>;

    /// Ordered field layout of a block type, by type handle.
    fn block_type_fields(&self, type_handle: &str) -> Result<Vec<FieldDescriptor>>;
}

/// Extension hooks applied to every field's final value on each side of the
/// transform.
///
/// Hooks may transform or veto a value but never skip it silently: whatever
/// they return is what gets emitted. Returning `Err` aborts the whole
/// transform.
pub trait TransformHooks {
    /// Called with each field's tentative portable value during export.
    fn before_export_field_value(&self, field: &FieldDescriptor, value: Value) -> Result<Value> {
        let _ = field;
        Ok(value)
    }

    /// Called with each field's reconstructed store-relative value during
    /// import, before it is handed to the persistence collaborator.
    fn before_import_field_value(
        &self,
        field: &FieldDescriptor,
        value: FieldValue,
    ) -> Result<FieldValue> {
        let _ = field;
        Ok(value)
    }
}

/// Default hooks: pass every value through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl TransformHooks for NoopHooks {}

pub(crate) static NOOP_HOOKS: NoopHooks = NoopHooks;

/// Capabilities of the destination environment, resolved once per migration
/// run and threaded through the translators that need it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvCapabilities {
    /// Destination addresses sections/volumes/groups/sets by opaque unique
    /// id instead of sequential id.
    pub addresses_by_uid: bool,
}

impl EnvCapabilities {
    /// Environment that addresses resources by sequential id.
    pub fn id_addressing() -> Self {
        Self {
            addresses_by_uid: false,
        }
    }

    /// Environment that addresses resources by opaque unique id.
    pub fn uid_addressing() -> Self {
        Self {
            addresses_by_uid: true,
        }
    }
}
