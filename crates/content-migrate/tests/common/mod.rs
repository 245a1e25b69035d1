//! Shared in-memory store and schema fixtures for engine-level tests.

#![allow(dead_code)]

use std::collections::HashMap;

use content_migrate::store::EntityDescription;
use content_migrate::{
    ContentEntity, ContentStore, ElementId, EntityKind, FieldDescriptor, MigrateError,
    PermissionTarget, ResourceKind, Result, SchemaProvider,
};

/// In-memory store: handle-tuple lookups one way, descriptions the other.
#[derive(Default)]
pub struct MemoryStore {
    volumes: HashMap<String, ElementId>,
    folders: HashMap<(ElementId, String), ElementId>,
    assets: HashMap<(ElementId, String), ElementId>,
    category_groups: HashMap<String, ElementId>,
    categories: HashMap<(ElementId, String), ElementId>,
    sections: HashMap<String, ElementId>,
    entries: HashMap<(ElementId, String), ElementId>,
    tag_groups: HashMap<String, ElementId>,
    tags: HashMap<(ElementId, String), ElementId>,
    users: HashMap<String, ElementId>,
    descriptions: HashMap<(EntityKind, ElementId), EntityDescription>,
    tag_contents: HashMap<ElementId, ContentEntity>,
    permissions: Vec<(ResourceKind, PermissionTarget)>,
    /// When set, every lookup fails as a collaborator I/O error.
    pub unreachable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(&mut self, handle: &str, id: ElementId) {
        self.sections.insert(handle.into(), id);
    }

    pub fn add_entry(&mut self, section_id: ElementId, section: &str, slug: &str, id: ElementId) {
        self.entries.insert((section_id, slug.into()), id);
        self.descriptions.insert(
            (EntityKind::Entry, id),
            EntityDescription::Entry {
                section: section.into(),
                slug: slug.into(),
            },
        );
    }

    pub fn add_volume(&mut self, handle: &str, id: ElementId) {
        self.volumes.insert(handle.into(), id);
    }

    pub fn add_folder(&mut self, volume_id: ElementId, name: &str, id: ElementId) {
        self.folders.insert((volume_id, name.into()), id);
    }

    pub fn add_asset(
        &mut self,
        volume: &str,
        folder: &str,
        folder_id: ElementId,
        filename: &str,
        id: ElementId,
    ) {
        self.assets.insert((folder_id, filename.into()), id);
        self.descriptions.insert(
            (EntityKind::Asset, id),
            EntityDescription::Asset {
                volume: volume.into(),
                folder: folder.into(),
                filename: filename.into(),
            },
        );
    }

    pub fn add_category_group(&mut self, handle: &str, id: ElementId) {
        self.category_groups.insert(handle.into(), id);
    }

    pub fn add_category(&mut self, group_id: ElementId, group: &str, slug: &str, id: ElementId) {
        self.categories.insert((group_id, slug.into()), id);
        self.descriptions.insert(
            (EntityKind::Category, id),
            EntityDescription::Category {
                group: group.into(),
                slug: slug.into(),
            },
        );
    }

    pub fn add_tag_group(&mut self, handle: &str, id: ElementId) {
        self.tag_groups.insert(handle.into(), id);
    }

    pub fn add_tag(&mut self, group_id: ElementId, group: &str, slug: &str, id: ElementId) {
        self.tags.insert((group_id, slug.into()), id);
        self.descriptions.insert(
            (EntityKind::Tag, id),
            EntityDescription::Tag {
                group: group.into(),
                slug: slug.into(),
            },
        );
    }

    pub fn set_tag_content(&mut self, id: ElementId, content: ContentEntity) {
        self.tag_contents.insert(id, content);
    }

    pub fn add_user(&mut self, username: &str, id: ElementId) {
        self.users.insert(username.into(), id);
        self.descriptions.insert(
            (EntityKind::User, id),
            EntityDescription::User {
                username: username.into(),
            },
        );
    }

    pub fn add_permission_target(
        &mut self,
        kind: ResourceKind,
        handle: &str,
        id: ElementId,
        uid: &str,
    ) {
        self.permissions.push((
            kind,
            PermissionTarget {
                id,
                uid: uid.into(),
                handle: handle.into(),
            },
        ));
    }

    fn check_reachable(&self) -> Result<()> {
        if self.unreachable {
            Err(MigrateError::store(
                "store unreachable",
                "in-memory test store",
            ))
        } else {
            Ok(())
        }
    }

    fn lookup(&self, map: &HashMap<String, ElementId>, key: &str) -> Result<Option<ElementId>> {
        self.check_reachable()?;
        Ok(map.get(key).copied())
    }

    fn lookup_scoped(
        &self,
        map: &HashMap<(ElementId, String), ElementId>,
        scope: ElementId,
        key: &str,
    ) -> Result<Option<ElementId>> {
        self.check_reachable()?;
        Ok(map.get(&(scope, key.to_string())).copied())
    }
}

impl ContentStore for MemoryStore {
    fn volume_id(&self, handle: &str) -> Result<Option<ElementId>> {
        self.lookup(&self.volumes, handle)
    }

    fn folder_id(&self, volume: ElementId, name: &str) -> Result<Option<ElementId>> {
        self.lookup_scoped(&self.folders, volume, name)
    }

    fn asset_id(&self, folder: ElementId, filename: &str) -> Result<Option<ElementId>> {
        self.lookup_scoped(&self.assets, folder, filename)
    }

    fn category_group_id(&self, handle: &str) -> Result<Option<ElementId>> {
        self.lookup(&self.category_groups, handle)
    }

    fn category_id(&self, group: ElementId, slug: &str) -> Result<Option<ElementId>> {
        self.lookup_scoped(&self.categories, group, slug)
    }

    fn section_id(&self, handle: &str) -> Result<Option<ElementId>> {
        self.lookup(&self.sections, handle)
    }

    fn entry_id(&self, section: ElementId, slug: &str) -> Result<Option<ElementId>> {
        self.lookup_scoped(&self.entries, section, slug)
    }

    fn tag_group_id(&self, handle: &str) -> Result<Option<ElementId>> {
        self.lookup(&self.tag_groups, handle)
    }

    fn tag_id(&self, group: ElementId, slug: &str) -> Result<Option<ElementId>> {
        self.lookup_scoped(&self.tags, group, slug)
    }

    fn user_id(&self, username_or_email: &str) -> Result<Option<ElementId>> {
        self.lookup(&self.users, username_or_email)
    }

    fn describe(&self, kind: EntityKind, id: ElementId) -> Result<Option<EntityDescription>> {
        self.check_reachable()?;
        Ok(self.descriptions.get(&(kind, id)).cloned())
    }

    fn tag_content(&self, id: ElementId) -> Result<Option<ContentEntity>> {
        self.check_reachable()?;
        Ok(self.tag_contents.get(&id).cloned())
    }

    fn permission_target_by_handle(
        &self,
        kind: ResourceKind,
        handle: &str,
    ) -> Result<Option<PermissionTarget>> {
        self.check_reachable()?;
        Ok(self
            .permissions
            .iter()
            .find(|(k, t)| *k == kind && t.handle == handle)
            .map(|(_, t)| t.clone()))
    }

    fn permission_target_by_id(
        &self,
        kind: ResourceKind,
        id: ElementId,
    ) -> Result<Option<PermissionTarget>> {
        self.check_reachable()?;
        Ok(self
            .permissions
            .iter()
            .find(|(k, t)| *k == kind && t.id == id)
            .map(|(_, t)| t.clone()))
    }

    fn permission_target_by_uid(
        &self,
        kind: ResourceKind,
        uid: &str,
    ) -> Result<Option<PermissionTarget>> {
        self.check_reachable()?;
        Ok(self
            .permissions
            .iter()
            .find(|(k, t)| *k == kind && t.uid == uid)
            .map(|(_, t)| t.clone()))
    }
}

/// In-memory schema collaborator: one default entity layout, optional
/// per-entity layouts (for tags), and block type layouts by handle.
#[derive(Default)]
pub struct MemorySchema {
    pub default_layout: Vec<FieldDescriptor>,
    pub entity_layouts: HashMap<ElementId, Vec<FieldDescriptor>>,
    pub block_types: HashMap<String, Vec<FieldDescriptor>>,
}

impl MemorySchema {
    pub fn new(default_layout: Vec<FieldDescriptor>) -> Self {
        Self {
            default_layout,
            ..Self::default()
        }
    }

    pub fn set_entity_layout(&mut self, id: ElementId, layout: Vec<FieldDescriptor>) {
        self.entity_layouts.insert(id, layout);
    }

    pub fn set_block_type(&mut self, handle: &str, layout: Vec<FieldDescriptor>) {
        self.block_types.insert(handle.into(), layout);
    }
}

impl SchemaProvider for MemorySchema {
    fn field_layout(&self, entity: &ContentEntity) -> Result<Vec<FieldDescriptor>> {
        Ok(entity
            .id
            .and_then(|id| self.entity_layouts.get(&id))
            .unwrap_or(&self.default_layout)
            .clone())
    }

    fn block_type_fields(&self, type_handle: &str) -> Result<Vec<FieldDescriptor>> {
        self.block_types
            .get(type_handle)
            .cloned()
            .ok_or_else(|| MigrateError::Schema(format!("unknown block type '{}'", type_handle)))
    }
}
