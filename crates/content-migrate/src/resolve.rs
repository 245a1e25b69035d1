//! Relation resolution: handle tuples to ids and back.
//!
//! Resolution is whole-tuple: an asset lookup resolves the volume, then the
//! folder scoped to that volume, then the filename scoped to that folder. A
//! partial match (volume found, folder not) is not-found, never an error.
//! Only a failure of the store collaborator itself propagates.

use crate::error::Result;
use crate::portable::PortableRelation;
use crate::store::{ContentStore, EntityDescription};
use crate::value::{ElementId, EntityKind, StoreRef};

/// Resolves portable relation references against one store instance.
pub struct RelationResolver<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> RelationResolver<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Resolve a handle tuple to a store-relative reference.
    ///
    /// `Ok(None)` means the tuple does not resolve in this store; the
    /// caller is expected to drop the reference and continue.
    pub fn resolve(&self, reference: &PortableRelation) -> Result<Option<StoreRef>> {
        let resolved = match reference {
            PortableRelation::Asset {
                volume,
                folder,
                filename,
            } => {
                let Some(volume_id) = self.store.volume_id(volume)? else {
                    return Ok(None);
                };
                let Some(folder_id) = self.store.folder_id(volume_id, folder)? else {
                    return Ok(None);
                };
                self.store
                    .asset_id(folder_id, filename)?
                    .map(|id| StoreRef::new(EntityKind::Asset, id))
            }
            PortableRelation::Category { group, slug } => {
                let Some(group_id) = self.store.category_group_id(group)? else {
                    return Ok(None);
                };
                self.store
                    .category_id(group_id, slug)?
                    .map(|id| StoreRef::new(EntityKind::Category, id))
            }
            PortableRelation::Entry { section, slug } => {
                let Some(section_id) = self.store.section_id(section)? else {
                    return Ok(None);
                };
                self.store
                    .entry_id(section_id, slug)?
                    .map(|id| StoreRef::new(EntityKind::Entry, id))
            }
            PortableRelation::Tag { group, slug, .. } => {
                let Some(group_id) = self.store.tag_group_id(group)? else {
                    return Ok(None);
                };
                self.store
                    .tag_id(group_id, slug)?
                    .map(|id| StoreRef::new(EntityKind::Tag, id))
            }
            PortableRelation::User { username } => self
                .store
                .user_id(username)?
                .map(|id| StoreRef::new(EntityKind::User, id)),
        };

        Ok(resolved)
    }

    /// Inverse lookup: descriptive attributes for a store-relative id.
    pub fn describe(
        &self,
        kind: EntityKind,
        id: ElementId,
    ) -> Result<Option<EntityDescription>> {
        self.store.describe(kind, id)
    }
}
