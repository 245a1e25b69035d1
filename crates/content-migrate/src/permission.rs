//! Permission token translation.
//!
//! Permission tokens have the shape `"resourceKind:identifier"`. Moving a
//! permission list between environments means swapping the identifier
//! segment between handle form and id/uid form; whether the numeric form is
//! a sequential id or an opaque unique id depends on the destination
//! environment's capabilities. Tokens without a `:` segment, or whose
//! resource kind is not one the translator knows, pass through unchanged.

use tracing::warn;

use crate::error::Result;
use crate::store::{ContentStore, EnvCapabilities};
use crate::value::ElementId;

/// The resource kinds a permission token can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Content section.
    Section,
    /// Storage volume.
    Volume,
    /// Category group.
    CategoryGroup,
    /// Global set.
    GlobalSet,
}

impl ResourceKind {
    /// Classify a token's kind segment. Matching is by containment so
    /// variants like `editentries` and `createentrydrafts` all map to
    /// sections.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.contains("entries") || prefix.contains("entrydrafts") {
            Some(ResourceKind::Section)
        } else if prefix.contains("volume") {
            Some(ResourceKind::Volume)
        } else if prefix.contains("categories") {
            Some(ResourceKind::CategoryGroup)
        } else if prefix.contains("globalset") {
            Some(ResourceKind::GlobalSet)
        } else {
            None
        }
    }
}

/// A permission-addressable resource, with every identifier form the
/// translator can swap between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTarget {
    pub id: ElementId,
    /// Opaque unique id, stable across store instances.
    pub uid: String,
    pub handle: String,
}

/// Translates permission token identifier segments between handle and
/// id/uid form.
pub struct PermissionTranslator<'a> {
    store: &'a dyn ContentStore,
    capabilities: EnvCapabilities,
}

impl<'a> PermissionTranslator<'a> {
    pub fn new(store: &'a dyn ContentStore, capabilities: EnvCapabilities) -> Self {
        Self {
            store,
            capabilities,
        }
    }

    /// Handle form to store form: `"volume:site-assets"` becomes
    /// `"volume:7"` (id mode) or `"volume:<uid>"` (uid mode). Unresolvable
    /// tokens pass through unchanged.
    pub fn to_store_ids(&self, tokens: &[String]) -> Result<Vec<String>> {
        tokens
            .iter()
            .map(|token| self.translate(token, Direction::HandleToId))
            .collect()
    }

    /// Store form back to handle form, the inverse of [`to_store_ids`].
    ///
    /// [`to_store_ids`]: Self::to_store_ids
    pub fn to_handles(&self, tokens: &[String]) -> Result<Vec<String>> {
        tokens
            .iter()
            .map(|token| self.translate(token, Direction::IdToHandle))
            .collect()
    }

    fn translate(&self, token: &str, direction: Direction) -> Result<String> {
        let Some((prefix, identifier)) = token.split_once(':') else {
            return Ok(token.to_string());
        };
        let Some(kind) = ResourceKind::from_prefix(prefix) else {
            return Ok(token.to_string());
        };

        let target = match direction {
            Direction::HandleToId => self.store.permission_target_by_handle(kind, identifier)?,
            Direction::IdToHandle => {
                if self.capabilities.addresses_by_uid {
                    self.store.permission_target_by_uid(kind, identifier)?
                } else {
                    match identifier.parse::<ElementId>() {
                        Ok(id) => self.store.permission_target_by_id(kind, id)?,
                        Err(_) => None,
                    }
                }
            }
        };

        let Some(target) = target else {
            warn!(token, "permission target not found, leaving token unchanged");
            return Ok(token.to_string());
        };

        let identifier = match direction {
            Direction::HandleToId if self.capabilities.addresses_by_uid => target.uid,
            Direction::HandleToId => target.id.to_string(),
            Direction::IdToHandle => target.handle,
        };

        Ok(format!("{}:{}", prefix, identifier))
    }
}

#[derive(Clone, Copy)]
enum Direction {
    HandleToId,
    IdToHandle,
}
