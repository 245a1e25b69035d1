//! Portable document shapes.
//!
//! The portable document is the handle-based, store-independent
//! serialization of an entity's field values: a nested JSON mapping keyed
//! by field handle. Block container fields hold a mapping keyed by
//! placeholder key (`new1`, `new2`, ...) or real id; relation fields hold an
//! ordered list of handle tuples; option-set fields hold an ordered list of
//! selected values.
//!
//! Key order in container mappings is observable (import walks it, the
//! remapper rewrites it positionally), so the crate relies on serde_json's
//! `preserve_order` feature.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A portable field-value mapping, keyed by field handle.
pub type PortableFields = Map<String, Value>;

/// One relation reference in portable form: a handle tuple sufficient to
/// re-resolve the entity uniquely in another store instance.
///
/// Tuples are all-or-nothing by construction; a kind's variant cannot be
/// partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "elementType", rename_all = "lowercase")]
pub enum PortableRelation {
    Asset {
        /// Volume handle.
        volume: String,
        /// Folder name within the volume.
        folder: String,
        filename: String,
    },
    Category {
        /// Category group handle.
        group: String,
        slug: String,
    },
    Entry {
        /// Section handle.
        section: String,
        slug: String,
    },
    Tag {
        /// Tag group handle.
        group: String,
        slug: String,
        /// The tag's own exported field content; tags carry their own field
        /// layout. Ignored when resolving the reference on import.
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        fields: PortableFields,
    },
    User {
        username: String,
    },
}

/// One block instance in portable form.
///
/// The hierarchy flags are emitted only for containers marked hierarchical;
/// flat containers carry just `type`, `enabled` and `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableBlock {
    #[serde(rename = "type")]
    pub type_handle: String,

    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,

    #[serde(default)]
    pub fields: PortableFields,
}
