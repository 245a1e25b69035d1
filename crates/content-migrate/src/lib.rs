//! # content-migrate
//!
//! Bidirectional content-transform engine for moving structured content
//! entities between store instances (development, staging, production)
//! whose numeric identifiers differ but whose human-assigned handles do
//! not.
//!
//! The engine converts field values between two forms:
//!
//! - **Store-relative**: relations expressed as numeric ids, scoped to one
//!   store instance ([`value`])
//! - **Portable**: relations expressed as resolvable handle tuples,
//!   meaningful in any store instance ([`portable`])
//!
//! [`export::Exporter`] walks an entity's field layout and produces a
//! portable document; [`import::Importer`] reconstructs store-relative
//! content from one against a (possibly different) store; once persistence
//! has assigned real ids, [`localize::remap_placeholder_keys`] rewrites the
//! placeholder keys of not-yet-persisted nested blocks so a second locale
//! pass updates the same block instances.
//!
//! The content store, schema lookups and persistence are external
//! collaborators behind the traits in [`store`]. Not-found is a normal
//! result there and makes the transforms drop the single affected
//! reference; only collaborator I/O failure aborts a transform.
//!
//! ## Example
//!
//! ```
//! use content_migrate::slug::{slugify, SlugOptions};
//!
//! assert_eq!(slugify("Café & Bar!!", &SlugOptions::default()), "cafe-bar");
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod import;
pub mod localize;
pub mod permission;
pub mod portable;
pub mod resolve;
pub mod schema;
pub mod slug;
pub mod store;
pub mod value;

// Re-exports for convenient access
pub use config::MigrationConfig;
pub use dispatch::{Dispatcher, Strategy};
pub use error::{MigrateError, Result};
pub use export::Exporter;
pub use import::Importer;
pub use localize::remap_placeholder_keys;
pub use permission::{PermissionTarget, PermissionTranslator, ResourceKind};
pub use portable::{PortableBlock, PortableFields, PortableRelation};
pub use resolve::RelationResolver;
pub use schema::{Capabilities, FieldDescriptor, FieldKind};
pub use slug::{slugify, SlugOptions};
pub use store::{
    ContentStore, EntityDescription, EnvCapabilities, NoopHooks, SchemaProvider, TransformHooks,
};
pub use value::{
    BlockInstance, ContentEntity, ElementId, EntityKind, FieldValue, OptionValue, StoreRef,
};
