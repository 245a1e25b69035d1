//! Placeholder-key remapping after persistence.
//!
//! Once the persistence collaborator has saved imported content and
//! assigned real ids to new block instances, the portable document that
//! produced them still carries placeholder keys. Before that document can
//! drive a second locale pass, containers whose blocks are not localized
//! per locale must switch to the real ids so every locale updates the same
//! block instances instead of spawning new ones.

use serde_json::Value;
use tracing::debug;

use crate::schema::{FieldDescriptor, FieldKind};
use crate::value::{ContentEntity, FieldValue};

/// Rewrite placeholder keys in `portable` to the real ids now carried by
/// the persisted entity's block instances.
///
/// For every block container field not shared across locales: the i-th
/// persisted instance claims the key `new{i}` (1-based) if the portable
/// mapping still has it. Keys without a matching persisted instance are
/// left alone, and containers marked shared are never touched — each locale
/// owns an independent copy of those.
///
/// Idempotent: a second invocation finds no placeholder keys to rewrite and
/// changes nothing.
pub fn remap_placeholder_keys(
    entity: &ContentEntity,
    layout: &[FieldDescriptor],
    portable: &mut serde_json::Map<String, Value>,
) {
    for field in layout {
        if field.kind != FieldKind::BlockContainer || field.shared_across_locales {
            continue;
        }

        let Some(FieldValue::Blocks(blocks)) = entity.fields.get(&field.handle) else {
            continue;
        };
        let Some(Value::Object(container)) = portable.get_mut(&field.handle) else {
            continue;
        };

        // Positional match: the i-th persisted instance supersedes "new{i}".
        let mut renames = Vec::new();
        for (index, block) in blocks.iter().enumerate() {
            let placeholder = format!("new{}", index + 1);
            if let Some(id) = block.id {
                if container.contains_key(&placeholder) {
                    renames.push((placeholder, id.to_string()));
                }
            }
        }

        if renames.is_empty() {
            continue;
        }

        debug!(
            field = %field.handle,
            count = renames.len(),
            "remapping placeholder keys to persisted ids"
        );

        // Rebuild the container in place so every entry keeps its position.
        let old = std::mem::take(container);
        for (key, value) in old {
            let key = renames
                .iter()
                .find(|(from, _)| *from == key)
                .map(|(_, to)| to.clone())
                .unwrap_or(key);
            container.insert(key, value);
        }
    }
}
