//! Engine-level tests for permission token translation.

mod common;

use common::MemoryStore;
use content_migrate::{EnvCapabilities, MigrateError, PermissionTranslator, ResourceKind};

fn populated_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_permission_target(ResourceKind::Volume, "site-assets", 7, "vol-uid-7");
    store.add_permission_target(ResourceKind::Section, "news", 3, "sec-uid-3");
    store.add_permission_target(ResourceKind::CategoryGroup, "topics", 9, "cat-uid-9");
    store.add_permission_target(ResourceKind::GlobalSet, "footer", 12, "set-uid-12");
    store
}

fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn handle_to_id_in_id_mode() {
    let store = populated_store();
    let translator = PermissionTranslator::new(&store, EnvCapabilities::id_addressing());

    let translated = translator
        .to_store_ids(&tokens(&[
            "volume:site-assets",
            "editentries:news",
            "editcategories:topics",
            "editglobalset:footer",
        ]))
        .unwrap();

    assert_eq!(
        translated,
        tokens(&[
            "volume:7",
            "editentries:3",
            "editcategories:9",
            "editglobalset:12",
        ])
    );
}

#[test]
fn handle_to_uid_in_uid_mode() {
    let store = populated_store();
    let translator = PermissionTranslator::new(&store, EnvCapabilities::uid_addressing());

    let translated = translator
        .to_store_ids(&tokens(&["volume:site-assets", "createentrydrafts:news"]))
        .unwrap();

    assert_eq!(
        translated,
        tokens(&["volume:vol-uid-7", "createentrydrafts:sec-uid-3"])
    );
}

#[test]
fn translation_round_trips() {
    let store = populated_store();

    for capabilities in [
        EnvCapabilities::id_addressing(),
        EnvCapabilities::uid_addressing(),
    ] {
        let translator = PermissionTranslator::new(&store, capabilities);
        let original = tokens(&["volume:site-assets", "editentries:news"]);

        let store_form = translator.to_store_ids(&original).unwrap();
        let back = translator.to_handles(&store_form).unwrap();
        assert_eq!(back, original);
    }
}

#[test]
fn tokens_without_separator_or_known_kind_pass_through() {
    let store = populated_store();
    let translator = PermissionTranslator::new(&store, EnvCapabilities::id_addressing());

    let raw = tokens(&["accessCp", "performUpdates", "utility:clear-caches"]);
    assert_eq!(translator.to_store_ids(&raw).unwrap(), raw);
    assert_eq!(translator.to_handles(&raw).unwrap(), raw);
}

#[test]
fn unresolvable_targets_pass_through() {
    let store = populated_store();
    let translator = PermissionTranslator::new(&store, EnvCapabilities::id_addressing());

    let raw = tokens(&["volume:missing-volume", "editentries:999"]);
    assert_eq!(translator.to_store_ids(&raw).unwrap(), raw);
    assert_eq!(translator.to_handles(&raw).unwrap(), raw);
}

#[test]
fn non_numeric_identifier_in_id_mode_passes_through() {
    let store = populated_store();
    let translator = PermissionTranslator::new(&store, EnvCapabilities::id_addressing());

    let raw = tokens(&["volume:not-a-number"]);
    assert_eq!(translator.to_handles(&raw).unwrap(), raw);
}

#[test]
fn store_failure_is_fatal() {
    let mut store = populated_store();
    store.unreachable = true;
    let translator = PermissionTranslator::new(&store, EnvCapabilities::id_addressing());

    let err = translator
        .to_store_ids(&tokens(&["volume:site-assets"]))
        .unwrap_err();
    assert!(matches!(err, MigrateError::Store { .. }));
}
