#![cfg(not(feature = "csr"))]

use behavior::theme::{Theme, ThemeStore};

use super::*;

#[test]
fn native_storage_is_unavailable() {
    assert_eq!(LocalStorage.get("theme"), Err(StorageError::Unavailable));
    assert_eq!(LocalStorage.set("theme", "dark"), Err(StorageError::Unavailable));
}

#[test]
fn theme_store_over_unavailable_storage_defaults_to_light() {
    let mut store = ThemeStore::new(LocalStorage, "theme");
    assert_eq!(store.get_preference(), Theme::Light);
    let (next, written) = store.toggle(Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert!(written.is_err());
}
