use super::*;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("quota exceeded".into()))
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_current_and_legacy_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark-theme"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" light-theme "), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn theme_icon_class_tracks_theme() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
}

// =============================================================
// ThemeStore
// =============================================================

#[test]
fn get_preference_defaults_to_light_when_absent() {
    let store = ThemeStore::new(MemoryStore::default(), "theme");
    assert_eq!(store.get_preference(), Theme::Light);
}

#[test]
fn get_preference_defaults_to_light_for_unknown_value() {
    let mut mem = MemoryStore::default();
    mem.set("theme", "neon").unwrap();
    let store = ThemeStore::new(mem, "theme");
    assert_eq!(store.get_preference(), Theme::Light);
}

#[test]
fn preference_survives_simulated_reload() {
    let mut store = ThemeStore::new(MemoryStore::default(), "theme");
    let (next, written) = store.toggle(Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert!(written.is_ok());

    let reloaded = ThemeStore::new(store.into_inner(), "theme");
    assert_eq!(reloaded.get_preference(), Theme::Dark);
}

#[test]
fn setting_same_preference_twice_is_idempotent() {
    let mut store = ThemeStore::new(MemoryStore::default(), "theme");
    store.set_preference(Theme::Dark).unwrap();
    store.set_preference(Theme::Dark).unwrap();
    assert_eq!(store.get_preference(), Theme::Dark);
    assert_eq!(store.into_inner().get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn unavailable_store_degrades_to_light_and_reports_write_failure() {
    let mut store = ThemeStore::new(BrokenStore, "theme");
    assert_eq!(store.get_preference(), Theme::Light);

    let (next, written) = store.toggle(Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(written, Err(StorageError::Access("quota exceeded".into())));
}
