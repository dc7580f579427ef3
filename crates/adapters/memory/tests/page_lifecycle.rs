//! Page-load scenarios driven through the in-memory adapters.
//!
//! A "page load" is a fresh [`InMemoryDocument`] (the markup) sharing one
//! [`InMemoryPreferenceStore`] (the origin's storage) with earlier loads.

use bstheme_adapter_memory::{InMemoryDocument, InMemoryPreferenceStore};
use bstheme_app::ports::DocumentRoot;
use bstheme_app::services::theme_controller::ThemeController;
use bstheme_domain::theme::{STORAGE_KEY, THEME_ATTRIBUTE, Theme};

fn load_page<'a>(
    store: &'a InMemoryPreferenceStore,
    markup: InMemoryDocument,
) -> ThemeController<&'a InMemoryPreferenceStore, InMemoryDocument> {
    let controller = ThemeController::new(store, markup);
    controller
        .initialize()
        .expect("in-memory initialize should not fail");
    controller
}

#[test]
fn should_keep_markup_default_on_first_visit() {
    let store = InMemoryPreferenceStore::new();
    let page = load_page(&store, InMemoryDocument::new());

    assert_eq!(page.document().attribute(THEME_ATTRIBUTE).unwrap(), None);
    assert_eq!(page.current().unwrap(), Theme::Light);
}

#[test]
fn should_restore_dark_on_next_load_after_toggle() {
    let store = InMemoryPreferenceStore::new();

    let first = load_page(&store, InMemoryDocument::new());
    assert_eq!(first.toggle().unwrap(), Theme::Dark);

    let second = load_page(&store, InMemoryDocument::new());
    assert_eq!(
        second
            .document()
            .attribute(THEME_ATTRIBUTE)
            .unwrap()
            .as_deref(),
        Some("dark")
    );
}

#[test]
fn should_fall_back_to_markup_after_switching_back_to_light() {
    let store = InMemoryPreferenceStore::new().with_entry(STORAGE_KEY, "dark");

    let first = load_page(&store, InMemoryDocument::new());
    assert_eq!(first.toggle().unwrap(), Theme::Light);

    let second = load_page(&store, InMemoryDocument::new());
    assert_eq!(second.document().attribute(THEME_ATTRIBUTE).unwrap(), None);
    assert_eq!(second.stored().unwrap(), Some(Theme::Light));
}

#[test]
fn should_ignore_corrupted_storage_and_recover_on_toggle() {
    let store = InMemoryPreferenceStore::new().with_entry(STORAGE_KEY, "d@rk");

    let page = load_page(
        &store,
        InMemoryDocument::new().with_attribute(THEME_ATTRIBUTE, "light"),
    );
    assert_eq!(
        page.document()
            .attribute(THEME_ATTRIBUTE)
            .unwrap()
            .as_deref(),
        Some("light")
    );
    assert_eq!(page.stored().unwrap(), None);

    page.toggle().unwrap();
    assert_eq!(page.stored().unwrap(), Some(Theme::Dark));
}

#[test]
fn should_only_touch_theme_entry() {
    let store = InMemoryPreferenceStore::new().with_entry("lang", "pt-BR");
    let page = load_page(&store, InMemoryDocument::new());
    page.toggle().unwrap();

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot["lang"], "pt-BR");
    assert_eq!(snapshot[STORAGE_KEY], "dark");
}
