//! # bstheme-adapter-web
//!
//! Browser adapter, compiled to WebAssembly.
//!
//! ## Responsibilities
//! - Implement the `bstheme-app` ports over `web-sys`:
//!   - `LocalStorage`: `PreferenceStore` over `window.localStorage`
//!   - `DocumentElement`: `DocumentRoot` over `document.documentElement`
//! - Restore the stored theme as soon as the module is instantiated
//! - Export `toggleTheme()` for the page's toggle control
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { toggleTheme, bindToggleButton } from './bstheme_adapter_web.js';
//!
//! await init();                        // restores a stored dark theme
//! bindToggleButton('theme-toggle');    // or call toggleTheme() yourself
//! ```
//!
//! ## Dependency rule
//! Depends on `bstheme-app` (for port traits) and `bstheme-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod document;
mod error;
mod storage;

use bstheme_app::services::theme_controller::ThemeController;
use bstheme_domain::error::ThemeError;
use bstheme_domain::theme::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub use document::DocumentElement;
pub use error::WebError;
pub use storage::LocalStorage;

/// Controller wired to the live page.
pub type BrowserController = ThemeController<LocalStorage, DocumentElement>;

/// Build a controller over the current window's storage and document.
///
/// # Errors
///
/// Returns [`ThemeError::Storage`] when `localStorage` is unavailable and
/// [`ThemeError::Document`] when there is no document root.
pub fn browser_controller() -> Result<BrowserController, ThemeError> {
    let store = LocalStorage::from_window().map_err(WebError::into_storage)?;
    let document = DocumentElement::from_window().map_err(WebError::into_document)?;
    Ok(ThemeController::new(store, document))
}

/// `err` and its whole source chain, joined with `": "`.
fn error_message(err: &ThemeError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn to_js_error(err: &ThemeError) -> JsError {
    JsError::new(&error_message(err))
}

fn label_button(button: &web_sys::Element, theme: Theme) -> Result<(), JsError> {
    button.set_text_content(Some(theme.icon()));
    button
        .set_attribute("aria-pressed", if theme.is_dark() { "true" } else { "false" })
        .map_err(|err| JsError::new(&WebError::from_js(&err).to_string()))
}

/// Module start hook: re-apply a stored dark preference.
///
/// # Errors
///
/// Throws if storage or the document is unreachable.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsError> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    browser_controller()
        .and_then(|controller| controller.initialize())
        .map_err(|err| to_js_error(&err))
}

/// Flip between light and dark, returning the new theme name.
///
/// # Errors
///
/// Throws if the attribute cannot be set or the preference cannot be stored.
/// A failed store write still leaves the new attribute applied.
#[wasm_bindgen(js_name = "toggleTheme")]
pub fn toggle_theme() -> Result<String, JsError> {
    browser_controller()
        .and_then(|controller| controller.toggle())
        .map(|theme| theme.as_str().to_string())
        .map_err(|err| to_js_error(&err))
}

/// Name of the theme the page currently shows.
///
/// # Errors
///
/// Throws if the document is unreachable.
#[wasm_bindgen(js_name = "currentTheme")]
pub fn current_theme() -> Result<String, JsError> {
    browser_controller()
        .and_then(|controller| controller.current())
        .map(|theme| theme.as_str().to_string())
        .map_err(|err| to_js_error(&err))
}

/// Turn the element with id `element_id` into the theme toggle.
///
/// Its text becomes the sun or moon glyph for the shown theme, `aria-pressed`
/// is `"true"` while dark, and every click toggles and relabels it. A failed
/// toggle is rethrown from the click handler. The listener lives as long as
/// the page.
///
/// # Errors
///
/// Throws if the element does not exist or the listener cannot be attached.
#[wasm_bindgen(js_name = "bindToggleButton")]
pub fn bind_toggle_button(element_id: &str) -> Result<(), JsError> {
    let controller = browser_controller().map_err(|err| to_js_error(&err))?;
    let button = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(element_id))
        .ok_or_else(|| JsError::new(&format!("no element with id {element_id:?}")))?;

    let shown = controller.current().map_err(|err| to_js_error(&err))?;
    label_button(&button, shown)?;

    let label = button.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        let theme = controller
            .toggle()
            .unwrap_or_else(|err| wasm_bindgen::throw_str(&error_message(&err)));
        if let Err(err) = label_button(&label, theme) {
            wasm_bindgen::throw_val(err.into());
        }
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| JsError::new(&WebError::from_js(&err).to_string()))?;
    on_click.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_error_chain_into_one_message() {
        let err = WebError::Js("QuotaExceededError".to_string()).into_storage();
        assert_eq!(
            error_message(&err),
            "preference store error: javascript error: QuotaExceededError"
        );
    }

    #[test]
    fn should_report_plain_message_without_source() {
        let err = WebError::NoDocumentElement.into_document();
        assert_eq!(
            error_message(&err),
            "document error: document has no root element"
        );
    }
}
