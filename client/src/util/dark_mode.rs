//! Browser-backed theme persistence and the document-level dark flag.
//!
//! `LocalStorage` reads and writes the preference slot in `localStorage`.
//! `DocumentTheme` toggles the `dark` class (and mirrors a `data-theme`
//! attribute) on the `<html>` element. Both require a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `hydrate` feature storage reports itself unavailable and the
//! document flag is a no-op, which keeps server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::controller::{PreferenceStore, StorageError, ThemeSurface};
use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark";

/// Preference store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Read(format!("{e:?}"))),
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Visual-mode flag on the document root element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeSurface for DocumentTheme {
    fn apply(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                log::debug!("no document element; theme flag not applied");
                return;
            };
            let classes = root.class_list();
            let toggled = if theme.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
            if let Err(e) = toggled.and_then(|()| root.set_attribute("data-theme", theme.as_str())) {
                log::warn!("failed to apply theme flag: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}
