//! Page controller: owns theme and menu state and dispatches navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`BrowserController`] and provides it through context as
//! an `RwSignal`. Components read [`PageController::state`] and call the
//! named mutations; nothing else writes theme or menu state.
//!
//! DESIGN
//! ======
//! Browser effects sit behind three traits (`PreferenceStore`,
//! `ThemeSurface`, `Viewport`) so the state machines run unchanged in native
//! tests and during server rendering. Every theme mutation ends in a single
//! commit step that applies the visual flag and writes the preference slot.
//!
//! ERROR HANDLING
//! ==============
//! Storage and scroll failures are logged and swallowed. After the first
//! storage failure the controller stops touching storage for the session and
//! keeps theme state in memory only.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use thiserror::Error;

use super::menu::MenuState;
use super::nav::{self, NAV_TARGETS, NavTarget, ScrollTarget};
use super::theme::{STORAGE_KEY, Theme};
use crate::util::dark_mode::{DocumentTheme, LocalStorage};
use crate::util::scroll::WindowViewport;

/// Failure of the persisted key-value store.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference read failed: {0}")]
    Read(String),
    #[error("preference write failed: {0}")]
    Write(String),
}

/// Failure to perform a scroll.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no region with id `{0}`")]
    MissingRegion(String),
    #[error("no browser window")]
    NoWindow,
}

/// Synchronous key-value slot that survives reloads.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Document-level presentation context that carries the visual-mode flag.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

/// Smooth-scrolling viewport.
pub trait Viewport {
    fn scroll_to_origin(&mut self) -> Result<(), ScrollError>;
    fn scroll_to_region(&mut self, id: &str) -> Result<(), ScrollError>;
}

/// Read-only snapshot of the controller's state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub menu: MenuState,
}

pub struct PageController<S, D, V> {
    state: ViewState,
    targets: &'static [NavTarget],
    store: S,
    surface: D,
    viewport: V,
    persist: bool,
    initialized: bool,
}

/// Controller wired to `localStorage`, the `<html>` element, and `window`.
pub type BrowserController = PageController<LocalStorage, DocumentTheme, WindowViewport>;

impl BrowserController {
    pub fn browser() -> Self {
        Self::new(LocalStorage, DocumentTheme, WindowViewport, NAV_TARGETS)
    }
}

impl<S, D, V> PageController<S, D, V>
where
    S: PreferenceStore,
    D: ThemeSurface,
    V: Viewport,
{
    /// Build a controller in its initial state (light, menu closed).
    ///
    /// Storage is not read until [`initialize`](Self::initialize).
    pub fn new(store: S, surface: D, viewport: V, targets: &'static [NavTarget]) -> Self {
        Self {
            state: ViewState::default(),
            targets,
            store,
            surface,
            viewport,
            persist: true,
            initialized: false,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn targets(&self) -> &'static [NavTarget] {
        self.targets
    }

    /// Read the persisted preference once and apply dark mode if it was saved.
    ///
    /// Later calls are no-ops.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let stored = match self.store.load(STORAGE_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("theme preference unavailable, using in-memory state: {e}");
                self.persist = false;
                None
            }
        };

        self.state.theme = Theme::from_stored(stored.as_deref());
        if self.state.theme.is_dark() {
            self.surface.apply(Theme::Dark);
        }
        log::debug!("theme initialized: {}", self.state.theme.as_str());
    }

    /// Flip between light and dark, then commit.
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        self.commit_theme();
    }

    /// Close the menu, then scroll to `target_id`.
    ///
    /// Any identifier may be requested; one with no matching region in the
    /// document is logged and ignored.
    pub fn navigate_to(&mut self, target_id: &str) {
        self.state.menu = MenuState::Closed;

        let scrolled = match nav::resolve(target_id) {
            ScrollTarget::Origin => self.viewport.scroll_to_origin(),
            ScrollTarget::Region(id) => self.viewport.scroll_to_region(id),
            ScrollTarget::Unknown => {
                log::debug!("ignoring blank navigation target");
                return;
            }
        };
        if let Err(e) = scrolled {
            log::warn!("navigation to `{target_id}` failed: {e}");
        }
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu = self.state.menu.toggled();
    }

    fn commit_theme(&mut self) {
        let theme = self.state.theme;
        self.surface.apply(theme);
        if !self.persist {
            return;
        }
        if let Err(e) = self.store.save(STORAGE_KEY, theme.as_str()) {
            log::warn!("theme preference not saved, using in-memory state: {e}");
            self.persist = false;
        }
    }
}
