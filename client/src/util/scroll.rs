//! Smooth scrolling on the browser window.
//!
//! Requires a browser environment; without the `hydrate` feature every scroll
//! reports `NoWindow`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::controller::{ScrollError, Viewport};

/// Viewport backed by `window` and `document.getElementById`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_origin(&mut self) -> Result<(), ScrollError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ScrollError::NoWindow)
        }
    }

    fn scroll_to_region(&mut self, id: &str) -> Result<(), ScrollError> {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(ScrollError::NoWindow)?;
            let region = document
                .get_element_by_id(id)
                .ok_or_else(|| ScrollError::MissingRegion(id.to_owned()))?;
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            region.scroll_into_view_with_scroll_into_view_options(&options);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ScrollError::NoWindow)
        }
    }
}
