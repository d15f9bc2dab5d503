//! Browser adapters for the page controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic so the controller stays testable natively.

pub mod dark_mode;
pub mod scroll;
