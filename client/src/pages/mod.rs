//! Page-level components.

pub mod portfolio;
