//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each state machine (`theme`, `menu`) and the navigation table (`nav`) is a
//! small plain-data module. `controller` owns one instance of each and is the
//! only place they are mutated.

pub mod controller;
pub mod menu;
pub mod nav;
pub mod theme;
