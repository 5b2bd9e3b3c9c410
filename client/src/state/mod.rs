//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split per view (`auth`, `login`, `lost_items`). Each module is a
//! plain struct with explicit transitions so it can be tested without a
//! reactive runtime; pages wrap them in `RwSignal`s.

pub mod auth;
pub mod login;
pub mod lost_items;
