//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Collaborators arrive as props from `App`.

pub mod login;
pub mod lost_items;
pub mod session_expired;
