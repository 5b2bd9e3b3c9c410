//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take signals and callbacks as props
//! and leave state transitions to the owning page.

pub mod filter_panel;
pub mod item_card;
pub mod pagination;
