//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `service` wraps them behind injectable
//! collaborator traits, `types` defines the wire schema and `error` the
//! failure taxonomy shown to users.

pub mod api;
pub mod error;
pub mod service;
pub mod types;
