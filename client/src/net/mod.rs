//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls through the server's `/api` proxy and
//! `types` defines the request/response DTOs that are not already part of
//! the `workflow` model.

pub mod api;
pub mod types;
