//! Client-side state held in Leptos context signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data with small transition methods so pages can
//! `update` them inside signals and tests can drive them without a runtime.

pub mod applications;
pub mod auth;
pub mod form;
