//! # newsdeskapp
//!
//! The core of the newsdesk publishing backend: an article store, the
//! validation and authorization boundary in front of it, markdown rendering,
//! and the static category registry.
//!
//! ## Layers
//!
//! ```text
//! transport (HTTP, CLI)      -- newsdesk binary crate
//!        │
//!        ▼
//! api::NewsApi               -- authorization, validation, dispatch
//!        │
//!        ▼
//! commands::*                -- business logic, returns CmdResult
//!        │
//!        ▼
//! store::DataStore           -- ArticleStore over a StorageBackend
//! ```
//!
//! Each layer only talks to the one below it. The binary never touches the
//! store directly, and commands never see unvalidated input.

pub mod api;
pub mod categories;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
