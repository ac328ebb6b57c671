//! # Showcase Architecture
//!
//! Showcase is a tiny content-management backend for a landing page. The page
//! is built from two collections, **products** and **page sections**, each
//! stored as a flat JSON array on disk. An admin area creates, edits and
//! deletes entries.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Web Layer (web/) and CLI (main.rs)                         │
//! │  - Routes, form extraction, HTML rendering, redirects       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns the store and the service options      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection Services (commands/*.rs), ids.rs                │
//! │  - load → mutate → save, id assignment, field semantics     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore over a StorageBackend (FsBackend, MemBackend)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is held in memory between requests: each operation reloads the
//! document, and each mutation rewrites it in full. There is no locking and
//! no authentication; the admin area is meant for a few trusted people.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Product and section services, doctor report
//! - [`ids`]: Identifier assignment
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Record types (`Product`, `Section`) and `Collection`
//! - [`config`]: Configuration file
//! - [`web`]: axum router, handlers and templates
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
pub mod web;
