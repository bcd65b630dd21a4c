//! # Proverbs Architecture
//!
//! Proverbs serves a curated, read-only collection of Go proverbs. It is a
//! **library with two front ends**: a website with a JSON API, and a terminal
//! client. Both talk to the same core and neither contains business logic.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │  Web Layer (web/)            │   │  CLI Layer (cli/, main.rs)   │
//! │  - axum routes, JSON, HTML   │   │  - clap parsing, templates   │
//! │  - status codes live here    │   │  - stdout, exit codes        │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!                  │                                 │
//!                  └────────────────┬────────────────┘
//!                                   ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns the loaded collection                  │
//! └─────────────────────────────────────────────────────────────┘
//!                                   │
//!                                   ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One read operation per module, pure functions            │
//! └─────────────────────────────────────────────────────────────┘
//!                                   │
//!                                   ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Collection, loaders (builtin, export files, examples)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Global State
//!
//! The collection is loaded once at startup by a
//! [`CollectionSource`](store::CollectionSource) and handed to
//! [`ProverbsApi`](api::ProverbsApi), which owns it from then on. Randomness is
//! passed in by the caller. Nothing in the core reads the environment, writes
//! to stdout or picks an HTTP status.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: the bulk of the tests, against small fixtures from
//!    `test_utils`.
//! 2. **API**: dispatch only.
//! 3. **Web**: requests driven through the router with `tower::ServiceExt`.
//! 4. **CLI**: end-to-end runs of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Query logic, one module per operation
//! - [`store`]: The collection and the loaders that build it
//! - [`model`]: Core data types (`Proverb`, `ProverbEntry`, `Category`, `Source`)
//! - [`web`]: HTTP router, JSON API and HTML pages
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod web;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
