//! # Stacks Architecture
//!
//! Stacks is a small library-catalog manager: book records held in memory, edited
//! through an interactive menu, and written back to JSON documents after every
//! operation. The interactive shell lives in the binary; this library holds
//! everything else and never touches stdout or stdin.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, runs the menu loop, renders tables/markers │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - LibraryApi owns the store and the catalog                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Id assignment, lookup, add/list/update/delete, load/save │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and state owner
//! - [`commands`]: Record operations and persistence of the catalog
//! - [`store`]: Document storage abstraction and implementations
//! - [`model`]: `Book` and `Catalog`
//! - [`features`]: Main-menu features and their handlers
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod store;
