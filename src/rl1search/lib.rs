//! # rl1search Architecture
//!
//! rl1search answers one question: *which Elden Ring weapons and spells can
//! this character use?* It is a **UI-agnostic library** with a thin terminal
//! client (`rl1`), not a CLI that happens to have some library code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (str=30, damage-type → typed values)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation each, returns CmdResult + messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Owns attribute/filter/sort/page/column/theme state       │
//! │  - Recomputes filtered → sorted → page after every change   │
//! └─────────────────────────────────────────────────────────────┘
//!                │                               │
//!                ▼                               ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Engines                      │ │  Preferences (prefs/)     │
//! │  attributes, filter, sort,    │ │  typed keys over the      │
//! │  paginate over the Catalog    │ │  PrefStore trait (store/) │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## The Pipeline
//!
//! The catalog is immutable once loaded. Everything the user sees is a pure
//! function of it and the session state:
//!
//! 1. **Filter** ([`filter`]): data type, categories, search, attribute
//!    requirements, damage/attack/status selections, DLC and shield toggles.
//! 2. **Sort** ([`sort`]): one stable key, ascending or descending.
//! 3. **Paginate** ([`paginate`]): fixed-size, 1-based pages.
//!
//! None of these steps can fail. Errors only come from the edges: reading a
//! catalog directory, loading config, persisting preferences.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types and never writes to stdout/stderr. Diagnostics go through
//! `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`session`]: The context object holding all mutable state
//! - [`catalog`]: Bundled and on-disk item data, permissive ingestion
//! - [`model`]: Core data types (`Item`, `DataType`) and label vocabularies
//! - [`attributes`], [`filter`], [`sort`], [`paginate`]: The pipeline engines
//! - [`prefs`]: Typed preferences with defaults and legacy migration
//! - [`store`]: Preference storage abstraction and implementations
//! - [`theme`]: The six ending themes
//! - [`config`]: Configuration management
//! - [`init`]: Startup wiring
//! - [`error`]: Error types
//! - `cli`: Argument parsing, templated rendering and shell completions for the binary (not part of the lib API)

pub mod api;
pub mod attributes;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod paginate;
pub mod prefs;
pub mod session;
pub mod sort;
pub mod store;
pub mod text;
pub mod theme;
