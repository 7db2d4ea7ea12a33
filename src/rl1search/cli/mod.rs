//! # CLI Behavior
//!
//! This is **one possible UI client** for rl1search. It is the only place
//! that knows about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of
//! `rl1search`.
//!
//! ## Naked Execution (`rl1`)
//!
//! Running `rl1` with no arguments lists the first page of the current view.
//! Every filter, sort and column choice is persisted, so the bare command
//! shows whatever the last session left behind.
//!
//! ## Listing Flags Are Transient
//!
//! `rl1 list --search moon --type spell` narrows this one listing only.
//! Commands that change the view for good (`dlc`, `shields`, `sort`,
//! `columns`, `theme`, `stats`) write their result to the preferences file.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Tables, item details and messages via templates
//! - `setup`: Argument parsing via clap, grouped help
//! - `styles`: Named styles for each ending theme
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
