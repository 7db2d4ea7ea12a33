//! # rl1 CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! cli/setup.rs      clap argument parsing, grouped help
//! cli/commands.rs   logging setup, context wiring, dispatch
//! cli/render.rs     CmdResult → text via minijinja templates
//! cli/styles.rs     named console styles derived from the active theme
//! cli/templates/    the templates themselves, embedded with include_str!
//! ```
//!
//! Everything from `rl1search::api` inward is UI agnostic. Rendering is
//! tested with canned data (see `cli/render.rs`); end-to-end behavior is
//! covered by `tests/cli.rs`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
