//! # Chefbook CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, while this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/chefbookapp/`: UI-agnostic core (fields, records, stores, services)
//! - `crates/chefbook/`: this CLI, a client of `chefbookapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/chefbook/src/cli/)                       │
//! │  - clap argument parsing (args.rs)                          │
//! │  - config + store wiring (mod.rs)                           │
//! │  - command handlers and client-side rules (handlers.rs)     │
//! │  - terminal text (render.rs)                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Services (chefbookapp::service)                            │
//! │  - CRUD, lookups, birthdays report, booking queries         │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Core logic is unit tested inside `chefbookapp` against in-memory stores.
//! - Handlers are tested by parsing real argument lists and dispatching them
//!   to an `App` built on in-memory stores.
//! - `tests/cli_e2e.rs` runs the binary against a temporary data directory.

mod cli;

use colored::*;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
