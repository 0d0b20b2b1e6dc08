//! # newsdesk Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, the HTTP
//! API in `src/server/` and the remote reader in `src/reader.rs`. This file
//! only starts the runtime, invokes `cli::run()` and handles process
//! termination.
//!
//! ## Workspace Structure
//!
//! - `crates/newsdeskapp/`: core library with transport-agnostic logic
//! - `crates/newsdesk/`: this binary, depends on the library
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Clients (crates/newsdesk/src/)                              │
//! │  - cli/: clap parsing, config loading, text rendering        │
//! │  - server/: axum routes, body parsing, auth, JSON envelope   │
//! │  - reader.rs: HTTP fetch with primary/secondary fallback     │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/newsdeskapp/src/api.rs)                   │
//! │  - Authorizes callers, validates input                       │
//! │  - Dispatches to command modules                             │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/newsdeskapp/src/commands/*)           │
//! │  - Business logic + data access                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Commands and API**: unit tests against `InMemoryStore` in the library.
//! - **Server**: router tests driving the axum `Router` with `tower::oneshot`.
//! - **Reader**: real local servers on ephemeral ports.
//! - **CLI**: end-to-end tests in `tests/` running the built binary.

mod cli;
mod reader;
mod server;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
