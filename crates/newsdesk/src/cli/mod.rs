//! # CLI Behavior
//!
//! The `newsdesk` binary has three jobs:
//!
//! - `newsdesk serve`: run the HTTP API over the file store
//! - `newsdesk read <ID>`: fetch one article from a running API (falling back
//!   to the secondary URL) and print it rendered
//! - `newsdesk categories`: print the category registry
//!
//! Configuration comes from `--config FILE`, then `NEWSDESK_*` environment
//! variables, then `serve`'s own flags. See [`newsdeskapp::config`].
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and context setup
//! - `render`: plain-text output
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
