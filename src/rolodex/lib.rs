//! # Rolodex Architecture
//!
//! Rolodex keeps contact names and their phone numbers in a plain text file. The
//! library holds all of the logic; the `rolodex` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive menu              │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! │  - Turns 1-based menu indexes into phone values             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One session: load on open, save on close (or drop)       │
//! │  - Owns the AddressBook, dispatches to commands             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Caller-level policy (checked create, duplicate phones)   │
//! │  - Returns CmdResult with records and messages              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, book.rs, codec/)                           │
//! │  - Record and AddressBook mutation rules                    │
//! │  - The Name;Phone file format, encode and decode            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns Rust values. It never prints,
//! never prompts, and never exits the process. "Not found" and friends are
//! [`error::RolodexError`] values or warning messages the UI chooses how to show.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`commands`]: Business logic for each operation
//! - [`book`]: `AddressBook` and file load/save
//! - [`model`]: `Record`
//! - [`codec`]: The contacts file format
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
