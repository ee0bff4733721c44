//! MCP server that exposes Redis commands as tools for LLM agents.
//!
//! Runs in one of two modes, chosen by the `LITE_MODE` environment variable:
//! normal mode loads the typed tool modules (string, hash, list, misc) while
//! lite mode loads only the raw pass-through module with `execute` and
//! `execute_raw`, which forward arbitrary commands, flatten nested argument
//! sequences, and decode binary replies to text recursively.

pub mod config;
pub mod connection;
pub mod error;
pub mod executor;
pub mod registry;
pub mod server;
pub mod tools;
pub mod value;
