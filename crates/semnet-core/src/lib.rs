//! semnet-core: Shared types, configuration, and error handling for semnet.
//!
//! This crate provides the foundational types used across all semnet components:
//! - Node, fact, and conflict types returned by graph operations
//! - Graph snapshots exchanged with rendering and CLI consumers
//! - The well-known relation and kind vocabulary
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::NetConfig;
pub use error::CoreError;
pub use types::{Conflict, Fact, GraphSnapshot, Node};
