//! MCP tools over the prompt platform REST API.
//!
//! One dispatcher serves two variants: `authenticated` (read and write on
//! behalf of a configured user) and `public` (read-only over public and
//! featured prompts). Every tool call returns a [`ResultEnvelope`].

pub mod backend;
pub mod cli;
pub mod config;
pub mod envelope;
pub mod error;
pub mod stdio;
pub mod tools;

pub use config::{AdapterConfig, Variant};
pub use envelope::ResultEnvelope;
pub use error::AdapterError;
pub use tools::{Dispatcher, ToolId};
