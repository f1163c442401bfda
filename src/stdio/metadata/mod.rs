//! Static tool metadata for both variants.
//!
//! Descriptors are built once from the typed argument structs and never
//! change for the lifetime of the process.

mod category_metadata;
mod types;

pub use category_metadata::tool_metadata;
pub use types::{ToolMetadata, build_schema};
