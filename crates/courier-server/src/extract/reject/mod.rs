//! Enhanced request extractors with improved error handling.
//!
//! These extractors are designed to be drop-in replacements for their
//! standard Axum counterparts while providing detailed error context.

pub mod enhanced_json;
pub mod enhanced_path;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
