//! Enhanced HTTP request extractors with improved error handling.
//!
//! This module provides custom Axum extractors that are drop-in
//! replacements for their standard counterparts while producing detailed,
//! user-friendly error responses:
//!
//! - [`Json`]: JSON body extraction with better error messages
//! - [`Path`]: path parameter extraction with detailed error context

pub mod reject;

pub use crate::extract::reject::{Json, Path};
