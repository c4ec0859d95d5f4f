//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Data model and error kinds (Document, Destination, CompileError)
//! - Path normalization and ordering
//! - Rendering of the combined markdown document

pub mod model;
pub mod paths;
pub mod render;
