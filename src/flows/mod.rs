//! Flows module - Operations combining collection, rendering and output
//!
//! Provides:
//! - compile: Validate, collect, render and write the language docs

pub mod compile;
