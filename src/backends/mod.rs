//! Backends module - File system input and output
//!
//! Provides:
//! - scan: Markdown file collection with walkdir
//! - output: Writing to stdout or a destination file

pub mod output;
pub mod scan;
