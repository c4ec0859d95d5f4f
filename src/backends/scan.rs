//! Markdown file collection
//!
//! Uses walkdir for recursive traversal of the documentation tree

use std::ffi::OsStr;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::model::{CompileError, Document};
use crate::core::paths::path_order;

/// File name suffix of collected documents
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Check whether a file name matches the markdown pattern
pub fn is_markdown(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(MARKDOWN_SUFFIX.as_bytes())
}

/// Collect every markdown file at or beneath `docs_dir`, sorted by relative path.
///
/// Symlinks to files are followed; symlinked directories are not descended.
/// An empty result is not an error here, but a markdown file whose path is
/// not valid UTF-8 is.
pub fn collect_markdown_files(docs_dir: &Path) -> Result<Vec<Document>, CompileError> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(docs_dir).min_depth(1) {
        let entry = entry?;

        if !is_markdown(entry.file_name()) || !entry.path().is_file() {
            continue;
        }

        let relative = relative_name(&entry)?;

        tracing::debug!(path = %relative, "collected markdown file");
        documents.push(Document::new(entry.path(), relative));
    }

    documents.sort_by(|a, b| path_order(&a.relative, &b.relative));
    Ok(documents)
}

/// The '/'-joined names of the entry's last `depth` components
fn relative_name(entry: &DirEntry) -> Result<String, CompileError> {
    let path = entry.path();

    let mut segments = path
        .components()
        .rev()
        .take(entry.depth())
        .map(|c| {
            c.as_os_str()
                .to_str()
                .ok_or_else(|| CompileError::NonUtf8Path(path.to_path_buf()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    segments.reverse();

    Ok(segments.join("/"))
}
