//! Rendering of the combined markdown document

use std::fs;
use std::path::Path;

use crate::core::model::{CompileError, Document};
use crate::core::paths::{make_relative, normalize_path};

/// Separator placed between two document sections
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Heading line that introduces each document
pub fn heading(relative: &str) -> String {
    format!("# File: {}", relative)
}

/// Render one section: heading, blank line, right-trimmed content, newline.
pub fn render_section(relative: &str, content: &str) -> String {
    let content = normalize_newlines(content);
    format!("{}\n\n{}\n", heading(relative), content.trim_end())
}

/// Build the combined document from sorted documents.
///
/// Headings show each document's path relative to `display_root`; a document
/// outside it falls back to its own path.
pub fn build_compilation(
    documents: &[Document],
    display_root: &Path,
) -> Result<String, CompileError> {
    let mut sections = Vec::with_capacity(documents.len());

    for doc in documents {
        let relative =
            make_relative(&doc.path, display_root).unwrap_or_else(|| normalize_path(&doc.path));
        let content =
            fs::read_to_string(&doc.path).map_err(|e| CompileError::read(&doc.path, e))?;
        sections.push(render_section(&relative, &content));
    }

    let mut compiled = sections.join(SECTION_SEPARATOR);
    compiled.push('\n');
    Ok(compiled)
}

/// Translate CRLF and lone CR line endings to LF
fn normalize_newlines(content: &str) -> std::borrow::Cow<'_, str> {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n").into()
    } else {
        content.into()
    }
}
