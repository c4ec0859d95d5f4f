//! Compile flow - Turn the documentation tree into one markdown document
//!
//! Steps:
//! 1. Validate that the documentation directory exists
//! 2. Collect markdown files and reject an empty tree
//! 3. Render every document into a single string
//! 4. Write the result to stdout or the destination file
//!
//! Nothing is written unless steps 1-3 succeed.

use crate::backends::output::write_output;
use crate::backends::scan::collect_markdown_files;
use crate::core::model::{CompileConfig, CompileError, CompileSummary};
use crate::core::render::build_compilation;

/// Validate, collect, and compile without writing anything
pub fn compile_docs(config: &CompileConfig) -> Result<(String, usize), CompileError> {
    let docs_dir = config.docs_dir();

    if !docs_dir.is_dir() {
        return Err(CompileError::MissingDocsDir(docs_dir));
    }

    let documents = collect_markdown_files(&docs_dir)?;
    if documents.is_empty() {
        return Err(CompileError::NoMarkdownFiles(docs_dir));
    }

    let compiled = build_compilation(&documents, &config.root)?;
    Ok((compiled, documents.len()))
}

/// Run the compile flow end to end
pub fn run_compile(config: &CompileConfig) -> Result<CompileSummary, CompileError> {
    let (compiled, documents) = compile_docs(config)?;

    write_output(&compiled, &config.destination)?;

    let summary = CompileSummary {
        documents,
        bytes: compiled.len(),
    };
    tracing::info!(
        documents = summary.documents,
        bytes = summary.bytes,
        destination = %config.destination,
        "compiled language docs"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Destination;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_doc(root: &Path, relative: &str, content: &str) {
        let path = root.join("docs/10_language").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_docs_dir() {
        let temp = tempdir().unwrap();
        let config = CompileConfig::new(temp.path());

        match compile_docs(&config) {
            Err(CompileError::MissingDocsDir(dir)) => {
                assert_eq!(dir, temp.path().join("docs/10_language"))
            }
            other => panic!("expected missing dir, got {:?}", other),
        }
    }

    #[test]
    fn test_docs_path_is_a_file() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/10_language"), "oops").unwrap();

        let err = compile_docs(&CompileConfig::new(temp.path())).unwrap_err();
        assert!(matches!(err, CompileError::MissingDocsDir(_)));
    }

    #[test]
    fn test_empty_docs_dir() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs/10_language/sub")).unwrap();
        fs::write(temp.path().join("docs/10_language/sub/notes.txt"), "x").unwrap();

        let err = compile_docs(&CompileConfig::new(temp.path())).unwrap_err();
        assert!(matches!(err, CompileError::NoMarkdownFiles(_)));
    }

    #[test]
    fn test_headings_relative_to_root() {
        let temp = tempdir().unwrap();
        write_doc(temp.path(), "a/one.md", "Hello\n\n\n");
        write_doc(temp.path(), "b/two.md", "World");

        let (compiled, count) = compile_docs(&CompileConfig::new(temp.path())).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            compiled,
            "# File: docs/10_language/a/one.md\n\nHello\n\n\n---\n\n\
# File: docs/10_language/b/two.md\n\nWorld\n\n"
        );
    }

    #[test]
    fn test_custom_docs_subdir() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("manual")).unwrap();
        fs::write(temp.path().join("manual/index.md"), "Index").unwrap();

        let config = CompileConfig::new(temp.path()).with_docs_subdir("manual");
        let (compiled, _) = compile_docs(&config).unwrap();
        assert_eq!(compiled, "# File: manual/index.md\n\nIndex\n\n");
    }

    #[test]
    fn test_run_compile_writes_destination() {
        let temp = tempdir().unwrap();
        write_doc(temp.path(), "intro.md", "Intro\n");
        let out = temp.path().join("out/nested/language.md");

        let config = CompileConfig::new(temp.path())
            .with_destination(Destination::File(out.clone()));
        let summary = run_compile(&config).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, "# File: docs/10_language/intro.md\n\nIntro\n\n");
        assert_eq!(summary.documents, 1);
        assert_eq!(summary.bytes, written.len());
    }

    #[test]
    fn test_run_compile_leaves_destination_on_failure() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("existing.md");
        fs::write(&out, "previous\n").unwrap();

        let config = CompileConfig::new(temp.path())
            .with_destination(Destination::File(out.clone()));
        assert!(run_compile(&config).is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "previous\n");
    }
}
