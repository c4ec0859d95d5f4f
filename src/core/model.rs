//! Data model for a documentation compilation
//!
//! Defines the discovered Document, the output Destination, the explicit
//! CompileConfig handed to the entry point, and the CompileError taxonomy.

use std::convert::Infallible;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Documentation subtree scanned when no other is configured
pub const DEFAULT_DOCS_SUBDIR: &str = "docs/10_language";

/// CLI value meaning "write to standard output"
pub const STDOUT_SENTINEL: &str = "-";

/// One discovered markdown file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Absolute or root-joined path used to read the file
    pub path: PathBuf,

    /// Path relative to the scanned directory, using '/' as separator
    pub relative: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, relative: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            relative: relative.into(),
        }
    }
}

/// Where the compiled markdown goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl FromStr for Destination {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == STDOUT_SENTINEL {
            Ok(Destination::Stdout)
        } else {
            Ok(Destination::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Explicit inputs for a single compilation run
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// Repository root; headings are rendered relative to it
    pub root: PathBuf,

    /// Documentation subtree, relative to `root`
    pub docs_subdir: PathBuf,

    pub destination: Destination,
}

impl CompileConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            docs_subdir: PathBuf::from(DEFAULT_DOCS_SUBDIR),
            destination: Destination::Stdout,
        }
    }

    pub fn with_docs_subdir(mut self, docs_subdir: impl Into<PathBuf>) -> Self {
        self.docs_subdir = docs_subdir.into();
        self
    }

    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// The directory scanned for markdown files
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(&self.docs_subdir)
    }
}

/// What a successful run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileSummary {
    pub documents: usize,
    pub bytes: usize,
}

/// Every way a compilation run can fail
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Missing docs directory: {}", .0.display())]
    MissingDocsDir(PathBuf),

    #[error("No markdown files found under {}", .0.display())]
    NoMarkdownFiles(PathBuf),

    #[error("Failed to walk docs directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Markdown path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {destination}: {source}")]
    Write {
        destination: Destination,
        source: io::Error,
    },
}

impl CompileError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        CompileError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(destination: &Destination, source: io::Error) -> Self {
        CompileError::Write {
            destination: destination.clone(),
            source,
        }
    }
}
