//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::model::{CompileConfig, Destination, DEFAULT_DOCS_SUBDIR, STDOUT_SENTINEL};

/// langdoc - compile the language documentation into a single markdown file.
#[derive(Parser, Debug)]
#[command(name = "langdoc")]
#[command(
    author,
    version,
    about,
    long_about = r##"langdoc collects every *.md file under docs/10_language (recursively),
sorts them by path, and concatenates them into one markdown document.

Each file becomes a section headed by "# File: <path>" (relative to the
repository root); sections are separated by a horizontal rule.

Examples:
    langdoc
    langdoc build/language.md
    langdoc --root ~/src/project -
"##
)]
pub struct Cli {
    /// Output file ("-" for stdout).
    #[arg(
        value_name = "OUTPUT",
        default_value = STDOUT_SENTINEL,
        long_help = "Path of the combined markdown file.\n\n\
If omitted or \"-\", the document is written to stdout. Missing parent\n\
directories are created; an existing file is overwritten."
    )]
    pub output: Destination,

    /// Repository root containing the documentation tree.
    #[arg(
        long,
        value_name = "ROOT",
        long_help = "Repository root containing the documentation tree.\n\n\
Defaults to the install root: the parent of the directory holding the\n\
langdoc executable (e.g. <root>/bin/langdoc). Headings are relative to it."
    )]
    pub root: Option<PathBuf>,

    /// Documentation directory, relative to ROOT.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DOCS_SUBDIR)]
    pub docs_dir: PathBuf,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (list collected files on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter directive matching the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Resolve the install root from the executable location
fn install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the langdoc executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);

    exe.parent()
        .and_then(|bin| bin.parent())
        .map(|root| root.to_path_buf())
        .with_context(|| format!("Cannot derive install root from {}", exe.display()))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => install_root()?,
    };
    let root = root.canonicalize().unwrap_or(root);

    let config = CompileConfig::new(root)
        .with_docs_subdir(cli.docs_dir)
        .with_destination(cli.output);

    crate::flows::compile::run_compile(&config)?;
    Ok(())
}
