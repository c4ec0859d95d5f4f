//! Output writer - the only place that writes

use std::fs;
use std::io::{self, Write};

use crate::core::model::{CompileError, Destination};

/// Write compiled markdown to stdout or to a file, creating parent directories.
pub fn write_output(compiled: &str, destination: &Destination) -> Result<(), CompileError> {
    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(compiled.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|e| CompileError::write(destination, e))
        }
        Destination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CompileError::write(destination, e))?;
            }
            fs::write(path, compiled).map_err(|e| CompileError::write(destination, e))
        }
    }
}
