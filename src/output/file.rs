//! Append-only log file.

use super::Sink;
use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Appends every line to one file, opened once at construction.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Opens (or creates) `path` for appending. A leading `~` is expanded and
    /// missing parent directories are created.
    ///
    /// # Errors
    /// Returns an error if the path is not valid UTF-8 where expansion needs it,
    /// or if the directory or file cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = resolve_path(path.as_ref())?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            match fs::create_dir_all(parent) {
                Ok(()) => {
                    internal::debug(format_args!("Created directory: {}", parent.display()));
                }
                Err(e) => {
                    internal::error(format_args!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ));
                    return Err(e.into());
                }
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        internal::debug(format_args!("Opened log file: {}", path.display()));

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// The resolved path this sink appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(bytes)?;
        Ok(bytes.len())
    }

    fn flush(&self) -> io::Result<()> {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

fn resolve_path(path: &Path) -> Result<PathBuf, crate::Error> {
    let Some(raw) = path.to_str() else {
        if path.starts_with("~") {
            return Err(crate::Error::InvalidPath(path.display().to_string()));
        }
        return Ok(path.to_path_buf());
    };

    if raw.is_empty() {
        return Err(crate::Error::InvalidPath("empty log file path".to_string()));
    }

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}
