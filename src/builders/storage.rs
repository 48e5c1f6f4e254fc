use log::debug;
use std::collections::{HashMap, HashSet};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::error::{IgnoreError, Result};

/// Read/write access to the ignore-file and the filesystem facts the engine
/// needs about user-supplied paths.
///
/// The ignore-file is always handled as a whole: `read` returns every byte
/// and `write` replaces it. Nothing is locked between the two calls.
pub trait IgnoreFileStore {
    /// Returns `true` if a file (or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Reads the whole file as raw bytes. A missing file yields no bytes.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Creates or truncates the file and writes `content` in full.
    fn write(&mut self, path: &Path, content: &[u8]) -> Result<()>;
}

/// The real filesystem.
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IgnoreFileStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        match fs::read(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(IgnoreError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> Result<()> {
        let to_write_error = |source| IgnoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        // Owner read/write, everyone else read-only
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(path).map_err(to_write_error)?;
        file.write_all(content).map_err(to_write_error)?;
        debug!("wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

/// An in-memory store used by the engine tests.
#[derive(Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        self.files.insert(path.into(), content.as_ref().to_vec());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn content(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }
}

impl IgnoreFileStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(self.files.get(path).cloned().unwrap_or_default())
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}
