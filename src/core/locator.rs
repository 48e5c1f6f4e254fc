use log::debug;
use std::path::PathBuf;

use crate::builders::storage::IgnoreFileStore;
use crate::core::config::{SearchPolicy, ToolConfig};

/// Resolves the ignore-file for this invocation.
///
/// With `SearchPolicy::Upward` the working directory and each of its
/// ancestors are checked in turn and the first existing ignore-file wins.
/// When the root is reached without a match, or with
/// `SearchPolicy::CurrentDir`, the path in the working directory is returned
/// even though it may not exist yet.
pub fn locate_ignore_file(config: &ToolConfig, store: &dyn IgnoreFileStore) -> PathBuf {
    if config.search == SearchPolicy::Upward {
        for dir in config.working_dir().ancestors() {
            let candidate = dir.join(&config.file_name);
            debug!("looking for {}", candidate.display());
            if store.exists(&candidate) {
                debug!("found ignore-file at {}", candidate.display());
                return candidate;
            }
        }
    }

    let fallback = config.default_ignore_path();
    debug!("using ignore-file {}", fallback.display());
    fallback
}
