use std::path::{Path, PathBuf};

use crate::core::error::{IgnoreError, Result};

/// Name of the ignore-file managed by this tool.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Number of leading template characters used by the "already present" check.
pub const DEFAULT_PREFIX_LEN: usize = 50;

/// How the ignore-file is located relative to the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPolicy {
    /// Walk up through the ancestors and use the first `.gitignore` found,
    /// falling back to the working directory.
    #[default]
    Upward,
    /// Always use `<working dir>/.gitignore`.
    CurrentDir,
}

/// Runtime settings for one invocation.
///
/// There is no configuration file: everything here comes from the command
/// line and the process working directory, and is rebuilt on every run.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub working_dir: PathBuf,
    pub file_name: String,
    pub search: SearchPolicy,
    pub prefix_len: usize,
}

impl ToolConfig {
    /// Builds a config rooted at the process working directory.
    pub fn from_current_dir(search: SearchPolicy) -> Result<Self> {
        let working_dir = std::env::current_dir().map_err(IgnoreError::CurrentDir)?;
        Ok(Self::new_at(working_dir).with_search(search))
    }

    /// Builds a config rooted at an explicit directory.
    ///
    /// Tests use this so they never have to change the process cwd.
    pub fn new_at(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            file_name: IGNORE_FILE_NAME.to_string(),
            search: SearchPolicy::default(),
            prefix_len: DEFAULT_PREFIX_LEN,
        }
    }

    pub fn with_search(mut self, search: SearchPolicy) -> Self {
        self.search = search;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// The fallback location: the ignore-file in the working directory.
    pub fn default_ignore_path(&self) -> PathBuf {
        self.working_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ToolConfig::new_at("/work/project");
        assert_eq!(config.search, SearchPolicy::Upward);
        assert_eq!(config.prefix_len, 50);
        assert_eq!(
            config.default_ignore_path(),
            PathBuf::from("/work/project/.gitignore")
        );
    }

    #[test]
    fn test_with_search() {
        let config = ToolConfig::new_at("/work").with_search(SearchPolicy::CurrentDir);
        assert_eq!(config.search, SearchPolicy::CurrentDir);
    }
}
