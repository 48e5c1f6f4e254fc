use bstr::ByteSlice;
use log::debug;
use std::path::{Path, PathBuf};

use crate::builders::merge;
use crate::builders::storage::IgnoreFileStore;
use crate::builders::templates;
use crate::core::config::ToolConfig;
use crate::core::error::Result;
use crate::core::locator::locate_ignore_file;
use crate::utils::paths;

/// What a command did to the ignore-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    TemplateWritten { lang: String, path: PathBuf },
    /// The template's leading characters were already in the file; nothing was written.
    TemplateAlreadyPresent { lang: String, path: PathBuf },
    /// `entry` holds the raw bytes written to the ignore-file.
    EntryAdded { entry: Vec<u8>, path: PathBuf },
    /// An identical line already exists; nothing was written.
    EntryAlreadyPresent { entry: Vec<u8>, path: PathBuf },
}

impl Outcome {
    /// The ignore-file the command operated on.
    pub fn ignore_file(&self) -> &Path {
        match self {
            Outcome::TemplateWritten { path, .. }
            | Outcome::TemplateAlreadyPresent { path, .. }
            | Outcome::EntryAdded { path, .. }
            | Outcome::EntryAlreadyPresent { path, .. } => path,
        }
    }

    /// Returns `true` if the ignore-file was written.
    pub fn changed(&self) -> bool {
        matches!(
            self,
            Outcome::TemplateWritten { .. } | Outcome::EntryAdded { .. }
        )
    }
}

/// Runs the two ignore-file commands against a store.
///
/// Each call locates the ignore-file afresh, reads it whole, and writes it
/// back whole only when something changes.
pub struct IgnoreEngine {
    config: ToolConfig,
    store: Box<dyn IgnoreFileStore>,
}

impl IgnoreEngine {
    pub fn new(config: ToolConfig, store: Box<dyn IgnoreFileStore>) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &dyn IgnoreFileStore {
        self.store.as_ref()
    }

    /// Merges the template for `lang` into the ignore-file.
    ///
    /// An unknown language fails before the filesystem is touched.
    pub fn generate_template(&mut self, lang: &str) -> Result<Outcome> {
        let template = templates::lookup(lang)?;
        let path = locate_ignore_file(&self.config, self.store.as_ref());
        let existing = self.store.read(&path)?;

        if merge::contains_template(&existing, template.body, self.config.prefix_len) {
            debug!("{} template prefix found in {}", template.key, path.display());
            return Ok(Outcome::TemplateAlreadyPresent {
                lang: lang.to_string(),
                path,
            });
        }

        let merged = merge::merge_template(&existing, lang, template.body);
        self.store.write(&path, &merged)?;
        Ok(Outcome::TemplateWritten {
            lang: lang.to_string(),
            path,
        })
    }

    /// Appends `target` to the ignore-file, relative to the file's directory.
    pub fn add_path(&mut self, target: &Path) -> Result<Outcome> {
        let absolute = paths::absolutize(target, self.config.working_dir());
        let path = locate_ignore_file(&self.config, self.store.as_ref());

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let relative = match paths::relative_to(&absolute, base) {
            Some(relative) => relative,
            None => {
                debug!(
                    "no relative path from {} to {}, using absolute path",
                    base.display(),
                    absolute.display()
                );
                absolute.clone()
            }
        };
        let entry = paths::render_entry(&relative, self.store.is_dir(&absolute))?;

        let existing = self.store.read(&path)?;
        if merge::contains_entry(&existing, &entry) {
            debug!("entry {:?} already in {}", entry.as_bstr(), path.display());
            return Ok(Outcome::EntryAlreadyPresent { entry, path });
        }

        let updated = merge::append_entry(&existing, &entry);
        self.store.write(&path, &updated)?;
        Ok(Outcome::EntryAdded { entry, path })
    }
}
