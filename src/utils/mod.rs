use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::builders::reporter::{ConsoleReporter, OutcomeReporter};
use crate::builders::storage::FsStore;
use crate::core::config::{SearchPolicy, ToolConfig};
use crate::core::engine::{IgnoreEngine, Outcome};

pub mod paths;

pub fn generate_template(lang: &str, search: SearchPolicy) -> Result<Outcome> {
    let mut engine = get_engine(search)?;
    let outcome = engine.generate_template(lang)?;
    ConsoleReporter::new().report(&outcome);
    Ok(outcome)
}

pub fn add_path(target: &Path, search: SearchPolicy) -> Result<Outcome> {
    let mut engine = get_engine(search)?;
    let outcome = engine.add_path(target)?;
    ConsoleReporter::new().report(&outcome);
    Ok(outcome)
}

// Helper function to create an IgnoreEngine over the real filesystem
fn get_engine(search: SearchPolicy) -> Result<IgnoreEngine> {
    let config = ToolConfig::from_current_dir(search)?;
    debug!("working directory: {}", config.working_dir().display());
    Ok(IgnoreEngine::new(config, Box::new(FsStore::new())))
}
