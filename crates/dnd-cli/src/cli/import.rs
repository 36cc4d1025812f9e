//! `dndimport --root <dir> <archive>...`: sort archives into the library.

use anyhow::{Context, Result};
use clap::Parser;
use dnd_core::config;
use dnd_core::import::{self, ImportOutcome};
use std::path::PathBuf;

/// Import battle-map zip archives into `<root>`, deleting each one once imported.
#[derive(Debug, Parser)]
#[command(name = "dndimport")]
#[command(about = "Sort battle-map archives into a map library", long_about = None)]
pub struct ImportCli {
    /// Library root to copy files into.
    #[arg(long, value_name = "DIR")]
    pub root: PathBuf,

    /// Table overrides (TOML). Defaults to `$XDG_CONFIG_HOME/dnd/tables.toml` if present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Zip archives to import, processed in order.
    #[arg(required = true, value_name = "ARCHIVE")]
    pub archives: Vec<PathBuf>,
}

impl ImportCli {
    pub fn run(&self) -> Result<()> {
        let tables = config::load_tables(self.config.as_deref()).context("load tables")?;
        let outcomes = import::import_all(&self.archives, &self.root, &tables)?;
        let imported = outcomes
            .iter()
            .filter(|o| matches!(o, ImportOutcome::Imported { .. }))
            .count();
        tracing::info!(
            imported,
            already_processed = outcomes.len() - imported,
            "done"
        );
        Ok(())
    }
}
