//! `dndcheck --root <dir>`: validate the map library layout.

use anyhow::{Context, Result};
use clap::Parser;
use dnd_core::{config, validate};
use std::path::PathBuf;

/// Check that every map under `<root>/Maps` matches a known source-pack layout.
#[derive(Debug, Parser)]
#[command(name = "dndcheck")]
#[command(about = "Validate map directories against known source-pack layouts", long_about = None)]
pub struct CheckCli {
    /// Library root containing the `Maps` directory.
    #[arg(long, value_name = "DIR")]
    pub root: PathBuf,

    /// Table overrides (TOML). Defaults to `$XDG_CONFIG_HOME/dnd/tables.toml` if present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CheckCli {
    pub fn run(&self) -> Result<()> {
        let tables = config::load_tables(self.config.as_deref()).context("load tables")?;
        let report = validate::validate_root(&self.root, &tables.layouts)
            .with_context(|| format!("validate {}", self.root.display()))?;
        tracing::info!(maps = report.matched.len(), "all maps recognized");
        Ok(())
    }
}
