use crate::mapname::NameRules;
use crate::table::{ActionRule, ActionTable, LayoutTable, Tables};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up under `$XDG_CONFIG_HOME/dnd/`.
pub const CONFIG_FILE: &str = "tables.toml";

/// Table overrides as written in `tables.toml`. Missing sections keep the
/// built-in value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesFile {
    pub sanitize_paths: Option<bool>,
    pub names: Option<NameRules>,
    pub layouts: Option<BTreeMap<String, String>>,
    pub actions: Option<Vec<ActionRule>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid action pattern")]
    Pattern(#[from] globset::Error),
}

impl TablesFile {
    pub fn from_toml(path: &Path, data: &str) -> Result<Self, ConfigError> {
        toml::from_str(data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlays the file's sections on the built-in tables.
    pub fn into_tables(self) -> Result<Tables, ConfigError> {
        let defaults = Tables::default();
        let actions = match self.actions {
            Some(rules) => ActionTable::from_rules(&rules)?,
            None => defaults.actions,
        };
        Ok(Tables {
            names: self.names.map(NameRules::normalized).unwrap_or(defaults.names),
            actions,
            layouts: self.layouts.map(LayoutTable::new).unwrap_or(defaults.layouts),
            sanitize_paths: self.sanitize_paths.unwrap_or(defaults.sanitize_paths),
        })
    }
}

/// Returns the XDG config file if one exists.
pub fn find_config_file() -> Option<PathBuf> {
    match xdg::BaseDirectories::with_prefix("dnd") {
        Ok(dirs) => dirs.find_config_file(CONFIG_FILE),
        Err(e) => {
            tracing::debug!("no XDG config dirs: {}", e);
            None
        }
    }
}

/// Loads tables from `explicit` if given, else from the XDG config file if
/// present, else the built-ins. Never writes anything.
pub fn load_tables(explicit: Option<&Path>) -> Result<Tables, ConfigError> {
    let path = match explicit.map(Path::to_path_buf).or_else(find_config_file) {
        Some(path) => path,
        None => {
            tracing::debug!("using built-in tables");
            return Ok(Tables::default());
        }
    };

    let data = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let tables = TablesFile::from_toml(&path, &data)?.into_tables()?;
    tracing::info!(
        path = %path.display(),
        actions = tables.actions.len(),
        layouts = tables.layouts.len(),
        "loaded tables"
    );
    Ok(tables)
}
