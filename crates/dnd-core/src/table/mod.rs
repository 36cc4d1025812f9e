//! Lookup tables driving classification and validation.
//!
//! All tables are built once at startup (built-in defaults, optionally
//! replaced from config) and passed by reference into the import and
//! validate entry points.

mod actions;
pub mod defaults;
mod layouts;

pub use actions::{Action, ActionRule, ActionTable, DestTemplate, MAPNAME_PLACEHOLDER, SKIP_SENTINEL};
pub use layouts::LayoutTable;

use crate::mapname::NameRules;

/// Everything the importer and validator look things up in.
#[derive(Debug, Clone)]
pub struct Tables {
    pub names: NameRules,
    pub actions: ActionTable,
    pub layouts: LayoutTable,
    /// Strip non-printable characters from destination paths.
    pub sanitize_paths: bool,
}

/// Built-in action rules in match order.
pub fn default_action_rules() -> Vec<ActionRule> {
    defaults::ACTIONS
        .iter()
        .map(|(pattern, dest)| ActionRule::new(pattern, dest))
        .collect()
}

/// Built-in layout table.
pub fn default_layouts() -> LayoutTable {
    defaults::LAYOUTS.iter().copied().collect()
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            names: NameRules::default(),
            actions: ActionTable::from_rules(&default_action_rules())
                .unwrap_or_else(|e| panic!("built-in action table is invalid: {e}")),
            layouts: default_layouts(),
            sanitize_paths: true,
        }
    }
}
