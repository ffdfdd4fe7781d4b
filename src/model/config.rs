use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from roster.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub roster: SeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Names loaded into the roster at startup, before any CLI names.
    #[serde(default)]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key-hint line in the status row.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides keyed by theme slot name, as "#RRGGBB" strings.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: RosterConfig = toml::from_str("").unwrap();
        assert!(config.roster.names.is_empty());
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_seed_and_colors() {
        let config: RosterConfig = toml::from_str(
            r##"
[roster]
names = ["Alice", "Bob"]

[ui]
show_key_hints = false

[ui.colors]
background = "#101010"
"##,
        )
        .unwrap();
        assert_eq!(config.roster.names, vec!["Alice", "Bob"]);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors["background"], "#101010");
    }
}
