use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Capture the mouse (click to toggle/delete, drag to reorder)
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Hex color overrides for the light palette, keyed by palette slot
    #[serde(default)]
    pub light: HashMap<String, String>,
    /// Hex color overrides for the dark palette, keyed by palette slot
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            mouse: true,
            light: HashMap::new(),
            dark: HashMap::new(),
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
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.mouse);
        assert!(config.ui.light.is_empty());
    }

    #[test]
    fn parses_palette_overrides() {
        let config: Config = toml::from_str(
            r##"
[ui]
mouse = false

[ui.dark]
background = "#000000"
"##,
        )
        .unwrap();
        assert!(!config.ui.mouse);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.dark.get("background").unwrap(), "#000000");
    }
}
