use serde::Deserialize;
use web_sys::window;

use crate::shared::error::expect_provided;

/// Workspace settings.
///
/// Every field has a default so an override document only needs the keys it changes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub main_tab_title: String,
    /// Delay before a requested scroll-into-view runs, so a just-opened tab is in the DOM.
    pub scroll_debounce_ms: u32,
    pub scroll_animation_ms: u32,
    /// Interval of the periodic overflow recalculation of the tab strip. 0 disables it.
    pub layout_refresh_ms: u32,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    pub log_level: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            main_tab_title: "Home".to_string(),
            scroll_debounce_ms: 100,
            scroll_animation_ms: 250,
            layout_refresh_ms: 1000,
            page_size_options: vec![50, 100, 200, 500],
            default_page_size: 100,
            log_level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
main_tab_title = "Home"
scroll_debounce_ms = 100
scroll_animation_ms = 250
layout_refresh_ms = 1000
page_size_options = [50, 100, 200, 500]
default_page_size = 100
log_level = "debug"
"#;

/// localStorage key holding an optional TOML override
const CONFIG_STORAGE_KEY: &str = "workspace_config";

impl WorkspaceConfig {
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let mut config: WorkspaceConfig = toml::from_str(source)?;
        config.normalize();
        Ok(config)
    }

    /// Repairs settings that would break grid invariants.
    fn normalize(&mut self) {
        self.page_size_options.retain(|size| *size > 0);
        if self.page_size_options.is_empty() {
            self.page_size_options = WorkspaceConfig::default().page_size_options;
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            self.default_page_size = self.page_size_options[0];
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Load configuration.
///
/// Search order:
/// 1. TOML override in localStorage (`workspace_config`)
/// 2. Falls back to embedded default config
pub fn load_config() -> WorkspaceConfig {
    let override_source = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if let Some(source) = override_source {
        match WorkspaceConfig::from_toml(&source) {
            Ok(config) => {
                log::info!("Loaded workspace config override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid workspace config override: {}", e),
        }
    }

    WorkspaceConfig::from_toml(DEFAULT_CONFIG).unwrap_or_default()
}

pub fn use_workspace_config() -> WorkspaceConfig {
    expect_provided::<WorkspaceConfig>("WorkspaceConfig")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = WorkspaceConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, WorkspaceConfig::default());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = WorkspaceConfig::from_toml("scroll_debounce_ms = 150").unwrap();
        assert_eq!(config.scroll_debounce_ms, 150);
        assert_eq!(config.default_page_size, 100);
        assert_eq!(config.main_tab_title, "Home");
    }

    #[test]
    fn test_default_page_size_must_be_allowed() {
        let config = WorkspaceConfig::from_toml(
            "page_size_options = [25, 50]\ndefault_page_size = 100",
        )
        .unwrap();
        assert_eq!(config.default_page_size, 25);

        let config = WorkspaceConfig::from_toml("page_size_options = [0]").unwrap();
        assert_eq!(config.page_size_options, vec![50, 100, 200, 500]);
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(WorkspaceConfig::from_toml("scroll_debounce_ms = \"soon\"").is_err());
    }
}
