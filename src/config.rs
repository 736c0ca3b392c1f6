//! Runtime configuration read from the environment at startup.

use std::env;
use std::path::PathBuf;

use directories::BaseDirs;
use tracing::debug;

use crate::model::LAYOUT_FILE_NAME;
use crate::platform::{ModifierMap, Platform};

/// Overrides the layout file location.
pub const ENV_LAYOUT: &str = "UMPB_LAYOUT";

/// `1` or `true` starts with the overlay hidden.
pub const ENV_START_HIDDEN: &str = "UMPB_START_HIDDEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub layout_path: PathBuf,
    pub start_visible: bool,
    pub platform: Platform,
}

impl AppConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let layout_path = lookup(ENV_LAYOUT)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_layout_path);

        let start_hidden = lookup(ENV_START_HIDDEN)
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        let config = Self {
            layout_path,
            start_visible: !start_hidden,
            platform: Platform::current(),
        };
        debug!(?config, "configuration loaded");
        config
    }

    pub fn modifier_map(&self) -> ModifierMap {
        ModifierMap::for_platform(self.platform)
    }
}

/// `<home>/.umpb_layout.json`, or the working directory without a home.
pub fn default_layout_path() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(LAYOUT_FILE_NAME),
        None => PathBuf::from(LAYOUT_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_to_home_file_and_visible() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert!(config.start_visible);
        assert!(config.layout_path.ends_with(LAYOUT_FILE_NAME));
    }

    #[test]
    fn env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_LAYOUT, "/tmp/pad.json"),
            (ENV_START_HIDDEN, "TRUE"),
        ]));
        assert_eq!(config.layout_path, PathBuf::from("/tmp/pad.json"));
        assert!(!config.start_visible);
    }

    #[test]
    fn blank_layout_override_is_ignored() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_LAYOUT, "  "), (ENV_START_HIDDEN, "0")]));
        assert!(config.layout_path.ends_with(LAYOUT_FILE_NAME));
        assert!(config.start_visible);
    }
}
