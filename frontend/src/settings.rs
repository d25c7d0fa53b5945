//! Persisted host settings: window scale and key bindings. Stored as TOML
//! under the platform config directory, read on startup and written back
//! on exit so a changed scale/binding survives a relaunch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    pub scale: u32,
    /// Button name -> SDL scancode name, overriding `input::default_key_map`.
    #[serde(default)]
    pub key_bindings: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { scale: 3, key_bindings: HashMap::new() }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dmg").join("config.toml"))
}

impl Settings {
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
                log::warn!("ignoring malformed config at {}: {e}", path.display());
                Self::default()
            }),
            Err(e) => {
                log::debug!("no settings file at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        let Some(path) = config_path() else { return };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("could not create config directory {}: {e}", parent.display());
                return;
            }
        }
        match toml::to_string_pretty(self) {
            Ok(text) => {
                if let Err(e) = std::fs::write(&path, text) {
                    log::warn!("failed to write settings to {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_is_three() {
        assert_eq!(Settings::default().scale, 3);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut settings = Settings::default();
        settings.scale = 4;
        settings.key_bindings.insert("A".into(), "Z".into());
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed.scale, 4);
        assert_eq!(parsed.key_bindings.get("A").map(String::as_str), Some("Z"));
    }
}
