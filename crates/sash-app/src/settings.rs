// Settings persistence: breakpoint configuration stored separately from any
// live layout state. Uses the platform-native config dir: e.g.
// ~/Library/Application Support/sash/settings.json on macOS,
// ~/.config/sash/settings.json on Linux. Layout state itself is never
// written here; these are read-only thresholds for the viewport classifier.

use sash_core::Breakpoints;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub breakpoints: BreakpointSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointSettings::default(),
        }
    }
}

/// Optional overrides for the viewport classification thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakpointSettings {
    /// Widths at or below this classify as phone.
    #[serde(default)]
    pub phone_max: Option<f32>,
    /// Widths at or below this (and above `phone_max`) classify as narrow.
    #[serde(default)]
    pub narrow_max: Option<f32>,
}

impl Default for BreakpointSettings {
    fn default() -> Self {
        Self {
            phone_max: None,
            narrow_max: None,
        }
    }
}

impl BreakpointSettings {
    /// Resolve against the built-in defaults.
    pub fn to_breakpoints(&self) -> Breakpoints {
        let defaults = Breakpoints::default();
        Breakpoints {
            phone_max: self.phone_max.unwrap_or(defaults.phone_max),
            narrow_max: self.narrow_max.unwrap_or(defaults.narrow_max),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("sash").join("settings.json"))
}

pub fn load_settings() -> Settings {
    let path = match settings_path() {
        Some(p) => p,
        None => return Settings::default(),
    };

    match std::fs::read_to_string(&path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

pub fn save_settings(settings: &Settings) {
    let path = match settings_path() {
        Some(p) => p,
        None => {
            log::warn!("Cannot determine settings path");
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create config dir {}: {}", parent.display(), e);
            return;
        }
    }

    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                log::error!("Failed to write {}: {}", path.display(), e);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize settings: {}", e);
        }
    }
}
