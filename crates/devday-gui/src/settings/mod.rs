//! Settings types and configuration for the Denver Dev Day companion.
//!
//! Only general preferences exist today; everything the app shows is
//! bundled content, so there is nothing else to configure.

mod persistence;

pub use persistence::{load_settings, save_settings, settings_path};

use serde::{Deserialize, Serialize};

// ============================================================================
// Main Settings Struct
// ============================================================================

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
}

// ============================================================================
// General Settings
// ============================================================================

/// General application preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self { dark_mode: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_in_light_mode() {
        assert!(!Settings::default().general.dark_mode);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let parsed: Settings =
            toml::from_str("[general]\ndark_mode = true\nlegacy_flag = 3\n").unwrap();
        assert!(parsed.general.dark_mode);
    }
}
