//! Panel configuration.
//!
//! Layout knobs and user-facing strings for the quest progress panel.
//! Configuration can be loaded from and saved to a TOML file.

use questview_common::{ConfigResult, Rgba};
use questview_core::model::DEFAULT_STRIKE_CAPTION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "questview.toml";

/// Text shown in the panel's alert dialogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStrings {
    /// Pending strike explainer title
    pub pending_strike_title: String,
    /// Pending strike explainer subtitle
    pub pending_strike_subtitle: String,
    /// Pending strike explainer body
    pub pending_strike_description: String,
    /// Strike description alert title
    pub strike_description_title: String,
    /// Strike description alert subtitle
    pub strike_description_subtitle: String,
    /// Strike description alert body
    pub strike_description_description: String,
    /// Label of the button closing an alert
    pub close: String,
    /// Background colour of alert titles
    pub title_background: Rgba,
}

impl Default for PanelStrings {
    fn default() -> Self {
        Self {
            pending_strike_title: "Pending Strike".to_string(),
            pending_strike_subtitle: "This Rage Strike hasn't happened yet".to_string(),
            pending_strike_description: "When the boss's Rage bar fills up, it will unleash \
                a Rage Strike on one of the town's locations."
                .to_string(),
            strike_description_title: "Rage Strikes".to_string(),
            strike_description_subtitle: "What are Rage Strikes?".to_string(),
            strike_description_description: "Some bosses grow angrier every time the party \
                skips its Dailies. When the Rage bar fills, the boss strikes and something in \
                town changes."
                .to_string(),
            close: "Close".to_string(),
            title_background: Rgba::rgb(0xfa, 0x85, 0x37),
        }
    }
}

/// Quest progress panel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Horizontal spacing between strike icons, in logical pixels
    pub strike_spacing: f32,
    /// Whether the quest art section starts expanded
    pub show_quest_image: bool,
    /// Strike caption template with `{active}` and `{total}` placeholders
    pub strike_caption: String,
    /// Dialog strings
    pub strings: PanelStrings,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            strike_spacing: 8.0,
            show_quest_image: true,
            strike_caption: DEFAULT_STRIKE_CAPTION.to_string(),
            strings: PanelStrings::default(),
        }
    }
}

impl PanelConfig {
    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                info!("Loaded panel config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Failed to load panel config: {e}");
                Self::default()
            },
        }
    }

    /// Read configuration from a path, surfacing errors.
    pub fn read<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, toml::to_string_pretty(self)?)?;

        info!("Saved panel config to {}", path.display());
        Ok(())
    }
}
