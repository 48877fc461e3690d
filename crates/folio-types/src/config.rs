//! Desktop configuration loaded from `desktop.toml`.
//!
//! Every section has defaults, so an empty document yields a working
//! desktop with the stock icons, photos and sound pads.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Top-level desktop configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub terminal: TerminalConfig,
    pub timing: TimingConfig,
    pub character: CharacterConfig,
    /// Human-readable descriptions for external links, keyed by icon label.
    pub link_descriptions: BTreeMap<String, String>,
    pub icons: Vec<IconConfig>,
    pub photos: Vec<PhotoConfig>,
    pub sounds: Vec<String>,
    pub studio: StudioConfig,
}

/// Terminal pane settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt rendered before the blinking cursor.
    pub prompt: String,
    /// Maximum rendered lines, including the cursor line.
    pub max_lines: usize,
}

/// Cosmetic delays, in milliseconds unless noted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between an icon click and its navigation / panel open.
    pub action_delay_ms: u32,
    /// Delay between mouse-up and highlight removal.
    pub highlight_ms: u32,
    /// Clock refresh interval in seconds.
    pub clock_interval_secs: u32,
}

/// The character icon that opens the contact card.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub name: String,
}

/// A desktop icon. Markers are resolved in the order page, external,
/// music, photos; the first present one wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub label: String,
    pub page: Option<String>,
    pub external: Option<String>,
    pub music: bool,
    pub photos: bool,
}

/// A gallery photo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoConfig {
    pub src: String,
    pub name: String,
}

/// Music studio settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Initial master volume, 0-100.
    pub master_volume: u8,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "user@portfolio:~$ ".to_string(),
            max_lines: 20,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            action_delay_ms: 100,
            highlight_ms: 150,
            clock_interval_secs: 60,
        }
    }
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            name: "Billie".to_string(),
        }
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self { master_volume: 75 }
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        let link_descriptions = [
            ("About Me", "Notion About Me"),
            ("Portfolio", "Notion Portfolio"),
            ("Press", "Notion Press"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            terminal: TerminalConfig::default(),
            timing: TimingConfig::default(),
            character: CharacterConfig::default(),
            link_descriptions,
            icons: default_icons(),
            photos: default_photos(),
            sounds: ["drum", "piano", "guitar", "bass", "synth", "fx"]
                .into_iter()
                .map(String::from)
                .collect(),
            studio: StudioConfig::default(),
        }
    }
}

fn default_icons() -> Vec<IconConfig> {
    let external = |label: &str, url: &str| IconConfig {
        label: label.to_string(),
        external: Some(url.to_string()),
        ..IconConfig::default()
    };
    vec![
        external("About Me", "https://www.notion.so/about-me"),
        external("Portfolio", "https://www.notion.so/portfolio"),
        external("Press", "https://www.notion.so/press"),
        IconConfig {
            label: "Resume".to_string(),
            page: Some("/resume.html".to_string()),
            ..IconConfig::default()
        },
        IconConfig {
            label: "Music".to_string(),
            music: true,
            ..IconConfig::default()
        },
        IconConfig {
            label: "Photos".to_string(),
            photos: true,
            ..IconConfig::default()
        },
    ]
}

fn default_photos() -> Vec<PhotoConfig> {
    (1..=6)
        .map(|i| PhotoConfig {
            src: format!("/photos/photo{i}.jpg"),
            name: format!("Photo {i}"),
        })
        .collect()
}

impl DesktopConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::info!("Loading desktop config from {}", path.display());
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.terminal.max_lines < 2 {
            return Err(FolioError::Config(format!(
                "terminal.max_lines must be at least 2 (got {})",
                self.terminal.max_lines
            )));
        }
        if self.studio.master_volume > 100 {
            return Err(FolioError::Config(format!(
                "studio.master_volume must be 0-100 (got {})",
                self.studio.master_volume
            )));
        }
        if let Some(icon) = self.icons.iter().find(|i| i.label.trim().is_empty()) {
            return Err(FolioError::Config(format!(
                "icon with empty label: {icon:?}"
            )));
        }
        Ok(())
    }
}
