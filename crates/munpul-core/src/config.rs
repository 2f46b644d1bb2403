//! Configuration types for munpul.
//!
//! [`Config::load`] reads `~/.config/munpul/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
show_preview     = true
preview_max_rows = 10
trending_limit   = 10

[keybindings]
toggle_focus  = "Tab"
search_focus  = "/"
upload        = "u"
back          = "Esc"
scroll_top    = "g"
scroll_bottom = "G"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/munpul/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_preview")]
    pub show_preview: bool,
    #[serde(default = "default_preview_max_rows")]
    pub preview_max_rows: u16,
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,
}

fn default_show_preview() -> bool { true }
fn default_preview_max_rows() -> u16 { 10 }
fn default_trending_limit() -> usize { 10 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_preview: default_show_preview(),
            preview_max_rows: default_preview_max_rows(),
            trending_limit: default_trending_limit(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_toggle_focus")]
    pub toggle_focus: String,
    #[serde(default = "default_search_focus")]
    pub search_focus: String,
    #[serde(default = "default_upload")]
    pub upload: String,
    #[serde(default = "default_back")]
    pub back: String,
    #[serde(default = "default_scroll_top")]
    pub scroll_top: String,
    #[serde(default = "default_scroll_bottom")]
    pub scroll_bottom: String,
}

fn default_toggle_focus() -> String { "Tab".to_string() }
fn default_search_focus() -> String { "/".to_string() }
fn default_upload() -> String { "u".to_string() }
fn default_back() -> String { "Esc".to_string() }
fn default_scroll_top() -> String { "g".to_string() }
fn default_scroll_bottom() -> String { "G".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: default_toggle_focus(),
            search_focus: default_search_focus(),
            upload: default_upload(),
            back: default_back(),
            scroll_top: default_scroll_top(),
            scroll_bottom: default_scroll_bottom(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/munpul/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("munpul")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
