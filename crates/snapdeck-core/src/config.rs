use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::motion::Easing;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub lang: LangConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Section pager behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Duration of a programmatic section transition
    #[serde(default = "default_transition_duration")]
    pub transition_duration_ms: u64,
    /// Swallow wheel input while a transition is in flight
    #[serde(default = "default_true")]
    pub wheel_block_during_transition: bool,
    /// Arrow keys move between sections
    #[serde(default = "default_true")]
    pub keyboard_navigation: bool,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: default_transition_duration(),
            wheel_block_during_transition: default_true(),
            keyboard_navigation: default_true(),
        }
    }
}

impl PagerConfig {
    #[inline]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }
}

/// Scroll-triggered reveal animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_reveal_duration")]
    pub duration_ms: u64,
    /// Only animate the first time an element enters the viewport
    #[serde(default)]
    pub once: bool,
    /// Animate out again when an element leaves through the top
    #[serde(default)]
    pub mirror: bool,
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default = "default_reveal_easing")]
    pub easing: Easing,
    /// Rows an element must travel past the viewport bottom before it reveals
    #[serde(default = "default_reveal_offset")]
    pub offset: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_reveal_duration(),
            once: false,
            mirror: false,
            delay_ms: 0,
            easing: default_reveal_easing(),
            offset: default_reveal_offset(),
        }
    }
}

/// Continuous decorative motion and the quote reveal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Float amplitude in rows
    #[serde(default = "default_float_amplitude")]
    pub float_amplitude: f64,
    /// Duration of one float leg (up or down)
    #[serde(default = "default_float_duration")]
    pub float_duration_ms: u64,
    /// Start delay between consecutive floating elements, in random order
    #[serde(default)]
    pub float_stagger_ms: u64,
    /// Duration of one full rotation
    #[serde(default = "default_rotate_duration")]
    pub rotate_duration_ms: u64,
    /// Per-character weight animation duration
    #[serde(default = "default_quote_duration")]
    pub quote_duration_ms: u64,
    /// Delay between consecutive characters
    #[serde(default = "default_quote_stagger")]
    pub quote_stagger_ms: u64,
    #[serde(default = "default_quote_weight_from")]
    pub quote_weight_from: u16,
    #[serde(default = "default_quote_weight_to")]
    pub quote_weight_to: u16,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            float_amplitude: default_float_amplitude(),
            float_duration_ms: default_float_duration(),
            float_stagger_ms: 0,
            rotate_duration_ms: default_rotate_duration(),
            quote_duration_ms: default_quote_duration(),
            quote_stagger_ms: default_quote_stagger(),
            quote_weight_from: default_quote_weight_from(),
            quote_weight_to: default_quote_weight_to(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LangConfig {
    /// Language links render dimmed and ignore clicks
    #[serde(default)]
    pub disable_links_navigation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Rows moved by one free (non-snapping) scroll step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

impl UiConfig {
    /// Tick duration used while animations are running
    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Space>"
///
/// Arrow keys always drive the pager and are not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Free scroll by `ui.scroll_lines`
    #[serde(default = "default_key_line_down")]
    pub line_down: String,
    #[serde(default = "default_key_line_up")]
    pub line_up: String,
    /// Free scroll by a viewport
    #[serde(default = "default_key_page_down")]
    pub page_down: String,
    #[serde(default = "default_key_page_up")]
    pub page_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Open the jump prompt
    #[serde(default = "default_key_jump_prompt")]
    pub jump_prompt: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            line_down: default_key_line_down(),
            line_up: default_key_line_up(),
            page_down: default_key_page_down(),
            page_up: default_key_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            jump_prompt: default_key_jump_prompt(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_section() -> String { "<Space>".to_string() }
fn default_key_prev_section() -> String { "<BS>".to_string() }
fn default_key_line_down() -> String { "j".to_string() }
fn default_key_line_up() -> String { "k".to_string() }
fn default_key_page_down() -> String { "<C-f>".to_string() }
fn default_key_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "g".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_jump_prompt() -> String { "/".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snapdeck")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_transition_duration() -> u64 {
    800
}

fn default_reveal_duration() -> u64 {
    800
}

fn default_reveal_easing() -> Easing {
    Easing::EaseInOut
}

fn default_reveal_offset() -> f64 {
    2.0
}

fn default_float_amplitude() -> f64 {
    1.0
}

fn default_float_duration() -> u64 {
    1300
}

fn default_rotate_duration() -> u64 {
    6000
}

fn default_quote_duration() -> u64 {
    1000
}

fn default_quote_stagger() -> u64 {
    60
}

fn default_quote_weight_from() -> u16 {
    200
}

fn default_quote_weight_to() -> u16 {
    800
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    3
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/snapdeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("snapdeck")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used by the interactive terminal host
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("snapdeck.log")
    }
}
