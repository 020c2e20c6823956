//! @ai:module:intent Configuration structs for the number processing terminal
//! @ai:module:layer infrastructure
//! @ai:module:public_api AppConfig, DisplayConfig, PacingConfig, Pace, OutputFormat
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// @ai:intent Main configuration for the terminal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

/// @ai:intent How results and screens are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// @ai:intent Output format for result summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// @ai:intent Cosmetic delays between output steps, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_loader_step_ms")]
    pub loader_step_ms: u64,
    #[serde(default = "default_field_ms")]
    pub field_ms: u64,
    #[serde(default = "default_session_gap_ms")]
    pub session_gap_ms: u64,
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,
    #[serde(default = "default_error_ms")]
    pub error_ms: u64,
}

/// @ai:intent Kinds of pause the presenter can insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    LoaderStep,
    Field,
    SessionGap,
    Notice,
    Error,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            format: OutputFormat::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            loader_step_ms: default_loader_step_ms(),
            field_ms: default_field_ms(),
            session_gap_ms: default_session_gap_ms(),
            notice_ms: default_notice_ms(),
            error_ms: default_error_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_loader_step_ms() -> u64 {
    400
}

fn default_field_ms() -> u64 {
    800
}

fn default_session_gap_ms() -> u64 {
    1000
}

fn default_notice_ms() -> u64 {
    1000
}

fn default_error_ms() -> u64 {
    2000
}

impl PacingConfig {
    /// @ai:intent Pacing that never sleeps
    /// @ai:effects pure
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// @ai:intent Delay for a pause kind, None when pacing is off or zero
    /// @ai:effects pure
    pub fn delay_for(&self, pace: Pace) -> Option<Duration> {
        if !self.enabled {
            return None;
        }

        let ms = match pace {
            Pace::LoaderStep => self.loader_step_ms,
            Pace::Field => self.field_ms,
            Pace::SessionGap => self.session_gap_ms,
            Pace::Notice => self.notice_ms,
            Pace::Error => self.error_ms,
        };

        (ms > 0).then(|| Duration::from_millis(ms))
    }
}

impl AppConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
