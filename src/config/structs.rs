//! Configuration struct definitions.

use serde::Deserialize;

/// Severity filtering and color choice apply to every logger built from config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold (debug, info, notice, warn, error, critical, fatal).
    pub level: String,
    /// auto, always or never.
    pub colors: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            colors: "auto".to_string(),
        }
    }
}

/// Rotating file output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    /// Directory for log files; `~` is expanded.
    pub directory: String,
    /// Rotation gap such as "1h" or "1d"; "0" never rotates.
    pub gap: String,
    /// strftime pattern applied to the rotation boundary.
    pub file_name: String,
    /// keep_previous or propagate.
    pub on_sink_failure: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        let directory = directories::ProjectDirs::from("", "", "gaplog").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            directory,
            gap: "0".to_string(),
            file_name: crate::rotation::DAILY_PATTERN.to_string(),
            on_sink_failure: "keep_previous".to_string(),
        }
    }
}

/// gaplog's own diagnostics on stderr.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
