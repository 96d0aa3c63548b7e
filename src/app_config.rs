use anyhow::{Context, Result};
use log::{debug, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::captions::{PipelineConfig, ScriptPolicy, SegmenterConfig, TimingConfig};
use crate::codec::SubtitleFormat;
use crate::errors::CaptionError;
use crate::layout::{AspectRatio, LayoutConfig};

/// Application configuration module
/// This module handles loading, validating and saving the caption settings
/// the CLI runs with. Every section falls back to built-in defaults, so a
/// partial conf.json is valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Transcription language code (ISO 639)
    #[serde(default = "default_language")]
    pub language: String,

    /// Script of the generated cue text
    #[serde(default)]
    pub script: ScriptPolicy,

    /// Word grouping thresholds
    #[serde(default)]
    pub segmentation: SegmenterConfig,

    /// Duration and gap limits
    #[serde(default)]
    pub timing: TimingConfig,

    /// Layout budget per aspect ratio
    #[serde(default)]
    pub layouts: LayoutOverrides,

    /// Default output subtitle format
    #[serde(default)]
    pub output_format: SubtitleFormat,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

// @struct: Layout budget per aspect ratio, preset values unless overridden
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LayoutOverrides {
    // @field: 16:9
    #[serde(default = "default_landscape_layout")]
    pub landscape: LayoutConfig,

    // @field: 9:16
    #[serde(default = "default_vertical_layout")]
    pub vertical: LayoutConfig,

    // @field: 1:1
    #[serde(default = "default_square_layout")]
    pub square: LayoutConfig,
}

impl Default for LayoutOverrides {
    fn default() -> Self {
        Self {
            landscape: default_landscape_layout(),
            vertical: default_vertical_layout(),
            square: default_square_layout(),
        }
    }
}

impl LayoutOverrides {
    // @returns: Layout for the aspect ratio
    pub fn get(&self, aspect: AspectRatio) -> LayoutConfig {
        match aspect {
            AspectRatio::Landscape => self.landscape,
            AspectRatio::Vertical => self.vertical,
            AspectRatio::Square => self.square,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    "sr".to_string()
}

fn default_landscape_layout() -> LayoutConfig {
    AspectRatio::Landscape.layout()
}

fn default_vertical_layout() -> LayoutConfig {
    AspectRatio::Vertical.layout()
}

fn default_square_layout() -> LayoutConfig {
    AspectRatio::Square.layout()
}

fn invalid(message: String) -> anyhow::Error {
    CaptionError::InvalidConfig(message).into()
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Write the configuration as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Load the file, or create it with defaults when it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Self::default();
        config.save_to_file(path)?;
        Ok(config)
    }

    /// Check every section for values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        let code_type = crate::language_utils::validate_language_code(&self.language)
            .with_context(|| format!("Unsupported language: {}", self.language))?;
        let name = crate::language_utils::get_language_name(&self.language)?;
        debug!("Config language: {} ('{}', {:?} code)", name, self.language, code_type);

        for aspect in AspectRatio::ALL {
            self.layouts
                .get(aspect)
                .validate()
                .with_context(|| format!("Invalid layout for {}", aspect))?;
        }

        let segmentation = &self.segmentation;
        if segmentation.max_words == 0 {
            return Err(invalid("segmentation.max_words must be > 0".to_string()));
        }
        if segmentation.max_duration <= 0.0 || segmentation.min_duration < 0.0 {
            return Err(invalid(format!(
                "segmentation durations out of range: max {} / min {}",
                segmentation.max_duration, segmentation.min_duration
            )));
        }
        if segmentation.pause_threshold < 0.0 {
            return Err(invalid("segmentation.pause_threshold must be >= 0".to_string()));
        }

        let timing = &self.timing;
        if timing.absolute_min_duration <= 0.0 {
            return Err(invalid("timing.absolute_min_duration must be > 0".to_string()));
        }
        if timing.min_duration < timing.absolute_min_duration || timing.max_duration < timing.min_duration {
            return Err(invalid(format!(
                "timing durations must satisfy absolute_min ({}) <= min ({}) <= max ({})",
                timing.absolute_min_duration, timing.min_duration, timing.max_duration
            )));
        }
        if timing.min_gap < 0.0 {
            return Err(invalid("timing.min_gap must be >= 0".to_string()));
        }

        Ok(())
    }

    // @returns: Stage settings for the caption pipeline
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            segmentation: self.segmentation.clone(),
            timing: self.timing.clone(),
            script: self.script,
        }
    }

    // @returns: Configured layout for the aspect ratio
    pub fn layout_for(&self, aspect: AspectRatio) -> LayoutConfig {
        self.layouts.get(aspect)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            script: ScriptPolicy::default(),
            segmentation: SegmenterConfig::default(),
            timing: TimingConfig::default(),
            layouts: LayoutOverrides::default(),
            output_format: SubtitleFormat::default(),
            log_level: LogLevel::default(),
        }
    }
}
