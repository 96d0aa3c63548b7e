/*!
 * Layout budgets per video aspect ratio.
 *
 * A layout budget is the pair (characters per line, lines per cue) that the
 * cue formatter packs text into. Widescreen video gets a wide budget, while
 * vertical and square video share narrower two-line budgets.
 */

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CaptionError;

/// Aspect ratio of the target video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// 16:9 widescreen
    #[default]
    Landscape,
    /// 9:16 vertical (phone) video
    Vertical,
    /// 1:1 square video
    Square,
}

impl AspectRatio {
    /// All supported aspect ratios
    pub const ALL: [AspectRatio; 3] = [Self::Landscape, Self::Vertical, Self::Square];

    /// Ratio tag as written in file names and APIs
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Vertical => "9:16",
            Self::Square => "1:1",
        }
    }

    /// Built-in layout budget for this aspect ratio
    pub fn layout(&self) -> LayoutConfig {
        LAYOUT_PRESETS[self]
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for AspectRatio {
    type Err = CaptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "16:9" | "landscape" | "widescreen" => Ok(Self::Landscape),
            "9:16" | "vertical" | "portrait" => Ok(Self::Vertical),
            "1:1" | "square" => Ok(Self::Square),
            _ => Err(CaptionError::UnknownAspectRatio(s.to_string())),
        }
    }
}

/// Character and line budget for one cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Maximum characters per displayed line
    pub max_chars_per_line: usize,
    /// Maximum lines per cue
    pub max_lines: usize,
}

impl LayoutConfig {
    /// Create a validated layout budget
    pub fn new(max_chars_per_line: usize, max_lines: usize) -> Result<Self, CaptionError> {
        let layout = Self {
            max_chars_per_line,
            max_lines,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Fail fast on a budget that cannot hold any text
    pub fn validate(&self) -> Result<(), CaptionError> {
        if self.max_chars_per_line == 0 || self.max_lines == 0 {
            return Err(CaptionError::InvalidLayout {
                max_chars_per_line: self.max_chars_per_line,
                max_lines: self.max_lines,
            });
        }
        Ok(())
    }
}

// @const: Built-in budgets, read-only after first use
static LAYOUT_PRESETS: Lazy<HashMap<AspectRatio, LayoutConfig>> = Lazy::new(|| {
    HashMap::from([
        (AspectRatio::Landscape, LayoutConfig { max_chars_per_line: 42, max_lines: 2 }),
        (AspectRatio::Vertical, LayoutConfig { max_chars_per_line: 24, max_lines: 2 }),
        (AspectRatio::Square, LayoutConfig { max_chars_per_line: 32, max_lines: 2 }),
    ])
});
