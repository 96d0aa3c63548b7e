use std::fmt;
use serde::{Deserialize, Serialize};

use crate::codec::timecode::{format_timecode, TimecodeStyle};

// @module: Subtitle data model shared by every pipeline stage

// @struct: One recognized word with its timing in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    // @field: Word text as recognized (may carry surrounding whitespace)
    #[serde(alias = "word")]
    pub text: String,

    // @field: Start offset in seconds
    pub start: f64,

    // @field: End offset in seconds
    pub end: f64,
}

impl Word {
    pub fn new(text: &str, start: f64, end: f64) -> Self {
        Word {
            text: text.to_string(),
            start,
            end,
        }
    }
}

/// A coarse span of recognized speech, either from the recognizer directly
/// or produced by the segmenter from words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSegment {
    /// Start offset in seconds
    pub start: f64,
    /// End offset in seconds
    pub end: f64,
    /// Segment text
    pub text: String,
}

impl RawSegment {
    pub fn new(start: f64, end: f64, text: &str) -> Self {
        RawSegment {
            start,
            end,
            text: text.to_string(),
        }
    }

    /// Length of the segment in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Timing granularity delivered by the recognizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionTiming {
    /// Word-level timestamps
    Words(Vec<Word>),
    /// Segment-level timestamps only
    Segments(Vec<RawSegment>),
}

/// Output of the external speech-recognition call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Word or segment timings, serialized as a `words` or `segments` key
    #[serde(flatten)]
    pub timing: TranscriptionTiming,

    /// Language tag of the recognized speech
    #[serde(default = "default_language")]
    pub language: String,

    /// Total media duration in seconds
    #[serde(default)]
    pub duration: f64,
}

fn default_language() -> String {
    "sr".to_string()
}

impl TranscriptionResult {
    /// Create a word-level transcription result
    pub fn from_words(words: Vec<Word>, language: &str, duration: f64) -> Self {
        Self {
            timing: TranscriptionTiming::Words(words),
            language: language.to_string(),
            duration,
        }
    }

    /// Create a segment-level transcription result
    pub fn from_segments(segments: Vec<RawSegment>, language: &str, duration: f64) -> Self {
        Self {
            timing: TranscriptionTiming::Segments(segments),
            language: language.to_string(),
            duration,
        }
    }

    /// True when no words or segments were recognized
    pub fn is_empty(&self) -> bool {
        match &self.timing {
            TranscriptionTiming::Words(words) => words.is_empty(),
            TranscriptionTiming::Segments(segments) => segments.is_empty(),
        }
    }
}

// @struct: Single timed subtitle entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    // @field: 1-based sequence number
    pub sequence: usize,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Display text, lines separated by '\n'
    pub text: String,

    // @field: Text before script conversion, when conversion changed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl Cue {
    pub fn new(sequence: usize, start: f64, end: f64, text: &str) -> Self {
        Cue {
            sequence,
            start,
            end,
            text: text.to_string(),
            original_text: None,
        }
    }

    /// Length of the cue in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Start time rounded to whole milliseconds
    pub fn start_ms(&self) -> u64 {
        seconds_to_ms(self.start)
    }

    /// End time rounded to whole milliseconds
    pub fn end_ms(&self) -> u64 {
        seconds_to_ms(self.end)
    }

    /// Display lines of the cue
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.sequence)?;
        writeln!(
            f,
            "{} --> {}",
            format_timecode(self.start, TimecodeStyle::Comma),
            format_timecode(self.end, TimecodeStyle::Comma)
        )?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Convert seconds to whole milliseconds, clamping negatives to zero
pub fn seconds_to_ms(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    }
}

/// Renumber cues 1..N in their current order
pub fn renumber(cues: &mut [Cue]) {
    for (i, cue) in cues.iter_mut().enumerate() {
        cue.sequence = i + 1;
    }
}
