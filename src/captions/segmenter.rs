/*!
 * Word grouping into raw segments.
 *
 * Words are accumulated greedily and the current segment is closed before a
 * word is appended whenever the segment is full, too long, interrupted by a
 * pause, or the previous word ended a clause.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::subtitle::{RawSegment, Word};

/// Maximum words per segment
const DEFAULT_MAX_WORDS: usize = 8;

/// Maximum accumulated segment duration in seconds
const DEFAULT_MAX_DURATION: f64 = 4.0;

/// Silence between words that forces a new segment, in seconds
const DEFAULT_PAUSE_THRESHOLD: f64 = 0.7;

/// Shortest segment kept by the padding post-pass, in seconds
const DEFAULT_MIN_DURATION: f64 = 1.0;

/// Trailing characters that close a segment
const CLOSING_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Thresholds for segment closing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Maximum words per segment
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Maximum accumulated duration in seconds
    #[serde(default = "default_max_duration")]
    pub max_duration: f64,

    /// Pause between words that closes a segment, in seconds
    #[serde(default = "default_pause_threshold")]
    pub pause_threshold: f64,

    /// Segments shorter than this are padded, in seconds
    #[serde(default = "default_min_duration")]
    pub min_duration: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            max_duration: DEFAULT_MAX_DURATION,
            pause_threshold: DEFAULT_PAUSE_THRESHOLD,
            min_duration: DEFAULT_MIN_DURATION,
        }
    }
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

fn default_max_duration() -> f64 {
    DEFAULT_MAX_DURATION
}

fn default_pause_threshold() -> f64 {
    DEFAULT_PAUSE_THRESHOLD
}

fn default_min_duration() -> f64 {
    DEFAULT_MIN_DURATION
}

/// Groups word timestamps into raw segments
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Create a segmenter with default thresholds
    pub fn new() -> Self {
        Self {
            config: SegmenterConfig::default(),
        }
    }

    /// Create a segmenter with custom thresholds
    pub fn with_config(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Group words into segments.
    ///
    /// Word timing is sanitized first: negative offsets clamp to zero and a
    /// word ending at or before its start becomes zero-width. Words with no
    /// text are dropped.
    pub fn segment(&self, words: &[Word]) -> Vec<RawSegment> {
        let mut segments = Vec::new();
        let mut current: Vec<Word> = Vec::new();

        for word in words.iter().filter_map(sanitize_word) {
            if let Some(previous) = current.last() {
                if self.should_close(&current, previous, &word) {
                    segments.push(join_words(&current));
                    current.clear();
                }
            }
            current.push(word);
        }

        if !current.is_empty() {
            segments.push(join_words(&current));
        }

        debug!("Segmented {} words into {} segments", words.len(), segments.len());
        segments
    }

    /// Identity pass for recognizers that only deliver coarse segments
    pub fn passthrough(&self, segments: &[RawSegment]) -> Vec<RawSegment> {
        segments
            .iter()
            .filter_map(|segment| {
                let text = segment.text.split_whitespace().collect::<Vec<_>>().join(" ");
                if text.is_empty() {
                    return None;
                }
                let (start, end) = sanitize_interval(segment.start, segment.end);
                Some(RawSegment { start, end, text })
            })
            .collect()
    }

    /// Extend segments shorter than the minimum duration.
    ///
    /// The extension never reaches past the next segment's start; the last
    /// segment is extended freely. Segments are never shortened.
    pub fn pad_short_segments(&self, mut segments: Vec<RawSegment>) -> Vec<RawSegment> {
        let min_duration = self.config.min_duration;

        for i in 0..segments.len() {
            if segments[i].duration() >= min_duration {
                continue;
            }

            let mut end = segments[i].start + min_duration;
            if let Some(next) = segments.get(i + 1) {
                end = end.min(next.start);
            }
            segments[i].end = segments[i].end.max(end);
        }

        segments
    }

    fn should_close(&self, current: &[Word], previous: &Word, word: &Word) -> bool {
        let segment_start = current[0].start;

        current.len() >= self.config.max_words
            || previous.end - segment_start > self.config.max_duration
            || word.start - previous.end > self.config.pause_threshold
            || previous.text.ends_with(CLOSING_PUNCTUATION)
    }
}

fn sanitize_interval(start: f64, end: f64) -> (f64, f64) {
    let start = start.max(0.0);
    let end = end.max(start);
    (start, end)
}

fn sanitize_word(word: &Word) -> Option<Word> {
    let text = word.text.trim();
    if text.is_empty() {
        return None;
    }
    let (start, end) = sanitize_interval(word.start, word.end);
    Some(Word {
        text: text.to_string(),
        start,
        end,
    })
}

fn join_words(words: &[Word]) -> RawSegment {
    let text = words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>().join(" ");
    let start = words.first().map_or(0.0, |w| w.start);
    let end = words.last().map_or(start, |w| w.end);
    RawSegment { start, end, text }
}
