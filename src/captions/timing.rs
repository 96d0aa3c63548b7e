/*!
 * Cue timing normalization.
 *
 * One left-to-right pass over cues ordered by start time. The duration clamp
 * and the gap clip move only the end time and measure from the cue's original
 * start. The start is then moved forward when it falls before zero or before
 * the previous cue's end, and the absolute floor is applied last.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::subtitle::{renumber, Cue};

/// Shortest regular cue duration in seconds
const DEFAULT_MIN_DURATION: f64 = 1.0;

/// Longest cue duration in seconds
const DEFAULT_MAX_DURATION: f64 = 5.0;

/// Gap kept before the next cue, in seconds
const DEFAULT_MIN_GAP: f64 = 0.1;

/// Floor applied after gap clipping, in seconds
const DEFAULT_ABSOLUTE_MIN_DURATION: f64 = 0.5;

/// Duration and gap limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Shortest regular cue duration
    #[serde(default = "default_min_duration")]
    pub min_duration: f64,

    /// Longest cue duration
    #[serde(default = "default_max_duration")]
    pub max_duration: f64,

    /// Gap kept before the next cue
    #[serde(default = "default_min_gap")]
    pub min_gap: f64,

    /// Hard floor on duration, wins over gap clipping
    #[serde(default = "default_absolute_min_duration")]
    pub absolute_min_duration: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_duration: DEFAULT_MIN_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
            min_gap: DEFAULT_MIN_GAP,
            absolute_min_duration: DEFAULT_ABSOLUTE_MIN_DURATION,
        }
    }
}

fn default_min_duration() -> f64 {
    DEFAULT_MIN_DURATION
}

fn default_max_duration() -> f64 {
    DEFAULT_MAX_DURATION
}

fn default_min_gap() -> f64 {
    DEFAULT_MIN_GAP
}

fn default_absolute_min_duration() -> f64 {
    DEFAULT_ABSOLUTE_MIN_DURATION
}

/// Enforces duration limits and removes overlaps between cues
pub struct TimingNormalizer {
    config: TimingConfig,
}

impl Default for TimingNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingNormalizer {
    /// Create a normalizer with default limits
    pub fn new() -> Self {
        Self {
            config: TimingConfig::default(),
        }
    }

    /// Create a normalizer with custom limits
    pub fn with_config(config: TimingConfig) -> Self {
        Self { config }
    }

    /// Normalize cue timing and renumber the cues 1..N.
    ///
    /// The result has `end > start` for every cue and never lets a cue end
    /// after the next one starts.
    pub fn normalize(&self, mut cues: Vec<Cue>) -> Vec<Cue> {
        cues.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut adjusted = 0;
        let mut previous_end = 0.0_f64;

        for i in 0..cues.len() {
            let next_start = cues.get(i + 1).map(|next| next.start);
            let cue = &mut cues[i];
            let (original_start, original_end) = (cue.start, cue.end);

            let duration = cue.end - cue.start;
            if duration < self.config.min_duration {
                cue.end = cue.start + self.config.min_duration;
            } else if duration > self.config.max_duration {
                cue.end = cue.start + self.config.max_duration;
            }

            if let Some(next_start) = next_start {
                let limit = next_start - self.config.min_gap;
                if cue.end > limit {
                    cue.end = limit;
                }
            }

            cue.start = cue.start.max(0.0).max(previous_end);

            let floor = cue.start + self.config.absolute_min_duration;
            if cue.end < floor {
                cue.end = floor;
            }

            if cue.start != original_start || cue.end != original_end {
                adjusted += 1;
            }
            previous_end = cue.end;
        }

        renumber(&mut cues);
        debug!("Normalized timing of {} cues ({} adjusted)", cues.len(), adjusted);
        cues
    }
}
