/*!
 * Line wrapping and cue splitting under a layout budget.
 *
 * Text is wrapped greedily into lines of at most `max_chars_per_line`
 * characters, lines are grouped `max_lines` at a time into cues, and the
 * source time window is divided evenly across the resulting cues.
 */

use log::debug;

use crate::layout::LayoutConfig;
use crate::subtitle::Cue;

/// Time interval a piece of text occupies, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Fits raw text into displayable cues
pub struct CueFormatter;

impl CueFormatter {
    /// Split text into cues that respect the layout budget.
    ///
    /// Every line stays within `max_chars_per_line` except a single word that
    /// is longer on its own, which keeps its own line unsplit. Cues are
    /// numbered from 1 and cover the window in order.
    pub fn format(text: &str, window: TimeWindow, layout: &LayoutConfig) -> Vec<Cue> {
        let text = Self::normalize_whitespace(text);
        let lines = Self::wrap_lines(&text, layout.max_chars_per_line);
        if lines.is_empty() {
            return Vec::new();
        }

        let separator = if layout.max_lines > 1 { "\n" } else { " " };
        let chunks: Vec<String> = lines
            .chunks(layout.max_lines.max(1))
            .map(|group| group.join(separator))
            .collect();

        let cues = Self::time_slice(chunks, window);
        debug!(
            "Formatted {} chars into {} lines / {} cues",
            text.chars().count(),
            lines.len(),
            cues.len()
        );
        cues
    }

    /// Collapse whitespace runs (including newlines) into single spaces
    pub fn normalize_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Greedy line bin-packing by character count
    pub fn wrap_lines(text: &str, max_chars_per_line: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();

            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= max_chars_per_line {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    fn time_slice(chunks: Vec<String>, window: TimeWindow) -> Vec<Cue> {
        if chunks.len() == 1 {
            return chunks
                .into_iter()
                .map(|text| Cue::new(1, window.start, window.end, &text))
                .collect();
        }

        let count = chunks.len();
        let step = window.duration() / count as f64;

        chunks
            .into_iter()
            .enumerate()
            .map(|(k, text)| {
                let start = window.start + k as f64 * step;
                let end = if k + 1 == count {
                    window.end
                } else {
                    window.start + (k + 1) as f64 * step
                };
                Cue::new(k + 1, start, end, &text)
            })
            .collect()
    }
}
