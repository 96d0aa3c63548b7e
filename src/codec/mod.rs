/*!
 * Subtitle file codec.
 *
 * Serializes cue lists to SubRip (`.srt`) and WebVTT (`.vtt`) text and parses
 * them back. Parsing is tolerant: malformed blocks are skipped with a warning
 * and the rest of the file is still read.
 *
 * - `timecode`: timecode formatting and parsing
 */

pub mod timecode;

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::CaptionError;
use crate::subtitle::{renumber, Cue};
use self::timecode::{format_timecode, parse_timing_line, TimecodeStyle};

const WEBVTT_HEADER: &str = "WEBVTT";

/// Supported subtitle file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// SubRip, `HH:MM:SS,mmm` timecodes
    #[default]
    Srt,
    /// WebVTT, `HH:MM:SS.mmm` timecodes and a `WEBVTT` header
    #[serde(rename = "vtt")]
    WebVtt,
}

impl SubtitleFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::WebVtt => "vtt",
        }
    }

    /// Timecode style used by this format
    pub fn timecode_style(&self) -> TimecodeStyle {
        match self {
            Self::Srt => TimecodeStyle::Comma,
            Self::WebVtt => TimecodeStyle::Dot,
        }
    }

    /// Resolve a format from a file extension (with or without the dot)
    pub fn from_extension(extension: &str) -> Result<Self, CaptionError> {
        extension.trim_start_matches('.').parse()
    }

    /// Guess the format of subtitle text from its header
    pub fn detect(content: &str) -> Self {
        let head = content.trim_start_matches('\u{feff}').trim_start();
        if head.starts_with(WEBVTT_HEADER) {
            Self::WebVtt
        } else {
            Self::Srt
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for SubtitleFormat {
    type Err = CaptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "srt" | "subrip" => Ok(Self::Srt),
            "vtt" | "webvtt" => Ok(Self::WebVtt),
            _ => Err(CaptionError::UnknownFormat(s.to_string())),
        }
    }
}

/// Serialize cues to subtitle file text.
///
/// Cues are written in the given order and numbered 1..N. Blank lines inside
/// cue text are dropped since they would end the block early. Cues with no
/// visible text are left out with a warning.
pub fn serialize(cues: &[Cue], format: SubtitleFormat) -> String {
    let style = format.timecode_style();
    let mut output = String::new();

    if format == SubtitleFormat::WebVtt {
        output.push_str(WEBVTT_HEADER);
        output.push_str("\n\n");
    }

    let mut written = 0;
    for cue in cues {
        let text: Vec<&str> = cue
            .text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect();

        if text.is_empty() {
            warn!("Leaving out cue {} at {:.3}s: no text", cue.sequence, cue.start);
            continue;
        }

        written += 1;
        output.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            written,
            format_timecode(cue.start, style),
            format_timecode(cue.end, style),
            text.join("\n")
        ));
    }

    output
}

/// Parse subtitle file text into cues ordered by start time and numbered 1..N
pub fn parse(content: &str, format: SubtitleFormat) -> Vec<Cue> {
    let normalized = content
        .trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    let mut cues = Vec::new();
    let mut skipped = 0;

    for (block_num, block) in split_blocks(&normalized).iter().enumerate() {
        let parsed = match format {
            SubtitleFormat::Srt => parse_srt_block(block),
            SubtitleFormat::WebVtt => parse_vtt_block(block),
        };

        match parsed {
            BlockOutcome::Cue(cue) => cues.push(cue),
            BlockOutcome::Ignored => {}
            BlockOutcome::Malformed(reason) => {
                skipped += 1;
                warn!("Skipping malformed subtitle block {}: {}", block_num + 1, reason);
            }
        }
    }

    cues.sort_by(|a, b| a.start.total_cmp(&b.start));
    renumber(&mut cues);

    debug!("Parsed {} cues ({}), skipped {} blocks", cues.len(), format, skipped);
    cues
}

enum BlockOutcome {
    Cue(Cue),
    Ignored,
    Malformed(String),
}

fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim_end());
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_srt_block(lines: &[&str]) -> BlockOutcome {
    if lines.len() < 3 {
        return BlockOutcome::Malformed(format!("expected at least 3 lines, found {}", lines.len()));
    }

    if lines[0].trim().parse::<usize>().is_err() {
        return BlockOutcome::Malformed(format!("bad index '{}'", lines[0].trim()));
    }

    build_cue(lines[1], &lines[2..])
}

fn parse_vtt_block(lines: &[&str]) -> BlockOutcome {
    let first = lines[0].trim_start();
    if first.starts_with(WEBVTT_HEADER)
        || first.starts_with("NOTE")
        || first.starts_with("STYLE")
        || first.starts_with("REGION")
    {
        return BlockOutcome::Ignored;
    }

    // The cue identifier line is optional
    let timing_idx = if lines[0].contains("-->") { 0 } else { 1 };
    if lines.len() < timing_idx + 2 {
        return BlockOutcome::Malformed(format!("expected at least {} lines, found {}", timing_idx + 2, lines.len()));
    }

    build_cue(lines[timing_idx], &lines[timing_idx + 1..])
}

fn build_cue(timing_line: &str, text_lines: &[&str]) -> BlockOutcome {
    let Some((start, end)) = parse_timing_line(timing_line) else {
        return BlockOutcome::Malformed(format!("bad timecode pair '{}'", timing_line.trim()));
    };

    if end <= start {
        return BlockOutcome::Malformed(format!("end {} <= start {}", end, start));
    }

    let text = text_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    BlockOutcome::Cue(Cue::new(0, start, end, &text))
}
