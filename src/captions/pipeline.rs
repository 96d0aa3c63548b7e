/*!
 * Caption pipeline orchestration.
 *
 * Turns a transcription and a layout budget into a final, normalized cue
 * list: segment → pad → format → script conversion → timing normalization.
 * Every stage is a pure transform over in-memory values, so one pipeline can
 * serve concurrent callers.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::captions::formatter::{CueFormatter, TimeWindow};
use crate::captions::segmenter::{Segmenter, SegmenterConfig};
use crate::captions::timing::{TimingConfig, TimingNormalizer};
use crate::codec::{self, SubtitleFormat};
use crate::errors::CaptionError;
use crate::language_utils;
use crate::layout::{AspectRatio, LayoutConfig};
use crate::script::ScriptMapper;
use crate::subtitle::{renumber, Cue, RawSegment, TranscriptionResult, TranscriptionTiming};

/// Language the transliteration tables are written for
const TRANSLITERATION_LANGUAGE: &str = "sr";

/// Script the final cue text is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptPolicy {
    /// Convert Latin text to Cyrillic
    #[default]
    Cyrillic,
    /// Convert Cyrillic text to Latin
    Latin,
    /// Keep the recognized script
    Preserve,
}

/// Settings for every pipeline stage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Segment closing thresholds
    #[serde(default)]
    pub segmentation: SegmenterConfig,

    /// Duration and gap limits
    #[serde(default)]
    pub timing: TimingConfig,

    /// Output script
    #[serde(default)]
    pub script: ScriptPolicy,
}

/// Transcription → cue list orchestrator
pub struct CaptionPipeline {
    segmenter: Segmenter,
    normalizer: TimingNormalizer,
    script: ScriptPolicy,
}

impl Default for CaptionPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl CaptionPipeline {
    /// Create a pipeline from stage settings
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            segmenter: Segmenter::with_config(config.segmentation),
            normalizer: TimingNormalizer::with_config(config.timing),
            script: config.script,
        }
    }

    /// Produce the final cue list for a transcription under a layout budget.
    ///
    /// Fails only on an impossible layout; noisy timing and empty input are
    /// absorbed (empty input gives an empty list).
    pub fn transform(
        &self,
        transcription: &TranscriptionResult,
        layout: &LayoutConfig,
    ) -> Result<Vec<Cue>, CaptionError> {
        layout.validate()?;

        let segments = match &transcription.timing {
            TranscriptionTiming::Words(words) => self.segmenter.segment(words),
            TranscriptionTiming::Segments(segments) => self.segmenter.passthrough(segments),
        };
        let segments = self.segmenter.pad_short_segments(segments);

        let mut cues = self.format_segments(&segments, layout);
        debug!("Formatted {} segments into {} cues", segments.len(), cues.len());

        self.apply_script(&mut cues, &transcription.language);

        let cues = self.normalizer.normalize(cues);
        debug!(
            "Pipeline produced {} cues for {:.1}s of {} audio",
            cues.len(),
            transcription.duration,
            transcription.language
        );
        Ok(cues)
    }

    /// Produce cues using the built-in layout for an aspect ratio
    pub fn transform_for_aspect(
        &self,
        transcription: &TranscriptionResult,
        aspect: AspectRatio,
    ) -> Result<Vec<Cue>, CaptionError> {
        self.transform(transcription, &aspect.layout())
    }

    /// Serialize cues to a downloadable subtitle file
    pub fn export(cues: &[Cue], format: SubtitleFormat) -> String {
        codec::serialize(cues, format)
    }

    /// Single SRT text blob handed to the video encoder for burn-in
    pub fn burn_in_text(cues: &[Cue]) -> String {
        codec::serialize(cues, SubtitleFormat::Srt)
    }

    fn format_segments(&self, segments: &[RawSegment], layout: &LayoutConfig) -> Vec<Cue> {
        let mut cues: Vec<Cue> = segments
            .iter()
            .flat_map(|segment| {
                CueFormatter::format(&segment.text, TimeWindow::new(segment.start, segment.end), layout)
            })
            .collect();
        renumber(&mut cues);
        cues
    }

    fn apply_script(&self, cues: &mut [Cue], language: &str) {
        if self.script == ScriptPolicy::Preserve {
            return;
        }

        if !language_utils::language_codes_match(language, TRANSLITERATION_LANGUAGE) {
            warn!(
                "Transliteration tables are for Serbian, transcription language is '{}'",
                language
            );
        }
        if let Some(declared) = language_utils::script_subtag(language) {
            debug!("Transcription declares {:?} script", declared);
        }

        let mut converted = 0;
        for cue in cues.iter_mut() {
            let text = match self.script {
                ScriptPolicy::Cyrillic => ScriptMapper::ensure_target_script(&cue.text),
                ScriptPolicy::Latin => ScriptMapper::ensure_source_script(&cue.text),
                ScriptPolicy::Preserve => continue,
            };

            if text != cue.text {
                cue.original_text = Some(std::mem::replace(&mut cue.text, text));
                converted += 1;
            }
        }

        debug!("Converted {} of {} cues to {:?}", converted, cues.len(), self.script);
    }
}
