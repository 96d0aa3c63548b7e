/*!
 * Caption generation stages.
 *
 * - `segmenter`: groups word timestamps into raw segments
 * - `formatter`: wraps segment text into cues under a layout budget
 * - `timing`: clamps durations and removes overlaps
 * - `pipeline`: runs the stages in order and applies the script policy
 */

pub mod formatter;
pub mod pipeline;
pub mod segmenter;
pub mod timing;

pub use formatter::{CueFormatter, TimeWindow};
pub use pipeline::{CaptionPipeline, PipelineConfig, ScriptPolicy};
pub use segmenter::{Segmenter, SegmenterConfig};
pub use timing::{TimingConfig, TimingNormalizer};
