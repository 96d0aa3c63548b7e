/*!
 * # titlovi - subtitles for short-form video
 *
 * A Rust library that turns speech-recognition output into subtitle cues laid
 * out for a video aspect ratio and written in Serbian Cyrillic or Latin.
 *
 * ## Features
 *
 * - Word-level or segment-level transcriptions as input
 * - Line wrapping under per-aspect-ratio character and line budgets
 * - Duration clamping and overlap removal
 * - Serbian Latin ↔ Cyrillic transliteration with digraph handling
 * - SRT and WebVTT serialization and tolerant parsing
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `captions`: the caption pipeline and its stages:
 *   - `captions::segmenter`: word grouping
 *   - `captions::formatter`: line wrapping and cue splitting
 *   - `captions::timing`: timing normalization
 *   - `captions::pipeline`: stage orchestration
 * - `script`: Latin ↔ Cyrillic mapping
 * - `codec`: SRT / WebVTT text formats
 * - `layout`: aspect ratios and layout budgets
 * - `subtitle`: transcription and cue data types
 * - `validation`: cue list invariant checks
 * - `store`: caption projects behind a repository interface
 * - `app_config`: Configuration management
 * - `app_controller`: CLI workflows over files and directories
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod captions;
pub mod codec;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod layout;
pub mod script;
pub mod store;
pub mod subtitle;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use captions::{CaptionPipeline, PipelineConfig, ScriptPolicy};
pub use codec::SubtitleFormat;
pub use errors::{AppError, CaptionError};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part2t};
pub use layout::{AspectRatio, LayoutConfig};
pub use script::{cyrillic_to_latin, latin_to_cyrillic, ScriptMapper};
pub use subtitle::{Cue, RawSegment, TranscriptionResult, Word};
