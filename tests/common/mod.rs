/*!
 * Common test utilities for the titlovi test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use titlovi::subtitle::{Cue, TranscriptionResult, Word};

/// Routes library log output through the test harness
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Word-level transcription JSON as a recognizer would return it
pub const SAMPLE_TRANSCRIPTION_JSON: &str = r#"{
  "language": "sr",
  "duration": 9.0,
  "words": [
    {"word": "Dobrodošli", "start": 0.0, "end": 0.6},
    {"word": "u", "start": 0.65, "end": 0.7},
    {"word": "Beograd.", "start": 0.75, "end": 1.4},
    {"word": "Ovo", "start": 2.5, "end": 2.8},
    {"word": "je", "start": 2.85, "end": 2.95},
    {"word": "naša", "start": 3.0, "end": 3.3},
    {"word": "njiva", "start": 3.35, "end": 3.8},
    {"word": "i", "start": 3.85, "end": 3.9},
    {"word": "ljubav", "start": 3.95, "end": 4.4},
    {"word": "prema", "start": 4.45, "end": 4.8},
    {"word": "džemu", "start": 4.85, "end": 5.3},
    {"word": "Hvala", "start": 7.5, "end": 8.0},
    {"word": "vam!", "start": 8.05, "end": 8.4}
  ]
}"#;

/// Creates a sample transcription file for testing
pub fn create_test_transcription(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_TRANSCRIPTION_JSON)
}

/// Parsed form of `SAMPLE_TRANSCRIPTION_JSON`
pub fn sample_transcription() -> TranscriptionResult {
    serde_json::from_str(SAMPLE_TRANSCRIPTION_JSON).expect("sample transcription is valid JSON")
}

/// Builds a word list from (text, start, end) triples
pub fn words(entries: &[(&str, f64, f64)]) -> Vec<Word> {
    entries.iter().map(|(text, start, end)| Word::new(text, *start, *end)).collect()
}

/// Creates a sample SRT subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = "1\n\
00:00:01,000 --> 00:00:04,000\n\
Ово је пробни титл.\n\
\n\
2\n\
00:00:05,000 --> 00:00:09,000\n\
Има више уноса.\n\
\n\
3\n\
00:00:10,000 --> 00:00:14,000\n\
За потребе тестирања.\n";
    create_test_file(dir, filename, content)
}

/// Asserts the final cue list invariants
pub fn assert_cue_invariants(cues: &[Cue]) {
    for (i, cue) in cues.iter().enumerate() {
        assert_eq!(cue.sequence, i + 1, "cue numbering is not contiguous");
        assert!(cue.end > cue.start, "cue {} has end <= start", cue.sequence);
        assert!(cue.start >= 0.0, "cue {} starts before zero", cue.sequence);
    }
    for pair in cues.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "cue {} overlaps cue {}",
            pair[0].sequence,
            pair[1].sequence
        );
    }
}
