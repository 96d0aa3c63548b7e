/*!
 * Tests for cue list validation
 */

use titlovi::captions::CaptionPipeline;
use titlovi::layout::AspectRatio;
use titlovi::subtitle::Cue;
use titlovi::validation::{CueIssue, CueValidator};
use crate::common;

/// Test that pipeline output always validates
#[test]
fn test_validate_withPipelineOutput_shouldPass() {
    for aspect in AspectRatio::ALL {
        let cues = CaptionPipeline::default()
            .transform_for_aspect(&common::sample_transcription(), aspect)
            .unwrap();

        let result = CueValidator::new().validate(&cues);

        assert!(result.passed, "{}: {}", aspect, result.summary());
    }
}

/// Test sequence gap reporting
#[test]
fn test_validate_withSequenceGap_shouldReportExpectedNumber() {
    let cues = vec![Cue::new(1, 0.0, 1.0, "a"), Cue::new(3, 1.5, 2.0, "b")];

    let result = CueValidator::new().validate(&cues);

    assert!(!result.passed);
    assert_eq!(
        result.cue_results[1].issues,
        vec![CueIssue::SequenceGap { expected: 2, found: 3 }]
    );
}

/// Test single-cue checks
#[test]
fn test_validateCue_withZeroDuration_shouldReportTimeRange() {
    let result = CueValidator::new().validate_cue(&Cue::new(1, 2.0, 2.0, "tekst"));

    assert!(!result.passed);
    assert_eq!(
        result.issues,
        vec![CueIssue::InvalidTimeRange { start_ms: 2000, end_ms: 2000 }]
    );
}

/// Test issue messages
#[test]
fn test_cueIssue_display_shouldBeReadable() {
    let issue = CueIssue::Overlap { previous: 4, overlap_ms: 250 };

    assert_eq!(issue.to_string(), "Overlaps with cue 4 by 250ms");
    assert_eq!(CueIssue::EmptyText.to_string(), "Empty text");
}

/// Test that touching cues are not overlaps
#[test]
fn test_validate_withTouchingCues_shouldPass() {
    let cues = vec![Cue::new(1, 0.0, 1.0, "a"), Cue::new(2, 1.0, 2.0, "b")];

    assert!(CueValidator::new().validate(&cues).passed);
}
