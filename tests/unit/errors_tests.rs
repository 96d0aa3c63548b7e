/*!
 * Tests for error types and conversions
 */

use titlovi::errors::{AppError, CaptionError};

/// Test caption error messages
#[test]
fn test_captionError_display_shouldDescribeProblem() {
    let error = CaptionError::InvalidLayout {
        max_chars_per_line: 0,
        max_lines: 2,
    };
    assert!(error.to_string().contains("max_chars_per_line=0"));

    assert_eq!(CaptionError::UnknownFormat("ass".to_string()).to_string(), "Unknown subtitle format: ass");
}

/// Test conversion of caption errors into app errors
#[test]
fn test_appError_fromCaptionError_shouldWrap() {
    let error: AppError = CaptionError::ProjectNotFound("abc".to_string()).into();

    assert!(matches!(error, AppError::Caption(CaptionError::ProjectNotFound(_))));
    assert_eq!(error.to_string(), "Caption error: Project not found: abc");
}

/// Test conversions from io and serde errors
#[test]
fn test_appError_fromIoAndJson_shouldMapToKinds() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert!(matches!(AppError::from(io_error), AppError::File(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(AppError::from(json_error), AppError::Config(_)));

    let other = AppError::from(anyhow::anyhow!("boom"));
    assert_eq!(other.to_string(), "Unknown error: boom");
}

/// Test that caption errors survive an anyhow round trip
#[test]
fn test_captionError_throughAnyhow_shouldDowncast() {
    let error: anyhow::Error = CaptionError::InvalidCues("cue 2: Empty text".to_string()).into();

    assert_eq!(
        error.downcast_ref::<CaptionError>(),
        Some(&CaptionError::InvalidCues("cue 2: Empty text".to_string()))
    );
}
