/*!
 * Tests for aspect ratios and layout budgets
 */

use titlovi::errors::CaptionError;
use titlovi::layout::{AspectRatio, LayoutConfig};

/// Test the built-in presets
#[test]
fn test_aspectRatio_layout_shouldReturnPresets() {
    assert_eq!(AspectRatio::Landscape.layout(), LayoutConfig::new(42, 2).unwrap());
    assert_eq!(AspectRatio::Vertical.layout(), LayoutConfig::new(24, 2).unwrap());
    assert_eq!(AspectRatio::Square.layout(), LayoutConfig::new(32, 2).unwrap());
}

/// Test tag parsing and display round trip
#[test]
fn test_aspectRatio_displayAndParse_shouldRoundTrip() {
    for aspect in AspectRatio::ALL {
        assert_eq!(aspect.to_string().parse::<AspectRatio>().unwrap(), aspect);
    }
    assert_eq!("widescreen".parse::<AspectRatio>().unwrap(), AspectRatio::Landscape);
}

/// Test unknown aspect tags
#[test]
fn test_aspectRatio_fromStr_withUnknownTag_shouldFail() {
    assert_eq!(
        "21:9".parse::<AspectRatio>(),
        Err(CaptionError::UnknownAspectRatio("21:9".to_string()))
    );
}

/// Test serde names of aspect ratios and layouts
#[test]
fn test_layout_serde_shouldUseLowercaseNames() {
    assert_eq!(serde_json::to_string(&AspectRatio::Vertical).unwrap(), "\"vertical\"");

    let layout: LayoutConfig = serde_json::from_str(r#"{"max_chars_per_line": 30, "max_lines": 3}"#).unwrap();
    assert_eq!(layout, LayoutConfig::new(30, 3).unwrap());
}

/// Test that a deserialized zero budget is caught by validate
#[test]
fn test_layout_validate_withDeserializedZero_shouldFail() {
    let layout: LayoutConfig = serde_json::from_str(r#"{"max_chars_per_line": 0, "max_lines": 1}"#).unwrap();

    assert!(matches!(layout.validate(), Err(CaptionError::InvalidLayout { .. })));
}
