/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use std::path::Path;
use titlovi::codec::SubtitleFormat;
use titlovi::file_utils::FileManager;
use titlovi::layout::AspectRatio;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "postoji.json", "{}")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("ne_postoji.tmp"));
}

/// Test that generate_output_path encodes aspect ratio and format
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/input/intervju.json"),
        Path::new("/tmp/output"),
        AspectRatio::Vertical,
        SubtitleFormat::WebVtt,
    );

    assert_eq!(output_path, Path::new("/tmp/output/intervju.9x16.vtt"));
}

/// Test converted output path keeps the stem
#[test]
fn test_converted_output_path_shouldSwapExtension() {
    let output_path =
        FileManager::converted_output_path(Path::new("/a/film.16x9.srt"), Path::new("/b"), SubtitleFormat::WebVtt);

    assert_eq!(output_path, Path::new("/b/film.16x9.vtt"));
}

/// Test recursive file discovery
#[test]
fn test_find_files_withNestedDirs_shouldFindMatchingExtensions() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("epizode").join("prva");
    fs::create_dir_all(&nested)?;
    common::create_test_file(temp_dir.path(), "a.json", "{}")?;
    common::create_test_file(&nested, "b.JSON", "{}")?;
    common::create_test_file(&nested, "c.srt", "")?;

    let files = FileManager::find_files(temp_dir.path(), ".json")?;

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap().to_string_lossy().eq_ignore_ascii_case("json")));

    Ok(())
}

/// Test input collection for files, directories and missing paths
#[test]
fn test_collect_inputs_shouldHandleFilesDirsAndMissingPaths() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_transcription(temp_dir.path(), "govor.json")?;

    assert_eq!(FileManager::collect_inputs(&file, "json")?, vec![file.clone()]);
    assert_eq!(FileManager::collect_inputs(temp_dir.path(), "json")?, vec![file]);
    assert!(FileManager::collect_inputs(temp_dir.path().join("nema"), "json").is_err());

    Ok(())
}

/// Test that write_to_file creates parent directories
#[tokio::test]
async fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("izlaz").join("titl.srt");

    FileManager::write_to_file(&target, "sadržaj").await?;

    assert_eq!(FileManager::read_to_string(&target).await?, "sadržaj");
    Ok(())
}
