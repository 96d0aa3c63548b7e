use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::codec::SubtitleFormat;
use crate::layout::AspectRatio;

// @module: File and directory utilities for the CLI

/// Extension of transcription files
pub const TRANSCRIPTION_EXTENSION: &str = "json";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @generates: Output path for a generated subtitle file
    // @params: input_file, output_dir, aspect ratio, subtitle format
    // @example: talk.json → <output_dir>/talk.9x16.srt
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        aspect: AspectRatio,
        format: SubtitleFormat,
    ) -> PathBuf {
        let stem = input_file.as_ref().file_stem().unwrap_or_default();

        let output_filename = format!(
            "{}.{}.{}",
            stem.to_string_lossy(),
            aspect.tag().replace(':', "x"),
            format.extension()
        );

        output_dir.as_ref().join(output_filename)
    }

    // @generates: Output path for a converted subtitle file (same stem, new extension)
    pub fn converted_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        format: SubtitleFormat,
    ) -> PathBuf {
        let stem = input_file.as_ref().file_stem().unwrap_or_default();
        output_dir
            .as_ref()
            .join(format!("{}.{}", stem.to_string_lossy(), format.extension()))
    }

    /// Collect input files: the path itself, or every file with the given
    /// extension below it when it is a directory
    pub fn collect_inputs<P: AsRef<Path>>(path: P, extension: &str) -> Result<Vec<PathBuf>> {
        let path = path.as_ref();

        if Self::file_exists(path) {
            return Ok(vec![path.to_path_buf()]);
        }
        if Self::dir_exists(path) {
            return Self::find_files(path, extension);
        }

        Err(anyhow!("Input path does not exist: {:?}", path))
    }

    /// Find files with a specific extension in a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let extension = extension.trim_start_matches('.');
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            let matches = path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
            if path.is_file() && matches {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string without blocking the runtime
    pub async fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file without blocking the runtime, creating parent directories
    pub async fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }
}
