use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::captions::{CaptionPipeline, TimingNormalizer};
use crate::codec::{self, SubtitleFormat};
use crate::file_utils::{FileManager, TRANSCRIPTION_EXTENSION};
use crate::layout::AspectRatio;
use crate::subtitle::TranscriptionResult;
use crate::validation::CueValidator;

// @module: Application controller for the CLI workflows

// @struct: Options for subtitle generation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    // @field: Target video aspect ratio
    pub aspect: AspectRatio,
    // @field: Output format
    pub format: SubtitleFormat,
    // @field: Output directory, defaults to each input's directory
    pub output_dir: Option<PathBuf>,
    // @field: Overwrite existing output files
    pub force_overwrite: bool,
}

// @struct: Options for subtitle conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    // @field: Output format
    pub format: SubtitleFormat,
    // @field: Output directory, defaults to each input's directory
    pub output_dir: Option<PathBuf>,
    // @field: Re-run timing normalization on the parsed cues
    pub normalize: bool,
    // @field: Overwrite existing output files
    pub force_overwrite: bool,
}

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Output written to the path
    Written(PathBuf),
    /// Output already existed and was kept
    Skipped(PathBuf),
}

/// Counts for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &Result<FileOutcome>) {
        match outcome {
            Ok(FileOutcome::Written(_)) => self.processed += 1,
            Ok(FileOutcome::Skipped(_)) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }
}

// Per-file work in a batch run
enum BatchJob<'a> {
    Generate(&'a GenerateOptions),
    Convert(&'a ConvertOptions),
}

/// Main application controller for caption generation and conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Pipeline built from the configuration
    pipeline: CaptionPipeline,
}

impl Controller {
    // @method: Create a controller, validating the configuration first
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let pipeline = CaptionPipeline::new(config.pipeline_config());
        Ok(Self { config, pipeline })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate subtitles for a transcription file or every transcription in a directory
    pub async fn run_generate(&self, input_path: &Path, options: &GenerateOptions) -> Result<RunSummary> {
        let inputs = FileManager::collect_inputs(input_path, TRANSCRIPTION_EXTENSION)?;
        if inputs.is_empty() {
            return Err(anyhow!("No transcription files found in: {:?}", input_path));
        }

        self.run_batch(&inputs, "Generating", BatchJob::Generate(options)).await
    }

    /// Convert a subtitle file or every subtitle file in a directory
    pub async fn run_convert(&self, input_path: &Path, options: &ConvertOptions) -> Result<RunSummary> {
        let inputs = if FileManager::dir_exists(input_path) {
            let mut inputs = Vec::new();
            for format in [SubtitleFormat::Srt, SubtitleFormat::WebVtt] {
                if format != options.format {
                    inputs.extend(FileManager::find_files(input_path, format.extension())?);
                }
            }
            inputs
        } else {
            FileManager::collect_inputs(input_path, options.format.extension())?
        };
        if inputs.is_empty() {
            return Err(anyhow!("No subtitle files found in: {:?}", input_path));
        }

        self.run_batch(&inputs, "Converting", BatchJob::Convert(options)).await
    }

    async fn process(&self, input: &Path, job: &BatchJob<'_>) -> Result<FileOutcome> {
        match job {
            BatchJob::Generate(options) => self.generate_file(input, options).await,
            BatchJob::Convert(options) => self.convert_file(input, options).await,
        }
    }

    async fn run_batch(&self, inputs: &[PathBuf], verb: &str, job: BatchJob<'_>) -> Result<RunSummary> {
        let start_time = Instant::now();
        let mut summary = RunSummary::default();

        if let [input] = inputs {
            let outcome = Ok(self.process(input, &job).await?);
            summary.record(&outcome);
            Self::report(input, &outcome);
            return Ok(summary);
        }

        let progress_bar = ProgressBar::new(inputs.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("=> "));

        for input in inputs {
            let file_name = input
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress_bar.set_message(format!("{}: {}", verb, file_name));

            let outcome = self.process(input, &job).await;
            summary.record(&outcome);
            progress_bar.suspend(|| Self::report(input, &outcome));
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("Done");
        info!(
            "Completed in {}: {} processed, {} skipped, {} errors",
            Self::format_duration(start_time.elapsed()),
            summary.processed,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }

    fn report(input: &Path, outcome: &Result<FileOutcome>) {
        match outcome {
            Ok(FileOutcome::Written(path)) => info!("Success: {}", path.display()),
            Ok(FileOutcome::Skipped(path)) => warn!("{}", Self::skipped_message(path)),
            Err(e) => error!("Error processing file {:?}: {:#}", input, e),
        }
    }

    fn skipped_message(path: &Path) -> String {
        format!("Skipping {:?}, output already exists (use --force to overwrite)", path)
    }

    fn output_dir_for(input: &Path, output_dir: Option<&PathBuf>) -> PathBuf {
        match output_dir {
            Some(dir) => dir.clone(),
            None => input.parent().unwrap_or(Path::new(".")).to_path_buf(),
        }
    }

    /// Run the pipeline on one transcription JSON file
    pub async fn generate_file(&self, input: &Path, options: &GenerateOptions) -> Result<FileOutcome> {
        let output_dir = Self::output_dir_for(input, options.output_dir.as_ref());
        let output_path = FileManager::generate_output_path(input, &output_dir, options.aspect, options.format);
        if output_path.exists() && !options.force_overwrite {
            return Ok(FileOutcome::Skipped(output_path));
        }

        let content = FileManager::read_to_string(input).await?;
        let transcription: TranscriptionResult = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse transcription: {:?}", input))?;

        let layout = self.config.layout_for(options.aspect);
        let cues = self.pipeline.transform(&transcription, &layout)?;
        if cues.is_empty() {
            warn!("Transcription {:?} produced no cues", input);
        }

        FileManager::write_to_file(&output_path, &CaptionPipeline::export(&cues, options.format)).await?;
        Ok(FileOutcome::Written(output_path))
    }

    /// Re-serialize one subtitle file in another format
    pub async fn convert_file(&self, input: &Path, options: &ConvertOptions) -> Result<FileOutcome> {
        let output_dir = Self::output_dir_for(input, options.output_dir.as_ref());
        let output_path = FileManager::converted_output_path(input, &output_dir, options.format);
        if output_path.exists() && !options.force_overwrite {
            return Ok(FileOutcome::Skipped(output_path));
        }

        let content = FileManager::read_to_string(input).await?;
        let source_format = input
            .extension()
            .and_then(|ext| SubtitleFormat::from_extension(&ext.to_string_lossy()).ok())
            .unwrap_or_else(|| SubtitleFormat::detect(&content));

        let mut cues = codec::parse(&content, source_format);
        if options.normalize {
            cues = TimingNormalizer::with_config(self.config.timing.clone()).normalize(cues);
        } else {
            let result = CueValidator::new().validate(&cues);
            if !result.passed {
                warn!("{:?} has {} timing issues: {}", input, result.total_issues, result.summary());
            }
        }
        debug!("Converting {} cues from {} to {}", cues.len(), source_format, options.format);

        FileManager::write_to_file(&output_path, &codec::serialize(&cues, options.format)).await?;
        Ok(FileOutcome::Written(output_path))
    }

    // Format duration in a human-readable format
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
