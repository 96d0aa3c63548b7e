// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use titlovi::app_config::{self, Config};
use titlovi::app_controller::{ConvertOptions, Controller, GenerateOptions};
use titlovi::captions::ScriptPolicy;
use titlovi::codec::SubtitleFormat;
use titlovi::layout::AspectRatio;
use titlovi::script::{Script, ScriptMapper};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for SubtitleFormat
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Srt,
    Vtt,
}

impl From<CliFormat> for SubtitleFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Srt => SubtitleFormat::Srt,
            CliFormat::Vtt => SubtitleFormat::WebVtt,
        }
    }
}

/// CLI Wrapper for ScriptPolicy
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliScript {
    Cyrillic,
    Latin,
    Preserve,
}

impl From<CliScript> for ScriptPolicy {
    fn from(script: CliScript) -> Self {
        match script {
            CliScript::Cyrillic => ScriptPolicy::Cyrillic,
            CliScript::Latin => ScriptPolicy::Latin,
            CliScript::Preserve => ScriptPolicy::Preserve,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate subtitles from transcription JSON files
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Convert subtitle files between SRT and WebVTT
    Convert(ConvertArgs),

    /// Transliterate text between Serbian Latin and Cyrillic
    Transliterate {
        /// Text to convert; read from stdin when omitted
        text: Option<String>,

        /// Target script; defaults to the opposite of the detected one
        #[arg(long, value_enum)]
        to: Option<TargetScript>,
    },

    /// Generate shell completions for titlovi
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetScript {
    Cyrillic,
    Latin,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Transcription JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Video aspect ratio (16:9, 9:16, 1:1, landscape, vertical, square)
    #[arg(short, long, default_value = "16:9")]
    aspect: AspectRatio,

    /// Output subtitle format (defaults to the config value)
    #[arg(short, long, value_enum)]
    format: Option<CliFormat>,

    /// Output directory (defaults to each input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Script of the generated text
    #[arg(long, value_enum)]
    script: Option<CliScript>,

    /// Force overwrite of existing output files
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Subtitle file or directory to convert
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Target subtitle format
    #[arg(short, long, value_enum)]
    format: CliFormat,

    /// Output directory (defaults to each input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Re-run timing normalization on the parsed cues
    #[arg(long)]
    normalize: bool,

    /// Force overwrite of existing output files
    #[arg(long)]
    force: bool,
}

/// titlovi - subtitles for short-form video
///
/// Turns speech-recognition output into timed, line-wrapped subtitles for a
/// video aspect ratio, written in Serbian Cyrillic or Latin.
#[derive(Parser, Debug)]
#[command(name = "titlovi")]
#[command(version)]
#[command(about = "Subtitle generation and transliteration for Serbian video")]
#[command(long_about = "titlovi turns transcription JSON into SRT/WebVTT subtitles laid out for a video aspect ratio.

EXAMPLES:
    titlovi generate talk.json                   # 16:9 SRT in Cyrillic next to talk.json
    titlovi generate -a 9:16 -f vtt talks/       # Vertical WebVTT for every transcription
    titlovi generate --script latin talk.json    # Keep Latin script
    titlovi convert -f vtt talk.16x9.srt         # Convert SRT to WebVTT
    titlovi transliterate \"Dobar dan\"            # Prints: Добар дан
    titlovi completions bash > titlovi.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger; the filter is narrowed later with set_max_level
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(LevelFilter::Trace)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = cli.log_level {
        log::set_max_level(app_config::LogLevel::from(level).to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "titlovi", &mut std::io::stdout());
            Ok(())
        }
        Commands::Transliterate { text, to } => run_transliterate(text, to),
        Commands::Generate(args) => {
            let mut config = load_config(&cli.config, cli.log_level)?;
            if let Some(script) = args.script {
                config.script = script.into();
            }

            let options = GenerateOptions {
                aspect: args.aspect,
                format: args.format.map(Into::into).unwrap_or(config.output_format),
                output_dir: args.output_dir,
                force_overwrite: args.force,
            };
            let controller = Controller::with_config(config)?;
            controller.run_generate(&args.input_path, &options).await?;
            Ok(())
        }
        Commands::Convert(args) => {
            let config = load_config(&cli.config, cli.log_level)?;
            let options = ConvertOptions {
                format: args.format.into(),
                output_dir: args.output_dir,
                normalize: args.normalize,
                force_overwrite: args.force,
            };
            let controller = Controller::with_config(config)?;
            controller.run_convert(&args.input_path, &options).await?;
            Ok(())
        }
    }
}

// Load or create configuration; the CLI log level wins over the config one
fn load_config(path: &Path, cli_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = Config::load_or_create(path)?;

    match cli_level {
        Some(level) => config.log_level = level.into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    debug!("Loaded configuration from {:?}", path);
    Ok(config)
}

fn run_transliterate(text: Option<String>, to: Option<TargetScript>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let target = match to {
        Some(TargetScript::Cyrillic) => Script::Cyrillic,
        Some(TargetScript::Latin) => Script::Latin,
        None => match ScriptMapper::detect_script(&text).dominant() {
            Script::Latin => Script::Cyrillic,
            Script::Cyrillic => Script::Latin,
        },
    };

    let converted = match target {
        Script::Cyrillic => ScriptMapper::ensure_target_script(&text),
        Script::Latin => ScriptMapper::ensure_source_script(&text),
    };
    println!("{}", converted.trim_end_matches('\n'));
    Ok(())
}
