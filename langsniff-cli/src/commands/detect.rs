//! Detect command implementation

use anyhow::{Context, Result};
use clap::Args;
use langsniff_core::{Config, Guesser};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::input::{resolve_patterns, FileReader, InputText};
use crate::output::{JsonFormatter, Matches, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Text to detect (default: read standard input)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Allowed languages, alpha-2 or alpha-3 (repeatable)
    #[arg(short, long, value_name = "CODE")]
    pub allow: Vec<String>,

    /// Maximum number of results per input
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report raw detector candidates, script identifiers included
    #[arg(long)]
    pub all: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab separated lines
    Text,
    /// JSON array of results per input
    Json,
    /// Markdown tables
    Markdown,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting language detection");
        log::debug!("Arguments: {:?}", self);

        let guesser = self.build_guesser()?;
        let inputs = self.collect_inputs()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.create_formatter(writer);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        for input in &inputs {
            let matches = self.detect(&guesser, &input.text);
            formatter.format_matches(&input.source, &matches)?;
            progress.file_completed(&input.source);
        }

        progress.finish();
        formatter.finish()?;

        log::info!("Detected {} inputs", inputs.len());
        Ok(())
    }

    /// Detect one text according to the arguments
    pub fn detect(&self, guesser: &Guesser, text: &str) -> Matches {
        if self.all {
            Matches::Candidates(guesser.detect(text, &self.allow))
        } else {
            Matches::Guesses(guesser.guess(text, &self.allow, self.limit))
        }
    }

    /// Build a guesser from the configuration file, if any
    pub fn build_guesser(&self) -> Result<Guesser> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        Guesser::with_config(config).context("Failed to initialize language models")
    }

    fn collect_inputs(&self) -> Result<Vec<InputText>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputText::new("<text>", text.as_str())]);
        }

        if self.input.is_empty() {
            let text = FileReader::read_stream(io::stdin().lock())?;
            return Ok(vec![InputText::new("<stdin>", text)]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());
        files.iter().map(|path| FileReader::read_input(path)).collect()
    }

    fn create_formatter(&self, writer: Box<dyn Write + Send + Sync>) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // keep an already installed logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
