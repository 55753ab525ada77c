//! Scan command implementation

use crate::config::CliConfig;
use crate::driver;
use crate::output;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use ustrings_core::{Configuration, Scanner, TrailingRunPolicy};

/// Print the printable Unicode strings found in binary files
#[derive(Debug, Parser)]
#[command(name = "ustrings", version)]
pub struct ScanArgs {
    /// Input files, scanned in the order given
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Minimum length of strings to be printed, in characters
    #[arg(short = 'l', long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Include letters in printable strings
    #[arg(short = 'L', long, value_name = "BOOL", action = ArgAction::Set)]
    pub letters: Option<bool>,

    /// Include numbers in printable strings
    #[arg(short = 'N', long, value_name = "BOOL", action = ArgAction::Set)]
    pub numbers: Option<bool>,

    /// Include space characters in printable strings
    #[arg(short = 'S', long, value_name = "BOOL", action = ArgAction::Set)]
    pub space: Option<bool>,

    /// Include punctuation characters in printable strings
    #[arg(short = 'P', long, value_name = "BOOL", action = ArgAction::Set)]
    pub punctuation: Option<bool>,

    /// Write the byte offset of each string from the beginning of the file
    #[arg(short = 'o', long)]
    pub offset: bool,

    /// Also print a string still open at end of file
    #[arg(long)]
    pub flush_trailing: bool,

    /// Output file (default: stdout)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Scanning {} file(s)", self.files.len());
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = self.resolve_configuration(&file_config)?;
        log::debug!("Resolved configuration: {:?}", config);

        let scanner = Scanner::new(config).context("Failed to prepare scanner")?;
        let mut sink = output::open_sink(self.output.as_deref())?;
        let totals = driver::scan_files(&scanner, &self.files, &mut sink)?;

        log::info!(
            "Scanned {} file(s), {} bytes, {} strings",
            totals.files,
            totals.bytes,
            totals.runs_emitted
        );
        Ok(())
    }

    /// Layer command-line flags over the config file over built-in defaults
    pub fn resolve_configuration(&self, file_config: &CliConfig) -> Result<Configuration> {
        let scan = &file_config.scan;
        let trailing_run = if self.flush_trailing {
            TrailingRunPolicy::Flush
        } else {
            scan.trailing.into()
        };

        Configuration::builder()
            .min_run_length(self.min_length.unwrap_or(scan.min_length))
            .letters(self.letters.unwrap_or(scan.letters))
            .numbers(self.numbers.unwrap_or(scan.numbers))
            .space(self.space.unwrap_or(scan.space))
            .punctuation(self.punctuation.unwrap_or(scan.punctuation))
            .emit_offsets(self.offset || scan.offsets)
            .trailing_run(trailing_run)
            .build()
            .context("Invalid scan options")
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}
