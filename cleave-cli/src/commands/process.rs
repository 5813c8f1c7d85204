//! Process command implementation

use anyhow::Context;
use clap::Parser;
use cleave_core::{Delimiters, LineProcessor, ProcessorConfig, RunStatistics, Strategy};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::{resolve_sources, FileReader};
use crate::progress::{ProgressLog, ProgressReporter};
use crate::timer::Timer;

/// Break text apart into words, and words into user-perceived characters
#[derive(Debug, Parser)]
#[command(name = "cleave", version, about, long_about = None)]
pub struct ProcessArgs {
    /// Input files or glob patterns; `-` reads standard input
    #[arg(value_name = "FILE/PATTERN", default_value = "-")]
    pub files: Vec<String>,

    /// Split into words using whitespace instead of the Unicode standard method
    #[arg(short, long = "whitespace-split")]
    pub whitespace_split: bool,

    /// Delimit with ASCII unit and record separators instead of newlines
    #[arg(long)]
    pub separators: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CLEAVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Inputs in which at least one line produced output
    pub documents_changed: u64,
    /// Line, word and grapheme totals
    pub stats: RunStatistics,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<RunSummary> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                self.run(&config, BufWriter::new(file))
            }
            None => self.run(&config, BufWriter::new(io::stdout().lock())),
        }
    }

    /// Process every input into `out`
    pub fn run<W: Write>(&self, config: &CliConfig, mut out: W) -> CliResult<RunSummary> {
        let mut processor = self.build_processor(config)?;
        let sources = resolve_sources(&self.files)?;

        log::info!("Segmenting with the {} strategy", processor.strategy());

        let timer = Timer::start();
        let mut progress_log = ProgressLog::new(config.logging.progress_interval());
        let mut reporter = ProgressReporter::new(self.quiet || sources.len() < 2);
        reporter.init_files(sources.len() as u64);

        let mut documents_changed = 0;
        for source in &sources {
            progress_log.tick(documents_changed);

            let reader = FileReader::open(source)?;
            let changed = processor
                .process_reader_with(reader, &mut out, |stats| {
                    progress_log.tick(stats.lines_changed);
                })
                .with_context(|| format!("Failed to process {}", source))?;

            if changed > 0 {
                documents_changed += 1;
            }
            reporter.file_completed(&source.to_string());
        }

        reporter.finish();
        out.flush().context("Failed to flush output")?;

        progress_log.reset();
        let summary = RunSummary {
            documents_changed,
            stats: processor.stats(),
        };
        log_status(&summary);
        timer.report();

        Ok(summary)
    }

    /// Strategy selected by flags, falling back to the config file
    pub fn strategy(&self, config: &CliConfig) -> Strategy {
        if self.whitespace_split {
            Strategy::Whitespace
        } else {
            config.segmentation.strategy
        }
    }

    /// Delimiters selected by flags, falling back to the config file
    pub fn delimiters(&self, config: &CliConfig) -> Delimiters {
        if self.separators {
            Delimiters::ascii_separators()
        } else {
            config.output.separators.delimiters()
        }
    }

    fn build_processor(&self, config: &CliConfig) -> CliResult<LineProcessor> {
        let processor = ProcessorConfig::builder()
            .strategy(self.strategy(config))
            .delimiters(self.delimiters(config))
            .build()?
            .build_processor()?;
        Ok(processor)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a second initialisation (e.g. in tests) keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn log_status(summary: &RunSummary) {
    if summary.documents_changed == 0 {
        log::info!("Cleaved no documents.");
    } else {
        log::info!(
            "Cleaved {} documents into {} words and {} characters.",
            summary.documents_changed,
            summary.stats.words,
            summary.stats.characters
        );
    }
    log::debug!(
        "{} lines read, {} produced output",
        summary.stats.lines,
        summary.stats.lines_changed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeparatorStyle;
    use std::fs;
    use tempfile::TempDir;

    fn args(files: Vec<String>) -> ProcessArgs {
        ProcessArgs {
            files,
            whitespace_split: false,
            separators: false,
            output: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_parse_defaults() {
        let args = ProcessArgs::try_parse_from(["cleave"]).unwrap();
        assert_eq!(args.files, ["-"]);
        assert!(!args.whitespace_split);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_parse_flags() {
        let args =
            ProcessArgs::try_parse_from(["cleave", "-w", "-vv", "--separators", "a.txt", "b.txt"])
                .unwrap();
        assert_eq!(args.files, ["a.txt", "b.txt"]);
        assert!(args.whitespace_split);
        assert!(args.separators);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_flag_overrides_config() {
        let mut config = CliConfig::default();
        config.output.separators = SeparatorStyle::Ascii;

        let mut cli = args(vec![]);
        assert_eq!(cli.strategy(&config), Strategy::Unicode);
        assert_eq!(cli.delimiters(&config), Delimiters::ascii_separators());

        cli.whitespace_split = true;
        config.segmentation.strategy = Strategy::Unicode;
        assert_eq!(cli.strategy(&config), Strategy::Whitespace);
    }

    #[test]
    fn test_run_counts_documents() {
        let dir = TempDir::new().unwrap();
        let one = write_fixture(&dir, "one.txt", "one\n   \t\t\t \ntwo\n");
        let blank = write_fixture(&dir, "blank.txt", "   \n");

        let mut out = Vec::new();
        let summary = args(vec![one, blank])
            .run(&CliConfig::default(), &mut out)
            .unwrap();

        assert_eq!(summary.documents_changed, 1);
        assert_eq!(summary.stats.lines, 4);
        assert_eq!(summary.stats.lines_changed, 2);
        assert_eq!(summary.stats.words, 2);
        assert_eq!(out.len(), 18);
    }

    #[test]
    fn test_run_whitespace_strategy() {
        let dir = TempDir::new().unwrap();
        let file = write_fixture(&dir, "tweet.txt", "This is a #hashtag\n");

        let mut cli = args(vec![file]);
        cli.whitespace_split = true;
        let mut out = Vec::new();
        let summary = cli.run(&CliConfig::default(), &mut out).unwrap();

        assert_eq!(summary.stats.words, 4);
        assert_eq!(summary.stats.characters, 15);
        assert!(String::from_utf8(out).unwrap().starts_with("T\nh\ni\ns\n \n"));
    }

    #[test]
    fn test_run_missing_file_fails() {
        let err = args(vec!["/nonexistent/doc.txt".to_string()])
            .run(&CliConfig::default(), Vec::new())
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = write_fixture(&dir, "in.txt", "Hi.\n");
        let output = dir.path().join("out.txt");

        let mut cli = args(vec![input]);
        cli.output = Some(output.clone());
        let summary = cli.execute().unwrap();

        assert_eq!(summary.documents_changed, 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "H\ni\n \n\n");
    }
}
