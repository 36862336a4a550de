//! Command-line interface for codepack.
//!
//! Packs a directory into one Markdown document written next to where the command runs,
//! unless an explicit output path is given.

use clap::{ArgAction, Parser, ValueEnum};
use codepack::output;
use codepack::{
    BinaryDetection, BinaryPolicy, CodepackBuilder, CodepackError, CodepackOptions, codepack,
    source_name,
};
use std::path::PathBuf;
use std::process::exit;

/// Pack a directory of code files into a single Markdown file
#[derive(Parser)]
#[command(name = "codepack", version, about, long_about = None)]
struct Cli {
    /// Directory to pack (default current dir)
    #[arg(default_value = ".")]
    source: PathBuf,

    /// Output file (default <directory-name>.md in the current dir)
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Binary detection strategy
    #[arg(long, default_value = "utf8", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Extra ignore patterns, applied after the ignore file (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Skip .gitignore / .codepackignore and use the built-in ignore list
    #[arg(long)]
    no_ignore_files: bool,

    /// Keep binary files, with a placeholder instead of their content
    #[arg(long)]
    include_binary: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => output::OutputFormat::Markdown,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "utf8" => Ok(BinaryDetection::Utf8),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    /// Resolves the output path first so the walk can leave it out.
    fn into_options(self) -> Result<(CodepackOptions, output::OutputFormat, PathBuf), CodepackError> {
        let format: output::OutputFormat = self.format.into();
        let output_path = match self.output {
            Some(path) => path,
            None => output::default_output_path(&source_name(&self.source)?, format),
        };
        let policy = if self.include_binary {
            BinaryPolicy::Placeholder
        } else {
            BinaryPolicy::Exclude
        };
        let mut builder = CodepackBuilder::new(self.source)
            .use_ignore_files(!self.no_ignore_files)
            .ignore_patterns(self.ignore_patterns)
            .binary_detection(self.binary_detection)
            .binary_policy(policy)
            .follow_links(self.follow_links)
            .exclude_path(&output_path);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        Ok((builder.build(), format, output_path))
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
#[cfg(feature = "logging")]
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default = match verbose {
        0 => "codepack=warn",
        1 => "codepack=debug",
        _ => "codepack=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_tracing(cli.verbose);

    let (options, format, path) = match cli.into_options() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let snapshot = match codepack(options) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = output::write_document(&snapshot, format, &path) {
        eprintln!("Error: {}", e);
        exit(1);
    }

    let label = match format {
        output::OutputFormat::Markdown => "Markdown",
        output::OutputFormat::Json => "JSON",
    };
    println!("{} file created successfully: {}", label, path.display());
}
