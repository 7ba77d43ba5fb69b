//! CLI entry point for pathtree

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use pathtree::{Error, ExclusionSet, OutputConfig, TextRenderer, build_tree, print_json};
use tracing::{Level, debug, warn};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Diagnostic verbosity on stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pathtree")]
#[command(about = "Print the paths in a directory, zip archive or gzip file as an indented tree")]
#[command(version)]
struct Args {
    /// Inputs to display (directories, zip-format archives, gzip files)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Input format: dir, zip, gzip, or an extension such as apk, docx or tgz
    /// (inferred from each input when omitted)
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    format: Option<String>,

    /// Path component names to hide at any depth, comma separated (can be used multiple times)
    #[arg(short = 'b', long = "block", value_name = "NAMES")]
    block: Vec<String>,

    /// String written once per level of indentation
    #[arg(long = "tab", value_name = "STRING", default_value = "  ")]
    tab: String,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log diagnostics to stderr at this level
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "off")]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn run(
    path: &Path,
    args: &Args,
    exclusions: &ExclusionSet,
    renderer: &TextRenderer,
) -> pathtree::Result<()> {
    let tree = build_tree(path, args.format.as_deref(), exclusions)?;
    if tree.is_empty() {
        warn!(input = %path.display(), "nothing to show");
    }
    if args.json {
        print_json(&tree)
    } else {
        renderer.print(&tree)
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    let exclusions: ExclusionSet = args.block.iter().collect();
    if !exclusions.is_empty() {
        debug!(names = exclusions.len(), "exclusions configured");
    }

    let renderer = TextRenderer::new(OutputConfig {
        indent: args.tab.clone(),
        use_color: should_use_color(args.color),
    });

    let mut failed = false;
    for path in &args.paths {
        match run(path, &args, &exclusions, &renderer) {
            Ok(()) => {}
            Err(e @ Error::Render(_)) => {
                // stdout is shared, so later inputs would fail the same way
                eprintln!("pathtree: {}", e);
                process::exit(1);
            }
            Err(e @ Error::UnsupportedFormat(_)) => {
                eprintln!("pathtree: {}: {}", path.display(), e);
                failed = true;
            }
            Err(e) => {
                eprintln!("pathtree: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
