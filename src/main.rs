//! CLI entry point for wpfind

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use wpfind::{ElapsedLog, NullLog, OutputFormat, ScanConfig, ScanWalker, render};

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

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wpfind")]
#[command(about = "Find WordPress installations under a directory tree")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Also scan paths matching the built-in ignore list
    /// (wp-content, node_modules, .git, cache, themes, plugins)
    #[arg(short, long)]
    all: bool,

    /// Report installs at most N directories below the root
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log scan progress to stderr with elapsed timestamps
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let root = match args.path.canonicalize() {
        Ok(path) => path,
        Err(_) => {
            eprintln!(
                "wpfind: cannot access '{}': No such file or directory",
                args.path.display()
            );
            process::exit(1);
        }
    };

    let config = ScanConfig {
        root,
        scan_all: args.all,
        max_depth: args.level,
    };
    let walker = ScanWalker::new(config);

    let results = if args.verbose {
        let mut log = ElapsedLog::new(std::io::stderr());
        walker.scan(&mut log)
    } else {
        walker.scan(&mut NullLog)
    };

    // Color only ever applies to the table; the structured formats stay plain.
    let use_color = match args.format {
        OutputFormat::Table => should_use_color(args.color),
        _ => false,
    };

    if let Err(e) = render(&results, args.format, use_color) {
        eprintln!("wpfind: error writing output: {}", e);
        process::exit(1);
    }
}
