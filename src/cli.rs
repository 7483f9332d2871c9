use crate::matcher::ColorKey;
use clap::Parser;
use std::path::PathBuf;

/// Recursive regex path finder. Walks a directory tree up to a bounded
/// depth, matching every encountered path against a pattern; with no path
/// it filters candidate lines from standard input instead.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory or file to search from; when omitted, candidate lines are
    /// read from standard input
    pub path: Option<PathBuf>,

    /// Command template executed on every match; `{}` stands for the
    /// matched subject, e.g. -a "wc -l {}"
    #[arg(short, long)]
    pub action: Option<String>,

    /// Regular expression applied to each path or input line
    #[arg(short, long, default_value = ".*")]
    pub regex: String,

    /// Suppress per-subject output; matches still fire actions
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Case-insensitive matching
    #[arg(short, long, default_value_t = false)]
    pub ignore_case: bool,

    /// Maximum recursion depth, >= 0; 0 evaluates the root only
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    pub maxdepth: String,

    /// Print only the matched substrings, space separated, instead of the
    /// whole subject
    #[arg(short, long, default_value_t = false)]
    pub only_matches: bool,

    /// Highlight color used for matches on capable terminals
    #[arg(long, value_enum, default_value_t = ColorKey::Red)]
    pub color: ColorKey,

    /// Write log records to this file instead of stderr
    #[arg(long)]
    pub log: Option<PathBuf>,
}
