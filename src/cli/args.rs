//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use golex::output::OutputFormat;

/// Score grading helpers and a lexical analyzer for Go source.
#[derive(Parser, Debug)]
#[command(name = "golex", version = golex::constants::VERSION)]
pub struct Cli {
    /// Emit debug diagnostics on stderr (overridden by GOLEX_LOG).
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the truncated integer average of two scores.
    Average(AverageArgs),

    /// Print the grade label for a score.
    Grade(GradeArgs),

    /// Tokenize a Go file or every Go file under a directory.
    Lex(LexArgs),

    /// Print the JSON schema of `lex --format json` output.
    Schema,

    /// Print version and build information.
    Version,
}

/// Arguments for the `average` subcommand.
#[derive(Parser, Debug)]
pub struct AverageArgs {
    #[arg(allow_negative_numbers = true)]
    pub score1: i64,

    #[arg(allow_negative_numbers = true)]
    pub score2: i64,
}

/// Arguments for the `grade` subcommand.
#[derive(Parser, Debug)]
pub struct GradeArgs {
    #[arg(allow_negative_numbers = true)]
    pub points: i64,
}

/// Arguments for the `lex` subcommand.
#[derive(Parser, Debug)]
pub struct LexArgs {
    /// Go source file or directory to analyze.
    pub path: PathBuf,

    /// Output format (default: config, then terminal).
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Do not write a log file.
    #[arg(long, default_value_t = false)]
    pub no_log: bool,

    /// Directory for the log file (default: ./logs).
    #[arg(long, conflicts_with = "no_log")]
    pub log_dir: Option<PathBuf>,

    /// User recorded in the log (default: git user.name).
    #[arg(long)]
    pub user: Option<String>,

    /// Exit non-zero when any lexical error is found.
    #[arg(long, default_value_t = false)]
    pub fail_on_error: bool,
}
