//! golex: score grading helpers and a lexical analyzer for Go.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use golex::analysis;
use golex::config::Config;
use golex::constants;
use golex::env::Env;
use golex::grading;
use golex::logging;
use golex::report;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;

use cli::args::{AverageArgs, Cli, Command, GradeArgs, LexArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&Env::real(), cli.verbose);

    match cli.command {
        Command::Average(args) => run_average(args),
        Command::Grade(args) => run_grade(args),
        Command::Lex(args) => run_lex(args).await,
        Command::Schema => run_schema(),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

fn run_average(args: AverageArgs) -> Result<()> {
    println!("{}", grading::average(args.score1, args.score2));
    Ok(())
}

fn run_grade(args: GradeArgs) -> Result<()> {
    println!("{}", grading::evaluate(args.points));
    Ok(())
}

/// Print the JSON schema of the `lex --format json` document.
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(golex::output::json::JsonDocument<'static>);
    let rendered = serde_json::to_string_pretty(&schema).context("failed to render schema")?;
    println!("{rendered}");
    Ok(())
}

async fn run_lex(args: LexArgs) -> Result<()> {
    let work_dir = std::env::current_dir().context("could not determine working directory")?;
    let config = Config::load(Some(&work_dir), &Env::real())
        .context("failed to load configuration")?;
    debug!(?config, "resolved configuration");

    // CLI flags take priority over config
    let format = args.format.unwrap_or(config.output.format);
    let write_log = !args.no_log && config.log.enabled;
    let log_dir = args.log_dir.unwrap_or(config.log.dir);
    let fail_on_error = args.fail_on_error || config.output.fail_on_error;

    let reports = analysis::analyze_path(&args.path)
        .await
        .with_context(|| format!("failed to analyze {}", args.path.display()))?;

    print!("{}", format.render(&reports));

    if write_log && !reports.is_empty() {
        let user = report::resolve_user(args.user.as_deref().or(config.log.user.as_deref())).await;
        let timestamp = chrono::Local::now().naive_local();
        let path = report::write_log(&reports, &log_dir, &user, timestamp)
            .await
            .context("failed to write analysis log")?;
        eprintln!("\nLog written: {}", path.display());
    }

    if fail_on_error {
        let errors: usize = reports.iter().map(|r| r.errors.len()).sum();
        if errors > 0 {
            bail!("found {errors} lexical error(s)");
        }
    }

    Ok(())
}
