//! birthweek — who has a birthday in the coming week.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use birthweek::config::Config;
use birthweek::constants;
use birthweek::demo;
use birthweek::env::Env;
use birthweek::output;
use birthweek::roster;
use birthweek::schedule;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use birthweek::models::OutputFormat;
use cli::args::{CheckArgs, Cli, Command, DemoArgs, WeekArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, &Env::real());

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber.
///
/// `BIRTHWEEK_LOG` takes an `EnvFilter` directive; without it only
/// warnings are shown, or debug output with `--verbose`.
fn init_logging(verbose: bool, env: &Env) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = env
        .non_empty(constants::ENV_LOG)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Week(args) => run_week(args),
        Command::Check(args) => run_check(args),
        Command::Demo(args) => run_demo(args),
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

/// List upcoming birthdays from a users file.
fn run_week(args: WeekArgs) -> Result<()> {
    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let config = Config::load(Some(&work_dir), &Env::real())
        .context("failed to load configuration")?;

    let settings = args.resolve(&config).map_err(|e| anyhow::anyhow!("{e}"))?;
    let today = cli::resolve_today(settings.today);
    info!(%today, users = %settings.users.display(), "computing upcoming birthdays");

    let users = roster::load_users(&settings.users)?;
    let week = schedule::get_birthdays_per_week_with(&users, today, settings.leap_day)
        .context("failed to group birthdays")?;

    print!("{}", output::render(settings.format, &week));
    Ok(())
}

/// Validate a users file without computing anything.
fn run_check(args: CheckArgs) -> Result<()> {
    use colored::Colorize;

    let users = roster::load_users(&args.file)?;
    println!(
        "  {} {}  {} user(s)",
        "✔".green().bold(),
        args.file.display().to_string().bold(),
        users.len(),
    );
    Ok(())
}

/// Run the grouper on the built-in sample user and print plain lines.
fn run_demo(args: DemoArgs) -> Result<()> {
    let config = Config::load(None, &Env::real()).context("failed to load configuration")?;
    let today = cli::resolve_today(args.today.or(config.schedule.today));
    let week = demo::run(today);
    print!("{}", output::render(OutputFormat::Plain, &week));
    Ok(())
}
