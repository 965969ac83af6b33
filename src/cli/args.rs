//! Clap argument types, validation, and settings resolution.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use birthweek::config::Config;
use birthweek::models::{LeapDayPolicy, OutputFormat};

use super::parse_date;

/// Who has a birthday in the coming week, grouped by weekday.
#[derive(Parser, Debug)]
#[command(name = "birthweek", version = birthweek::constants::VERSION)]
pub struct Cli {
    /// Log each considered user to stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List upcoming birthdays for the next seven days.
    Week(WeekArgs),

    /// Validate a users file.
    Check(CheckArgs),

    /// Run against a built-in sample user.
    Demo(DemoArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `week` subcommand.
#[derive(Parser, Debug)]
pub struct WeekArgs {
    /// Users file (.json or .toml).
    #[arg(long, short = 'u')]
    pub users: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) instead of the system date.
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Output format.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// How to place February 29 birthdays in common years.
    #[arg(long)]
    pub leap_day: Option<LeapDayPolicy>,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the users file to validate.
    pub file: PathBuf,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Reference date (YYYY-MM-DD) instead of the system date.
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

/// Fully resolved settings for one `week` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSettings {
    pub users: PathBuf,
    pub today: Option<NaiveDate>,
    pub format: OutputFormat,
    pub leap_day: LeapDayPolicy,
}

impl WeekArgs {
    /// Layer CLI flags over the loaded config.
    pub fn resolve(&self, config: &Config) -> Result<WeekSettings, String> {
        let users = self
            .users
            .clone()
            .or_else(|| config.roster.file.clone())
            .ok_or_else(|| {
                "a users file is required: pass --users, set BIRTHWEEK_USERS, \
                 or add [roster] file to .birthweek.toml"
                    .to_string()
            })?;

        Ok(WeekSettings {
            users,
            today: self.today.or(config.schedule.today),
            format: self.format.unwrap_or_else(|| config.format()),
            leap_day: self.leap_day.unwrap_or_else(|| config.leap_day()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_args(cli: Cli) -> WeekArgs {
        match cli.command {
            Command::Week(args) => args,
            other => panic!("expected Week command, got {other:?}"),
        }
    }

    #[test]
    fn week_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "birthweek",
            "week",
            "--users",
            "team.json",
            "--today",
            "2024-06-10",
            "--format",
            "json",
            "--leap-day",
            "mar1",
        ])
        .unwrap();
        let args = week_args(cli);
        assert_eq!(args.users, Some(PathBuf::from("team.json")));
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.leap_day, Some(LeapDayPolicy::Mar1));
    }

    #[test]
    fn week_rejects_bad_today() {
        let result = Cli::try_parse_from(["birthweek", "week", "--today", "June 10"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["birthweek", "demo", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Demo(_)));
    }

    #[test]
    fn verbose_absent_by_default() {
        let cli = Cli::try_parse_from(["birthweek", "version"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn check_takes_positional_file() {
        let cli = Cli::try_parse_from(["birthweek", "check", "users.toml"]).unwrap();
        match cli.command {
            Command::Check(args) => assert_eq!(args.file, PathBuf::from("users.toml")),
            other => panic!("expected Check command, got {other:?}"),
        }
    }

    #[test]
    fn resolve_requires_users_file() {
        let args = week_args(Cli::try_parse_from(["birthweek", "week"]).unwrap());
        let err = args.resolve(&Config::default()).unwrap_err();
        assert!(err.contains("users file is required"));
    }

    #[test]
    fn resolve_falls_back_to_config() {
        let mut config = Config::default();
        config.roster.file = Some(PathBuf::from("/etc/team.toml"));
        config.schedule.leap_day = Some(LeapDayPolicy::Strict);
        config.schedule.today = NaiveDate::from_ymd_opt(2024, 12, 29);
        config.output.format = Some(OutputFormat::Plain);

        let args = week_args(Cli::try_parse_from(["birthweek", "week"]).unwrap());
        let settings = args.resolve(&config).unwrap();
        assert_eq!(
            settings,
            WeekSettings {
                users: PathBuf::from("/etc/team.toml"),
                today: NaiveDate::from_ymd_opt(2024, 12, 29),
                format: OutputFormat::Plain,
                leap_day: LeapDayPolicy::Strict,
            }
        );
    }

    #[test]
    fn resolve_flags_override_config() {
        let mut config = Config::default();
        config.roster.file = Some(PathBuf::from("/etc/team.toml"));
        config.output.format = Some(OutputFormat::Plain);

        let args = week_args(
            Cli::try_parse_from([
                "birthweek", "week", "-u", "mine.json", "--format", "json",
            ])
            .unwrap(),
        );
        let settings = args.resolve(&config).unwrap();
        assert_eq!(settings.users, PathBuf::from("mine.json"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.leap_day, LeapDayPolicy::Feb28);
        assert_eq!(settings.today, None);
    }
}
