use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use recur_engine::Measure;

use crate::error::{AppError, AppResult};

#[derive(Debug, Parser)]
#[command(name = "recur", version)]
#[command(about = "Match and enumerate dates against recurrence rules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path (defaults to `recur.toml` in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a recurrence and print its saved options as JSON
    New(NewArgs),

    /// Check whether a date satisfies a saved recurrence
    Matches(MatchesArgs),

    /// List the next matching dates
    Next(StepArgs),

    /// List the previous matching dates, most recent first
    Previous(StepArgs),

    /// List every matching date up to the end date
    All(AllArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Reference date for interval rules (defaults to the start date, then today)
    #[arg(long)]
    pub anchor: Option<String>,

    #[arg(long)]
    pub start: Option<String>,

    #[arg(long)]
    pub end: Option<String>,

    /// Rule such as `days=2` or `daysOfWeek=Sunday,1`; repeatable
    #[arg(long = "rule", value_name = "MEASURE=UNITS")]
    pub rules: Vec<RuleSpec>,

    /// Date that never matches; repeatable
    #[arg(long = "except", value_name = "DATE")]
    pub exceptions: Vec<String>,
}

#[derive(Debug, Args)]
pub struct MatchesArgs {
    /// Saved options JSON
    pub file: PathBuf,

    pub date: String,
}

#[derive(Debug, Args)]
pub struct StepArgs {
    /// Saved options JSON
    pub file: PathBuf,

    /// How many dates to list
    pub count: usize,

    /// Start from this date instead of the window start or anchor
    #[arg(long)]
    pub from: Option<String>,

    /// strftime-style output pattern (defaults to `engine.date_format`)
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Debug, Args)]
pub struct AllArgs {
    /// Saved options JSON
    pub file: PathBuf,

    #[arg(long)]
    pub from: Option<String>,

    #[arg(long)]
    pub format: Option<String>,
}

/// A rule given on the command line as `measure=unit[,unit...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub measure: Measure,
    pub units: Vec<String>,
}

impl FromStr for RuleSpec {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let (measure, units) = s
            .split_once('=')
            .ok_or_else(|| AppError::InvalidRuleSpec(s.to_string()))?;

        let measure = measure.parse::<Measure>()?;
        let units: Vec<String> = units
            .split(',')
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .map(str::to_string)
            .collect();

        if units.is_empty() {
            return Err(AppError::InvalidRuleSpec(s.to_string()));
        }

        Ok(Self { measure, units })
    }
}
