//! Subcommand handlers. Each returns the text to print on stdout.

use std::path::Path;

use recur_core::config::Settings;
use recur_engine::{Direction, Recurrence, RecurrenceOptions};

use crate::cli::{AllArgs, Command, MatchesArgs, NewArgs, StepArgs};
use crate::error::{AppError, AppResult};

/// ## Summary
/// Dispatches a parsed subcommand.
///
/// ## Errors
/// Propagates the handler's error.
pub fn run(command: &Command, settings: &Settings) -> AppResult<String> {
    match command {
        Command::New(args) => new_recurrence(args, settings),
        Command::Matches(args) => matches(args, settings),
        Command::Next(args) => step(args, settings, Direction::Forward),
        Command::Previous(args) => step(args, settings, Direction::Backward),
        Command::All(args) => all(args, settings),
    }
}

/// ## Summary
/// Builds a recurrence from command-line parts and renders its options JSON.
///
/// ## Errors
/// Returns an error for unparseable dates or rejected rule units.
pub fn new_recurrence(args: &NewArgs, settings: &Settings) -> AppResult<String> {
    let mut recurrence: Recurrence = match args.anchor.as_deref().or(args.start.as_deref()) {
        Some(anchor) => Recurrence::new(anchor)?,
        None => Recurrence::new(settings.engine.today()?)?,
    };

    if let Some(start) = args.start.as_deref() {
        recurrence.set_start_date(start)?;
    }
    if let Some(end) = args.end.as_deref() {
        recurrence.set_end_date(end)?;
    }
    for spec in &args.rules {
        recurrence.every_as(spec.units.clone(), spec.measure)?;
    }
    for exception in &args.exceptions {
        recurrence.except(exception)?;
    }

    tracing::debug!(rules = recurrence.rules().len(), "Built recurrence");
    Ok(recurrence.save().to_json()?)
}

/// ## Summary
/// Reads saved options and rebuilds the recurrence, applying the configured
/// scan limit. Options with neither anchor nor start are anchored at today in
/// the configured reference zone.
///
/// ## Errors
/// Returns `AppError::OptionsFile` if the file cannot be read, or the engine
/// error if the options are invalid.
pub fn load_recurrence(path: &Path, settings: &Settings) -> AppResult<Recurrence> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::OptionsFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut options = RecurrenceOptions::from_json(&json)?;
    if options.anchor.is_none() && options.start.is_none() {
        options.anchor = Some(settings.engine.today()?.to_string());
    }

    let mut recurrence = Recurrence::from_options(&options)?;
    recurrence.set_scan_limit(settings.engine.max_scan_days);

    tracing::debug!(
        path = %path.display(),
        rules = recurrence.rules().len(),
        scan_limit = settings.engine.max_scan_days,
        "Loaded recurrence"
    );
    Ok(recurrence)
}

fn matches(args: &MatchesArgs, settings: &Settings) -> AppResult<String> {
    let recurrence = load_recurrence(&args.file, settings)?;
    Ok(recurrence.matches(args.date.as_str())?.to_string())
}

fn step(args: &StepArgs, settings: &Settings, direction: Direction) -> AppResult<String> {
    let mut recurrence = load_recurrence(&args.file, settings)?;
    if let Some(from) = args.from.as_deref() {
        recurrence.set_from_date(from)?;
    }

    let format = args.format.as_deref().unwrap_or(&settings.engine.date_format);
    let dates = match direction {
        Direction::Forward => recurrence.next_formatted(args.count, format)?,
        Direction::Backward => recurrence.previous_formatted(args.count, format)?,
    };
    Ok(dates.join("\n"))
}

fn all(args: &AllArgs, settings: &Settings) -> AppResult<String> {
    let mut recurrence = load_recurrence(&args.file, settings)?;
    if let Some(from) = args.from.as_deref() {
        recurrence.set_from_date(from)?;
    }

    let format = args.format.as_deref().unwrap_or(&settings.engine.date_format);
    Ok(recurrence.all_formatted(format)?.join("\n"))
}
