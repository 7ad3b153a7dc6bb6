//! Execution timing for notebook runs.
//!
//! Wall-clock access goes through the [`Clock`] trait so elapsed-time
//! behavior can be tested without real time passing. The start and stop
//! operations share no hidden state; the timestamp returned by
//! [`start_execution_time`] is the only link between them.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::NotebookError;

/// Point-in-time captured at the start of a notebook run.
pub type Timestamp = DateTime<Local>;

/// Start-time message format: day-month-year hour:minute:second.
const START_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Clock backed by the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now()
    }
}

/// Capture the current wall-clock time and print it to stdout.
///
/// Returns the captured timestamp; hand it to [`execution_time`] when the
/// run finishes.
pub fn start_execution_time() -> Result<Timestamp, NotebookError> {
    start_execution_time_with(&SystemClock, &mut io::stdout())
}

/// Capture the start time from `clock`, writing the message to `out`.
pub fn start_execution_time_with(
    clock: &impl Clock,
    out: &mut impl Write,
) -> Result<Timestamp, NotebookError> {
    let start_time = clock.now();
    writeln!(
        out,
        "Notebook execution start time: {}",
        start_time.format(START_TIME_FORMAT)
    )
    .map_err(NotebookError::Write)?;
    Ok(start_time)
}

/// Print and return whole seconds elapsed since `start_time`.
///
/// Fractional seconds are truncated, not rounded. A start time in the
/// future yields a negative count, which is printed and returned unchanged.
pub fn execution_time(start_time: Timestamp) -> Result<i64, NotebookError> {
    execution_time_with(&SystemClock, start_time, &mut io::stdout())
}

/// Compute elapsed seconds against `clock`, writing the message to `out`.
pub fn execution_time_with(
    clock: &impl Clock,
    start_time: Timestamp,
    out: &mut impl Write,
) -> Result<i64, NotebookError> {
    let exec_time = (clock.now() - start_time).num_seconds();
    debug!("Notebook run measured at {} whole seconds", exec_time);
    writeln!(
        out,
        "Notebook execution finished --- Elapsed time {} seconds ---",
        exec_time
    )
    .map_err(NotebookError::Write)?;
    Ok(exec_time)
}
