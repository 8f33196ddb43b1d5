//! Process uptime calculation.

use std::time::Instant;

/// Seconds per hour.
const SECS_PER_HOUR: u64 = 3600;
/// Seconds per minute.
const SECS_PER_MINUTE: u64 = 60;

/// Whole seconds elapsed since the process started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uptime {
    /// Elapsed whole seconds.
    pub seconds: u64,
}

impl Uptime {
    /// Measure uptime against the process start instant.
    ///
    /// `Instant` is monotonic, so successive calls with the same `start`
    /// never go backwards.
    pub fn since(start: Instant) -> Self {
        Self {
            seconds: start.elapsed().as_secs(),
        }
    }

    /// Whole hours component.
    pub fn hours(&self) -> u64 {
        self.seconds / SECS_PER_HOUR
    }

    /// Whole minutes left over after removing full hours.
    pub fn minutes(&self) -> u64 {
        (self.seconds % SECS_PER_HOUR) / SECS_PER_MINUTE
    }

    /// Human-readable form, e.g. `"1 hour, 1 minutes"`.
    pub fn human(&self) -> String {
        format_human(self.seconds)
    }
}

/// Format a second count as `"{hours} hour, {minutes} minutes"`.
pub fn format_human(seconds: u64) -> String {
    let uptime = Uptime { seconds };
    format!("{} hour, {} minutes", uptime.hours(), uptime.minutes())
}
