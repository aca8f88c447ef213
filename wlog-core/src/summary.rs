//! Hour and cost aggregation over validated entries.
use crate::entry::WorkLogEntry;

/// Totals over a set of entries. `hours` and `minutes` are raw column sums;
/// use [`total_hours`](Summary::total_hours) or
/// [`clock`](Summary::clock) for normalized views.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Summary {
    pub tasks: usize,
    pub completed: usize,
    pub hours: u32,
    pub minutes: u32,
}

impl Summary {
    pub fn of<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a WorkLogEntry>,
    {
        let mut summary = Summary::default();
        for entry in entries {
            summary.tasks += 1;
            if entry.complete {
                summary.completed += 1;
            }
            summary.hours += entry.hours;
            summary.minutes += entry.minutes;
        }
        summary
    }

    /// Fractional hours, the recap-sheet formula: `hours + minutes / 60`.
    pub fn total_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }

    /// Total time as `(hours, minutes)` with minutes carried into hours.
    pub fn clock(&self) -> (u32, u32) {
        let total = self.hours * 60 + self.minutes;
        (total / 60, total % 60)
    }

    /// Cost of the logged time at an hourly `rate`.
    pub fn cost(&self, rate: f64) -> f64 {
        self.total_hours() * rate
    }
}
