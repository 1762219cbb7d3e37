// File: crates/almanac-core/src/downsample.rs
// Summary: Weekly downsampling producing one mean point per calendar week.

use chrono::NaiveDate;

use crate::stats::with_stats;
use crate::window::weekly_windows;

/// One smoothed point: the window's start date and the mean of the value
/// accessor over that week. `mean` is `None` when the week held members but
/// none of their values were finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeekPoint {
    pub date: NaiveDate,
    pub mean: Option<f64>,
}

/// Reduce a daily series to one mean point per weekly window, for
/// smoothed-curve rendering. Weeks follow the weekly partition policy: the
/// trailing partial week is capped at the last record's date rather than
/// extended to the present, and empty weeks produce no point.
///
/// Precondition: records sorted by date ascending.
pub fn downsample<R, Fd, Fv>(records: &[R], date: Fd, value: Fv) -> Vec<WeekPoint>
where
    Fd: Fn(&R) -> NaiveDate,
    Fv: Fn(&R) -> f64,
{
    with_stats(weekly_windows(records, date), value)
        .into_iter()
        .map(|w| WeekPoint { date: w.start, mean: w.mean })
        .collect()
}
