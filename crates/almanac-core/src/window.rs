// File: crates/almanac-core/src/window.rs
// Summary: Calendar-aligned time windows (weekly spans, fixed-anchor seasons).

use chrono::{Datelike, Days, NaiveDate};

/// Season identity for labelled windows. Anchors are fixed month/day pairs;
/// winter wraps across the year boundary into the next year's spring anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Anchor (month, day) at which the season starts.
    pub fn anchor(self) -> (u32, u32) {
        match self {
            Season::Spring => (3, 1),
            Season::Summer => (6, 1),
            Season::Autumn => (9, 1),
            Season::Winter => (12, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

/// A chronological bucket. `end` is exclusive except for the window closing
/// on the dataset's last date, which is inclusive of it. Windows that hold
/// no records are never emitted.
#[derive(Clone, Debug)]
pub struct TimeWindow<'a, R> {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: Option<Season>,
    pub members: Vec<&'a R>,
    pub count: usize,
    pub mean: Option<f64>,
}

/// Consecutive 7-day windows starting at the first record's date; window `i`
/// covers `[first + 7i, first + 7(i+1))`. The trailing partial window is
/// capped at the last record's date instead of left open-ended, so the
/// result depends on the data alone.
///
/// Precondition: records sorted by date ascending.
pub fn weekly_windows<'a, R, F>(records: &'a [R], date: F) -> Vec<TimeWindow<'a, R>>
where
    F: Fn(&R) -> NaiveDate,
{
    let (first, last) = match (records.first(), records.last()) {
        (Some(a), Some(b)) => (date(a), date(b)),
        _ => return Vec::new(),
    };

    let mut windows = Vec::new();
    let mut i = 0usize;
    let mut start = first;
    while start <= last && i < records.len() {
        let bound = start + Days::new(7);
        let mut members: Vec<&'a R> = Vec::new();
        while i < records.len() && date(&records[i]) < bound {
            members.push(&records[i]);
            i += 1;
        }
        if !members.is_empty() {
            windows.push(TimeWindow {
                start,
                end: if bound > last { last } else { bound },
                label: None,
                members,
                count: 0,
                mean: None,
            });
        }
        start = bound;
    }
    windows
}

/// Fixed-anchor seasonal windows covering the dataset's span. Anchors are
/// instantiated for every year from one year before the first record
/// through the last record's year (a window can start before the data but
/// end inside it), then clipped to `[first, last]`. Empty windows are
/// dropped. Records must be sorted by date ascending.
pub fn season_windows<'a, R, F>(records: &'a [R], date: F) -> Vec<TimeWindow<'a, R>>
where
    F: Fn(&R) -> NaiveDate,
{
    let (first, last) = match (records.first(), records.last()) {
        (Some(a), Some(b)) => (date(a), date(b)),
        _ => return Vec::new(),
    };

    // Candidate windows are generated in chronological order and tile the
    // span contiguously (each winter ends at the next year's spring
    // anchor), so one forward cursor assigns every record, like the weekly
    // walk above.
    let mut windows = Vec::new();
    let mut cursor = 0usize;
    for year in (first.year() - 1)..=last.year() {
        for (i, &season) in Season::ALL.iter().enumerate() {
            let (m0, d0) = season.anchor();
            let (m1, d1, end_year) = match Season::ALL.get(i + 1) {
                Some(next) => {
                    let (m, d) = next.anchor();
                    (m, d, year)
                }
                None => {
                    let (m, d) = Season::Spring.anchor();
                    (m, d, year + 1)
                }
            };
            let (Some(anchor_start), Some(anchor_end)) = (
                NaiveDate::from_ymd_opt(year, m0, d0),
                NaiveDate::from_ymd_opt(end_year, m1, d1),
            ) else {
                continue;
            };

            // membership stays half-open against the unclipped anchor so a
            // boundary date lands in one season only
            let mut members: Vec<&'a R> = Vec::new();
            while cursor < records.len() && date(&records[cursor]) < anchor_end {
                members.push(&records[cursor]);
                cursor += 1;
            }
            if members.is_empty() {
                continue;
            }
            windows.push(TimeWindow {
                // displayed bounds are clipped to the dataset span
                start: anchor_start.max(first),
                end: anchor_end.min(last),
                label: Some(season),
                members,
                count: 0,
                mean: None,
            });
        }
    }
    windows
}
