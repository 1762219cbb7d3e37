// File: crates/almanac-core/src/extent.rs
// Summary: Min/max extent over a record sequence through an accessor.

use chrono::NaiveDate;

/// Numeric extent, skipping values that are not finite.
/// Returns `None` when the sequence holds no finite value; callers must
/// treat that as a no-op condition rather than proceed to binning.
pub fn extent<R, F>(records: &[R], accessor: F) -> Option<(f64, f64)>
where
    F: Fn(&R) -> f64,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for r in records {
        let v = accessor(r);
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if any {
        Some((min, max))
    } else {
        None
    }
}

/// Date extent. `None` only for an empty sequence.
pub fn date_extent<R, F>(records: &[R], accessor: F) -> Option<(NaiveDate, NaiveDate)>
where
    F: Fn(&R) -> NaiveDate,
{
    let mut it = records.iter().map(|r| accessor(r));
    let first = it.next()?;
    let mut min = first;
    let mut max = first;
    for d in it {
        if d < min {
            min = d;
        }
        if d > max {
            max = d;
        }
    }
    Some((min, max))
}
