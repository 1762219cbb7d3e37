// File: crates/almanac-core/src/stats.rs
// Summary: Per-bucket statistics (count, mean) over assigned records.

use crate::histogram::Bucket;
use crate::window::TimeWindow;

/// A partition cell the aggregator can fill statistics on. Implemented by
/// histogram buckets and time windows.
pub trait Binned<'a, R> {
    fn members(&self) -> &[&'a R];
    fn set_stats(&mut self, count: usize, mean: Option<f64>);
}

impl<'a, R> Binned<'a, R> for Bucket<'a, R> {
    fn members(&self) -> &[&'a R] {
        &self.members
    }
    fn set_stats(&mut self, count: usize, mean: Option<f64>) {
        self.count = count;
        self.mean = mean;
    }
}

impl<'a, R> Binned<'a, R> for TimeWindow<'a, R> {
    fn members(&self) -> &[&'a R] {
        &self.members
    }
    fn set_stats(&mut self, count: usize, mean: Option<f64>) {
        self.count = count;
        self.mean = mean;
    }
}

/// Fill `count` and `mean` on every cell. The mean averages the finite
/// accessor values of the members; a non-finite value is excluded from the
/// mean, never an error. `mean` is `None` when a cell has no finite value.
/// Idempotent.
pub fn with_stats<'a, R: 'a, B, F>(mut buckets: Vec<B>, accessor: F) -> Vec<B>
where
    B: Binned<'a, R>,
    F: Fn(&R) -> f64,
{
    for b in buckets.iter_mut() {
        let (count, mean) = {
            let members = b.members();
            let mut sum = 0.0f64;
            let mut n = 0usize;
            for &r in members {
                let v = accessor(r);
                if v.is_finite() {
                    sum += v;
                    n += 1;
                }
            }
            (members.len(), if n > 0 { Some(sum / n as f64) } else { None })
        };
        b.set_stats(count, mean);
    }
    buckets
}

/// Arithmetic mean over a whole sequence (the charts draw this as a
/// reference line beside the bins). Non-finite values are excluded.
pub fn mean_of<R, F>(records: &[R], accessor: F) -> Option<f64>
where
    F: Fn(&R) -> f64,
{
    let mut sum = 0.0f64;
    let mut n = 0usize;
    for r in records {
        let v = accessor(r);
        if v.is_finite() {
            sum += v;
            n += 1;
        }
    }
    if n > 0 {
        Some(sum / n as f64)
    } else {
        None
    }
}
