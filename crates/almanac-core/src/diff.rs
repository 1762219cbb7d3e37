// File: crates/almanac-core/src/diff.rs
// Summary: Position-keyed reconciliation of two bucket sequences.

/// Enter/update/exit classification for the transition between a previous
/// bucket set and its replacement after a metric or domain change. Keyed by
/// bucket position, which is stable for a fixed bucket count.
#[derive(Debug)]
pub struct BucketDiff<'b, B> {
    pub entering: Vec<(usize, &'b B)>,
    pub updating: Vec<(usize, &'b B, &'b B)>,
    pub exiting: Vec<(usize, &'b B)>,
}

impl<'b, B> BucketDiff<'b, B> {
    /// True when the bucket count did not change (pure update transition).
    pub fn is_stable(&self) -> bool {
        self.entering.is_empty() && self.exiting.is_empty()
    }
}

/// Classify positions of `next` against `previous`: shared positions update
/// in place, tail positions only in `next` enter, tail positions only in
/// `previous` exit. Pure; neither sequence is modified.
pub fn diff<'b, B>(previous: &'b [B], next: &'b [B]) -> BucketDiff<'b, B> {
    let shared = previous.len().min(next.len());
    BucketDiff {
        entering: (shared..next.len()).map(|i| (i, &next[i])).collect(),
        updating: (0..shared).map(|i| (i, &previous[i], &next[i])).collect(),
        exiting: (shared..previous.len()).map(|i| (i, &previous[i])).collect(),
    }
}
