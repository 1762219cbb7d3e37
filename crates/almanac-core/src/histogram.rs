// File: crates/almanac-core/src/histogram.rs
// Summary: Equal-width histogram binning over a numeric domain.

use crate::error::AlmanacError;
use crate::extent::extent;
use crate::scale::LinearScale;
use crate::stats::with_stats;

/// One histogram bin. `end` is exclusive except for the final bin, whose
/// upper bound also admits the domain maximum. Every bin of a partition is
/// emitted, empty ones included, so a renderer can draw a visible gap.
#[derive(Clone, Debug)]
pub struct Bucket<'a, R> {
    pub start: f64,
    pub end: f64,
    pub members: Vec<&'a R>,
    pub count: usize,
    pub mean: Option<f64>,
}

/// Caller-facing configuration for the extent -> nice -> bin pipeline.
/// `domain` overrides the nice-rounded extent when set.
#[derive(Clone, Copy, Debug)]
pub struct HistogramConfig {
    pub bucket_count: usize,
    pub domain: Option<(f64, f64)>,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { bucket_count: 12, domain: None }
    }
}

impl HistogramConfig {
    pub fn validate(&self) -> Result<(), AlmanacError> {
        if self.bucket_count == 0 {
            return Err(AlmanacError::InvalidBucketCount(0));
        }
        if let Some((min, max)) = self.domain {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(AlmanacError::InvalidDomain { min, max });
            }
        }
        Ok(())
    }
}

/// Partition `domain` into `bucket_count` equal-width contiguous bins and
/// assign each record to the bin `floor((v - min) / width)`, clamped to the
/// final bin for a value exactly at the maximum. Records whose accessor is
/// non-finite or outside the domain are skipped.
///
/// A degenerate domain (min == max) is legal: all in-domain records land in
/// the first bin and no division by zero occurs.
pub fn histogram_bins<'a, R, F>(
    records: &'a [R],
    accessor: F,
    domain: (f64, f64),
    bucket_count: usize,
) -> Result<Vec<Bucket<'a, R>>, AlmanacError>
where
    F: Fn(&R) -> f64,
{
    if bucket_count == 0 {
        return Err(AlmanacError::InvalidBucketCount(0));
    }
    let (min, max) = domain;
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(AlmanacError::InvalidDomain { min, max });
    }

    let width = (max - min) / bucket_count as f64;
    let mut buckets: Vec<Bucket<'a, R>> = (0..bucket_count)
        .map(|i| Bucket {
            start: min + width * i as f64,
            // the final bin closes on the domain maximum exactly
            end: if i + 1 == bucket_count { max } else { min + width * (i + 1) as f64 },
            members: Vec::new(),
            count: 0,
            mean: None,
        })
        .collect();

    for r in records {
        let v = accessor(r);
        if !v.is_finite() || v < min || v > max {
            continue;
        }
        let idx = if width > 0.0 {
            (((v - min) / width).floor() as usize).min(bucket_count - 1)
        } else {
            0
        };
        buckets[idx].members.push(r);
        buckets[idx].count += 1;
    }
    Ok(buckets)
}

/// Convenience pipeline matching how the charts use binning: derive the
/// extent, nice-round it (so bins line up with axis ticks), partition, and
/// fill per-bin statistics. Surfaces `EmptyDomain` when no finite value
/// exists and no domain override was given.
pub fn histogram<'a, R, F>(
    records: &'a [R],
    accessor: F,
    config: HistogramConfig,
) -> Result<Vec<Bucket<'a, R>>, AlmanacError>
where
    F: Fn(&R) -> f64,
{
    config.validate()?;
    let domain = match config.domain {
        Some(d) => d,
        None => {
            let raw = extent(records, &accessor).ok_or(AlmanacError::EmptyDomain)?;
            LinearScale::new(raw, (0.0, 1.0)).nice(config.bucket_count).domain
        }
    };
    let buckets = histogram_bins(records, &accessor, domain, config.bucket_count)?;
    Ok(with_stats(buckets, &accessor))
}
