// File: crates/almanac-core/src/lib.rs
// Summary: Core library entry point; exports the aggregation and binning engine API.

pub mod error;
pub mod extent;
pub mod scale;
pub mod histogram;
pub mod window;
pub mod stats;
pub mod downsample;
pub mod diff;

pub use error::AlmanacError;
pub use extent::{date_extent, extent};
pub use scale::{LinearScale, TimeScale};
pub use histogram::{histogram, histogram_bins, Bucket, HistogramConfig};
pub use window::{season_windows, weekly_windows, Season, TimeWindow};
pub use stats::{mean_of, with_stats, Binned};
pub use downsample::{downsample, WeekPoint};
pub use diff::{diff, BucketDiff};
