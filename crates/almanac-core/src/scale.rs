// File: crates/almanac-core/src/scale.rs
// Summary: Affine value/time scales with nice-domain rounding and clamping.

use chrono::NaiveDate;

const E10: f64 = 7.071067811865476; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Step size producing ~`count` round intervals across [start, stop].
/// A negative return encodes the reciprocal of a sub-unit step, so callers
/// divide instead of multiplying and keep exact decimal boundaries.
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(1.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Round [start, stop] outward to enclosing multiples of a tick step.
/// Never shrinks the input; degenerate or non-finite domains come back
/// unchanged.
fn nice_domain(domain: (f64, f64), count: usize) -> (f64, f64) {
    let (mut start, mut stop) = domain;
    if start == stop || !start.is_finite() || !stop.is_finite() {
        return domain;
    }
    let mut prestep = 0.0f64;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count as f64);
        if step == prestep {
            break;
        } else if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * -step).floor() / -step;
            stop = (stop * -step).ceil() / -step;
        } else {
            break;
        }
        prestep = step;
    }
    (start, stop)
}

/// Affine mapping from a numeric domain onto a numeric range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range, clamp: false }
    }

    /// Round the domain outward to tick boundaries so axis labels and bin
    /// edges land on round numbers.
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = nice_domain(self.domain, count);
        self
    }

    /// Pin out-of-domain inputs to the nearest range endpoint instead of
    /// extrapolating.
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[inline]
    pub fn scale(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            // degenerate domain maps everything to the range midpoint
            return (r0 + r1) * 0.5;
        }
        let mut t = (v - d0) / span;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        r0 + t * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, p: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        let mut t = (p - r0) / span;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        d0 + t * (d1 - d0)
    }

    /// Round tick positions inside the domain, at most ~`count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        if start == stop {
            return vec![start];
        }
        if count == 0 {
            return Vec::new();
        }
        let step = tick_increment(start, stop, count as f64);
        if step == 0.0 || !step.is_finite() {
            return Vec::new();
        }
        if step > 0.0 {
            let lo = (start / step).ceil() as i64;
            let hi = (stop / step).floor() as i64;
            (lo..=hi).map(|i| i as f64 * step).collect()
        } else {
            let inv = -step;
            let lo = (start * inv).ceil() as i64;
            let hi = (stop * inv).floor() as i64;
            (lo..=hi).map(|i| i as f64 / inv).collect()
        }
    }
}

/// Affine date scale; positions a date by its day offset from the domain
/// start. Matches the chronological x-axis the time-window partitions use.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub domain: (NaiveDate, NaiveDate),
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let span = (domain.1 - domain.0).num_days() as f64;
        Self { domain, inner: LinearScale::new((0.0, span), range) }
    }

    pub fn clamped(mut self, clamp: bool) -> Self {
        self.inner = self.inner.clamped(clamp);
        self
    }

    #[inline]
    pub fn scale(&self, d: NaiveDate) -> f64 {
        self.inner.scale((d - self.domain.0).num_days() as f64)
    }
}
