// File: crates/demo/src/main.rs
// Summary: Demo loads a daily weather CSV and prints histograms, weekly means,
// seasonal means, and a metric-switch reconciliation summary.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use almanac_core::{
    date_extent, diff, downsample, histogram, mean_of, season_windows, with_stats,
    HistogramConfig, LinearScale,
};

/// One day of observations. Missing numeric cells are loaded as NaN and
/// excluded from every mean downstream.
#[derive(Clone, Copy, Debug)]
struct DayRecord {
    date: NaiveDate,
    temperature_max: f64,
    temperature_min: f64,
    humidity: f64,
    wind_speed: f64,
    moon_phase: f64,
    dew_point: f64,
    uv_index: f64,
    cloud_cover: f64,
}

type Accessor = fn(&DayRecord) -> f64;

fn main() -> Result<()> {
    let raw = std::env::args().nth(1).unwrap_or_else(|| "nyc_weather_data.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let mut days = load_weather_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows", days.len());

    if days.is_empty() {
        anyhow::bail!("no rows loaded -- check headers/delimiter.");
    }

    // Every partitioner below expects chronological order; sort once here.
    days.sort_by_key(|r| r.date);
    if let Some((first, last)) = date_extent(&days, |r| r.date) {
        println!("Span: {} .. {}", first, last);
    }

    let metrics: [(&str, Accessor); 8] = [
        ("temperatureMax", |r| r.temperature_max),
        ("temperatureMin", |r| r.temperature_min),
        ("humidity", |r| r.humidity),
        ("windSpeed", |r| r.wind_speed),
        ("moonPhase", |r| r.moon_phase),
        ("dewPoint", |r| r.dew_point),
        ("uvIndex", |r| r.uv_index),
        ("cloudCover", |r| r.cloud_cover),
    ];

    // 1) Histogram per metric, 12 buckets over the nice extent
    let config = HistogramConfig { bucket_count: 12, domain: None };
    for (name, accessor) in metrics {
        println!("\nHistogram of {name}");
        match histogram(&days, accessor, config) {
            Ok(bins) => {
                let peak = bins.iter().map(|b| b.count).max().unwrap_or(1).max(1);
                let bar = LinearScale::new((0.0, peak as f64), (0.0, 40.0));
                for b in &bins {
                    let width = bar.scale(b.count as f64).round() as usize;
                    println!("  [{:>8.2}, {:>8.2})  {:>4}  {}", b.start, b.end, b.count, "#".repeat(width));
                }
                if let Some(m) = mean_of(&days, accessor) {
                    println!("  mean {m:.3}");
                }
            }
            Err(e) => println!("  skipped: {e}"),
        }
    }

    // 2) Weekly humidity downsample
    println!("\nWeekly humidity means");
    for p in downsample(&days, |r| r.date, |r| r.humidity) {
        match p.mean {
            Some(m) => println!("  {}  {:.3}", p.date, m),
            None => println!("  {}  (no data)", p.date),
        }
    }

    // 3) Seasonal means
    println!("\nSeasonal humidity means");
    let seasons = with_stats(season_windows(&days, |r| r.date), |r: &DayRecord| r.humidity);
    for w in &seasons {
        let label = w.label.map(|s| s.name()).unwrap_or("-");
        match w.mean {
            Some(m) => println!("  {:<6} {} .. {}  mean {:.3}  ({} days)", label, w.start, w.end, m, w.count),
            None => println!("  {:<6} {} .. {}  (no data)", label, w.start, w.end),
        }
    }

    // 4) Metric switch: rebuild the buckets and reconcile against the
    // previous set. The selected index lives here, not in the engine.
    let mut selected = 0usize;
    let previous = histogram(&days, metrics[selected].1, config)?;
    selected = (selected + 1) % metrics.len();
    let next = histogram(&days, metrics[selected].1, config)?;

    let transition = diff(&previous, &next);
    println!(
        "\nSwitching {} -> {}: {} updating, {} entering, {} exiting (stable: {})",
        metrics[0].0,
        metrics[selected].0,
        transition.updating.len(),
        transition.entering.len(),
        transition.exiting.len(),
        transition.is_stable(),
    );

    Ok(())
}

/// Resolve the input path, accepting a bare file name in the working
/// directory.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load a daily weather CSV into records. Header names are matched
/// case-insensitively; a missing or unparseable numeric cell becomes NaN,
/// a row without a parseable date is skipped.
fn load_weather_csv(path: &Path) -> Result<Vec<DayRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |name: &str| -> Option<usize> { headers.iter().position(|h| h == name) };

    let i_date = idx("date").context("no 'date' column in header")?;
    let i_tmax = idx("temperaturemax");
    let i_tmin = idx("temperaturemin");
    let i_hum = idx("humidity");
    let i_wind = idx("windspeed");
    let i_moon = idx("moonphase");
    let i_dew = idx("dewpoint");
    let i_uv = idx("uvindex");
    let i_cloud = idx("cloudcover");

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let num = |i: Option<usize>| -> f64 {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(f64::NAN)
        };
        let Some(date) = rec
            .get(i_date)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        else {
            continue;
        };
        out.push(DayRecord {
            date,
            temperature_max: num(i_tmax),
            temperature_min: num(i_tmin),
            humidity: num(i_hum),
            wind_speed: num(i_wind),
            moon_phase: num(i_moon),
            dew_point: num(i_dew),
            uv_index: num(i_uv),
            cloud_cover: num(i_cloud),
        });
    }
    Ok(out)
}
