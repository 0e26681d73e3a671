//! Example: rotational symmetry of a synthetic projection.
//!
//! Builds a square image with an n-fold rotationally symmetric ring pattern
//! around its center, resamples it to polar coordinates, computes the angular
//! autocorrelation per radius and estimates the fold from the peak lags.
//!
//! A JSON summary is written to stdout, or to `--out` when given.
//!
//! Run from the workspace root:
//!   cargo run -p rotcorr --example symmetry -- --help
//!   cargo run -p rotcorr --example symmetry -- --fold 6 --interpolation linear

use std::time::Instant;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use rotcorr::{
    Image, Interpolation, PolarConfig, estimate_fold, lag_peaks, rotational_correlation,
};
use serde::Serialize;
use tracing::info;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Detect n-fold rotational symmetry in a synthetic projection")]
struct Args {
    /// Rotational fold of the synthetic pattern
    #[arg(long, default_value_t = 6)]
    fold: usize,

    /// Side length of the square image in pixels
    #[arg(long, default_value_t = 129)]
    size: usize,

    /// Polar sampler: `nearest` or `linear`
    #[arg(long, default_value = "linear")]
    interpolation: Interpolation,

    /// Number of angle bins over a full turn
    #[arg(long, default_value_t = 360)]
    angle_bins: usize,

    /// Minimum relative peak height for fold estimation
    #[arg(long, default_value_t = 0.5)]
    min_contrast: f64,

    /// Radius bin whose normalized correlation row is included in the output
    #[arg(long)]
    profile_radius: Option<usize>,

    /// Output JSON path (default: stdout)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RadiusDto {
    radius: usize,
    fold: Option<usize>,
    peak_lags: Vec<usize>,
}

#[derive(Serialize)]
struct Summary {
    size: usize,
    fold: usize,
    interpolation: String,
    radius_bins: usize,
    angle_bins: usize,
    /// Most frequent per-radius fold estimate.
    consensus_fold: Option<usize>,
    elapsed_ms: f64,
    radii: Vec<RadiusDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<Vec<f64>>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ring of `fold` lobes, strongest halfway to the border.
fn synthetic_projection(size: usize, fold: usize) -> Image<f32> {
    let c = (size / 2) as f32;
    let ring = c * 0.5;
    let width = (c * 0.25).max(1.0);
    Image::from_fn(size, size, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let rho = dx.hypot(dy);
        let envelope = (-((rho - ring) / width).powi(2)).exp();
        envelope * (1.0 + (fold as f32 * dy.atan2(dx)).cos())
    })
}

fn consensus(folds: impl Iterator<Item = usize>) -> Option<usize> {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for fold in folds {
        match counts.iter_mut().find(|(f, _)| *f == fold) {
            Some((_, n)) => *n += 1,
            None => counts.push((fold, 1)),
        }
    }
    counts.into_iter().max_by_key(|&(_, n)| n).map(|(f, _)| f)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    ensure!(args.fold >= 2, "fold must be at least 2, got {}", args.fold);

    let img = synthetic_projection(args.size, args.fold);
    let cfg = PolarConfig {
        interpolation: args.interpolation,
        angle_bins: args.angle_bins,
        reject_degenerate: true,
    };
    info!(size = args.size, fold = args.fold, interpolation = %args.interpolation, "analyzing");

    let t0 = Instant::now();
    let (polar, corr) = rotational_correlation(&img.as_view(), &cfg)
        .context("computing rotational correlation")?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let radii: Vec<RadiusDto> = (0..corr.radius_bins())
        .map(|r| {
            let row = corr.row(r);
            RadiusDto {
                radius: r,
                fold: estimate_fold(row, args.min_contrast),
                peak_lags: lag_peaks(row),
            }
        })
        .collect();
    let consensus_fold = consensus(radii.iter().filter_map(|r| r.fold));

    let profile = match args.profile_radius {
        Some(r) => {
            ensure!(
                r < corr.radius_bins(),
                "profile radius {r} outside 0..{}",
                corr.radius_bins()
            );
            Some(corr.normalized().row(r).to_vec())
        }
        None => None,
    };

    info!(
        radius_bins = polar.radius_bins(),
        ?consensus_fold,
        elapsed_ms,
        "done"
    );

    let summary = Summary {
        size: args.size,
        fold: args.fold,
        interpolation: args.interpolation.to_string(),
        radius_bins: polar.radius_bins(),
        angle_bins: polar.angle_bins(),
        consensus_fold,
        elapsed_ms,
        radii,
        profile,
    };

    match &args.out {
        Some(path) => {
            let file =
                std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
            serde_json::to_writer_pretty(file, &summary)
                .with_context(|| format!("writing JSON to {path}"))?;
            info!(path = %path, "results written");
        }
        None => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &summary)
                .context("writing JSON to stdout")?;
            println!();
        }
    }
    Ok(())
}
