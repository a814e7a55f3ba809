//! bandswatch - print the swatch mapping for rectangle positions without a window.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bandswatch_core::config::{DEFAULT_CENTER, DEFAULT_RECT_SIDE, DEFAULT_WINDOW_SIZE};
use bandswatch_core::{map_position, sweep, Point, Size, SweepSample};

/// Map a rectangle position over the four color bands to its swatch pair.
#[derive(Parser, Debug)]
#[command(name = "bandswatch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rectangle center Y (ignored with --sweep)
    #[arg(short, long, default_value_t = DEFAULT_CENTER.y, allow_negative_numbers = true)]
    y: f32,

    /// Rectangle center X
    #[arg(short, long, default_value_t = DEFAULT_CENTER.x, allow_negative_numbers = true)]
    x: f32,

    /// Viewport height
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE.height)]
    viewport_height: f32,

    /// Viewport width
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE.width)]
    viewport_width: f32,

    /// Rectangle height
    #[arg(long, default_value_t = DEFAULT_RECT_SIDE)]
    rect_height: f32,

    /// Sweep center Y in steps of this size instead of mapping one position
    #[arg(long)]
    sweep: Option<f32>,

    /// Sweep start (defaults to 0)
    #[arg(long, allow_negative_numbers = true)]
    from: Option<f32>,

    /// Sweep end, inclusive (defaults to the viewport height)
    #[arg(long, allow_negative_numbers = true)]
    to: Option<f32>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = run(&args)?;
    println!("{}", output);

    Ok(())
}

/// Map the requested position or sweep and render the output text.
///
/// A sweep always prints a JSON array, even when it yields one position;
/// a single position prints one JSON object.
fn run(args: &Args) -> Result<String> {
    if !(args.viewport_height.is_finite() && args.viewport_height > 0.0) {
        anyhow::bail!(
            "Viewport height must be a positive number, got {}",
            args.viewport_height
        );
    }
    if !(args.rect_height.is_finite() && args.rect_height > 0.0) {
        anyhow::bail!("Rectangle height must be a positive number, got {}", args.rect_height);
    }

    let viewport = Size::new(args.viewport_width, args.viewport_height);
    debug!("Viewport {:?}, rectangle height {}", viewport, args.rect_height);

    match args.sweep {
        Some(step) => {
            let from = args.from.unwrap_or(0.0);
            let to = args.to.unwrap_or(viewport.height);
            let samples = sweep(args.x, from, to, step, args.rect_height, viewport)
                .with_context(|| format!("Failed to sweep y={from}..={to} by {step}"))?;
            info!("Mapped {} position(s)", samples.len());

            if args.json {
                Ok(serde_json::to_string_pretty(&samples)?)
            } else {
                Ok(samples
                    .iter()
                    .map(format_sample)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        None => {
            let center = Point::new(args.x, args.y);
            let sample = SweepSample {
                center,
                swatches: map_position(center, args.rect_height, viewport),
            };

            if args.json {
                Ok(serde_json::to_string_pretty(&sample)?)
            } else {
                Ok(format_sample(&sample))
            }
        }
    }
}

/// One human-readable line per sample.
fn format_sample(sample: &SweepSample) -> String {
    let pair = &sample.swatches;
    format!(
        "y={:>8.2}  top={:<6} bottom={:<6} ratio={:.3}  bands={}/{}",
        sample.center.y,
        pair.top,
        pair.bottom,
        pair.top_ratio,
        pair.top_band(),
        pair.bottom_band()
    )
}
