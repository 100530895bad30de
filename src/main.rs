use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ferrous_lanes::emulation::histogram::reference_add;
use ferrous_lanes::prelude::*;
use ferrous_lanes::{ACTIVE, log_active_backend};

#[derive(Parser)]
#[command(name = "ferrous-lanes")]
#[command(about = "Portable SIMD vectors - backend report and histogram self-check", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbosity: -v info, -vv debug, -vvv trace (RUST_LOG also honoured)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compile-time selected backend and the accelerated types
    Backend,

    /// Run the recursive histogram over random indices and check it
    /// against a lane-by-lane reference
    Histogram {
        /// Lanes per index vector (1, 2, 4, 8, 16 or 32)
        #[arg(short, long, value_name = "INT", default_value = "16")]
        width: usize,

        /// Number of index vectors to add
        #[arg(short = 'n', long, value_name = "INT", default_value = "10000")]
        samples: usize,

        /// Number of histogram bins
        #[arg(short, long, value_name = "INT", default_value = "64")]
        bins: usize,

        /// Seed for the index generator
        #[arg(short, long, value_name = "INT", default_value = "42")]
        seed: u64,
    },
}

struct HistogramRun {
    samples: usize,
    bins: usize,
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        Commands::Backend => {
            report_backend();
            Ok(())
        }
        Commands::Histogram {
            width,
            samples,
            bins,
            seed,
        } => {
            let run = HistogramRun { samples, bins, seed };
            log_active_backend();
            log::info!(
                "Histogram check: width {}, {} samples, {} bins, seed {}",
                width,
                samples,
                bins,
                seed
            );
            match width {
                1 => run_histogram::<U32x1>(&run),
                2 => run_histogram::<U32x2>(&run),
                4 => run_histogram::<U32x4>(&run),
                8 => run_histogram::<U32x8>(&run),
                16 => run_histogram::<U32x16>(&run),
                32 => run_histogram::<U32x32>(&run),
                other => bail!("unsupported width {other}: expected 1, 2, 4, 8, 16 or 32"),
            }
        }
    }
}

fn report_backend() {
    let backend = log_active_backend();
    println!("backend: {:?} ({})", backend, backend.description());

    let types = ACTIVE.accelerated_types();
    if types.is_empty() {
        println!("accelerated types: none, every operation is emulated");
    } else {
        println!("accelerated types: {}", types.join(" "));
    }
}

fn run_histogram<V>(run: &HistogramRun) -> Result<()>
where
    V: SimdHistogram<Scalar = u32>,
{
    if run.bins == 0 {
        bail!("--bins must be at least 1");
    }
    let bin_count = u32::try_from(run.bins).context("--bins does not fit in a u32 lane")?;

    let mut rng = StdRng::seed_from_u64(run.seed);
    let mut bins = vec![0u32; run.bins];
    let mut expected = vec![0u32; run.bins];
    let mut split = 0usize;

    for _ in 0..run.samples {
        let indices = V::from_fn(|_| rng.gen_range(0..bin_count));
        if !indices.unique() {
            split += 1;
        }
        indices.histogram_increment(&mut bins)?;
        reference_add(&indices, &mut expected, 1)?;
    }

    log::debug!(
        "{} of {} index vectors had duplicate lanes and took the split path",
        split,
        run.samples
    );

    if let Some(bin) = (0..run.bins).find(|&i| bins[i] != expected[i]) {
        bail!(
            "histogram mismatch at bin {}: got {}, expected {}",
            bin,
            bins[bin],
            expected[bin]
        );
    }

    let total: u64 = bins.iter().map(|&c| u64::from(c)).sum();
    println!(
        "ok: {} lanes counted over {} bins ({} of {} vectors split)",
        total, run.bins, split, run.samples
    );
    Ok(())
}
