//! NormWin CLI - Norman window area optimizer.
//!
//! A command-line interface for the `normwin-core` library. Supports
//! single-perimeter optimization, perimeter sweeps with running
//! statistics, and dumping the area-vs-perimeter sensitivity table.

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use normwin_core::{AreaResult, WindowOptimizer};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width search strategy selection.
#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum Algorithm {
    /// Golden Section: derivative-free bounded search (default).
    Golden,
    /// Closed Form: exact analytic maximizer.
    ClosedForm,
}

impl From<Algorithm> for normwin_core::Algorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Golden => normwin_core::Algorithm::GoldenSection,
            Algorithm::ClosedForm => normwin_core::Algorithm::ClosedForm,
        }
    }
}

/// CLI arguments structure.
#[derive(Parser)]
#[command(name = "normwin", version, about = "Norman window area optimizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Window perimeter in meters (positional argument).
    #[arg(conflicts_with = "perimeter")]
    value: Option<f64>,

    /// Window perimeter in meters, using `--perimeter`.
    #[arg(long, conflicts_with = "value")]
    perimeter: Option<f64>,

    /// Strategy to use for the width search.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Golden)]
    algorithm: Algorithm,

    /// Show detailed result analysis (area split, constraint residual).
    #[arg(short, long)]
    detail: bool,

    /// Emit the result as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Optimize a range of perimeters and report running statistics.
    Sweep {
        /// Start perimeter in meters (inclusive).
        start: f64,
        /// End perimeter in meters (inclusive).
        end: f64,
        /// Perimeter increment per step.
        #[arg(long, default_value_t = 0.1)]
        step: f64,
    },
    /// Print the precomputed area-vs-perimeter sensitivity table.
    Table {
        /// Emit the table as JSON instead of aligned columns.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut optimizer = WindowOptimizer::with_algorithm(cli.algorithm.into());

    match &cli.command {
        Some(Commands::Sweep { start, end, step }) => {
            run_sweep(&mut optimizer, *start, *end, *step)?;
        }
        Some(Commands::Table { json }) => {
            run_table(&optimizer, *json)?;
        }
        None => {
            // Default perimeter matches the presentation layer's initial
            // slider position.
            let perimeter = cli.perimeter.or(cli.value).unwrap_or(12.0);
            run_single(&mut optimizer, perimeter, cli.detail, cli.json)?;
        }
    }

    Ok(())
}

/// Executes a single optimization and displays the result.
fn run_single(
    optimizer: &mut WindowOptimizer,
    perimeter: f64,
    detail: bool,
    json: bool,
) -> anyhow::Result<()> {
    let result = optimizer.optimize(perimeter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("--- Execution Configuration ---");
    println!("NormWin v{}", VERSION);
    println!("Strategy: {}", optimizer.algorithm());
    println!();
    println!("--- Optimal Dimensions (P = {} m) ---", perimeter);
    println!("Width     : {:.4} m", result.width);
    println!("Height    : {:.4} m", result.height);
    println!("Radius    : {:.4} m", result.radius());
    println!("Max area  : {:.4} m^2", result.max_area);

    if detail {
        let semicircle = std::f64::consts::PI * result.width * result.width / 8.0;
        let rectangle = result.max_area - semicircle;
        let residual =
            result.width * (1.0 + std::f64::consts::FRAC_PI_2) + 2.0 * result.height - perimeter;

        println!();
        println!("--- Detailed result analysis ---");
        println!("Rectangle area     : {:.4} m^2", rectangle);
        println!("Semicircle area    : {:.4} m^2", semicircle);
        println!("Constraint residual: {:+.2e} m", residual);
    }

    Ok(())
}

/// Optimizes every perimeter in `[start, end]` and reports statistics
/// over the retained history window.
fn run_sweep(
    optimizer: &mut WindowOptimizer,
    start: f64,
    end: f64,
    step: f64,
) -> anyhow::Result<()> {
    anyhow::ensure!(step > 0.0, "step must be positive, got {}", step);
    anyhow::ensure!(
        start <= end,
        "start ({}) must not exceed end ({})",
        start,
        end
    );

    let steps = ((end - start) / step).floor() as u64 + 1;

    println!("--- Execution Configuration ---");
    println!("NormWin v{}", VERSION);
    println!("Strategy: {}", optimizer.algorithm());
    println!("Sweeping P = {} m to {} m in steps of {} m", start, end, step);
    println!();

    let pb = ProgressBar::new(steps);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Sweep: {percent:>3}% [{bar:40.green/dim}] {pos}/{len} ETA: {eta}")
            .unwrap()
            .progress_chars("████"),
    );

    let mut best: Option<(f64, AreaResult)> = None;
    for i in 0..steps {
        let perimeter = start + step * i as f64;
        let result = optimizer.optimize(perimeter)?;
        if best.map_or(true, |(_, b)| result.max_area > b.max_area) {
            best = Some((perimeter, result));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let stats = optimizer.stats();
    println!("--- Sweep Complete ---");
    println!("Perimeters optimized : {}", steps);
    println!();
    println!("--- Statistics (last {} results) ---", stats.count);
    println!("Count          : {}", stats.count);
    println!("Mean perimeter : {:.2} m", stats.mean_perimeter);
    println!("Mean area      : {:.2} m^2", stats.mean_area);
    println!("Best area seen : {:.2} m^2", stats.max_area_seen);

    if let Some((perimeter, result)) = best {
        println!();
        println!(
            "Largest window: P = {} m -> {:.4} m x {:.4} m, {:.4} m^2",
            perimeter, result.width, result.height, result.max_area
        );
    }

    Ok(())
}

/// Prints the 100-sample sensitivity table.
fn run_table(optimizer: &WindowOptimizer, json: bool) -> anyhow::Result<()> {
    let table = optimizer.sensitivity_table();

    if json {
        println!("{}", serde_json::to_string_pretty(table.points())?);
        return Ok(());
    }

    println!("--- Sensitivity Table ({} samples) ---", table.len());
    println!("{:>12}  {:>14}", "P (m)", "Max area (m^2)");
    for point in table.points() {
        println!("{:>12.2}  {:>14.4}", point.perimeter, point.max_area);
    }

    Ok(())
}
