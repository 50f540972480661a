//! diskseek command-line interface.
//!
//! Runs one policy (`simulate`) or every policy (`compare`) over a request
//! queue given on the command line or generated at random.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_diskseek::comparison::{ComparisonEngine, ComparisonResult};
use u_diskseek::models::RequestQueue;
use u_diskseek::policies::{PolicyKind, DEFAULT_BATCH_SIZE};
use u_diskseek::simulator::{SimulationOptions, SimulationOutcome, Simulator};
use u_diskseek::validation::{validate_input, ValidatedInput};
use u_diskseek::{SeekError, SeekResult};

#[derive(Parser, Debug)]
#[command(name = "diskseek", version)]
#[command(about = "Simulate disk-arm scheduling policies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one policy and print its service order and metrics
    Simulate {
        #[command(flatten)]
        input: InputArgs,

        /// Policy: FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK, RSS, LIFO, N-STEP-SCAN, F-SCAN
        #[arg(short, long)]
        policy: String,

        /// Print every head movement
        #[arg(long)]
        trace: bool,
    },
    /// Run every policy against the same queue and rank them
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Number of tracks on the disk
    #[arg(short = 's', long, default_value_t = 200, allow_hyphen_values = true)]
    disk_size: i64,

    /// Initial head position
    #[arg(long, default_value_t = 50, allow_hyphen_values = true)]
    head: i64,

    /// Request tracks (comma-separated)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    requests: Vec<i64>,

    /// Generate this many uniform random requests instead
    #[arg(long, conflicts_with = "requests")]
    random: Option<usize>,

    /// Initial head direction (increasing | decreasing)
    #[arg(short, long)]
    direction: Option<String>,

    /// Seed for RSS and random request generation
    #[arg(long)]
    seed: Option<u64>,

    /// N-step SCAN batch size
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Time units per track of movement
    #[arg(long, default_value_t = 1.0)]
    time_per_track: f64,

    /// Emit JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl InputArgs {
    fn load(&self, policy: Option<&str>) -> SeekResult<ValidatedInput> {
        let mut input = validate_input(
            self.disk_size,
            self.head,
            &self.requests,
            policy,
            self.direction.as_deref(),
        )?;

        if let Some(count) = self.random {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            input.queue = RequestQueue::random(&input.disk, count, &mut rng);
            debug!(count, "generated random requests");
        }

        Ok(input)
    }

    fn simulator(&self, input: &ValidatedInput) -> Simulator {
        let mut options = SimulationOptions::default()
            .with_batch_size(self.batch_size)
            .with_time_per_track(self.time_per_track);
        options.seed = self.seed;

        Simulator::new(input.disk)
            .with_direction_opt(input.direction)
            .with_options(options)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Simulate {
            input,
            policy,
            trace,
        } => run_simulate(input, policy, *trace),
        Command::Compare { input } => run_compare(input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(SeekError::InvalidInput(errors)) => {
            eprintln!("Invalid input:");
            for e in &errors {
                eprintln!("  - {e}");
            }
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "simulation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_simulate(args: &InputArgs, policy: &str, show_trace: bool) -> SeekResult<()> {
    let input = args.load(Some(policy))?;
    let policy: PolicyKind = policy.parse()?;
    let outcome = args.simulator(&input).run(policy, &input.queue)?;

    if args.json {
        print_json(&outcome);
    } else {
        print_outcome(&input, &outcome, show_trace);
    }
    Ok(())
}

fn run_compare(args: &InputArgs) -> SeekResult<()> {
    let input = args.load(None)?;
    let result = ComparisonEngine::new(args.simulator(&input)).compare(&input.queue)?;

    if args.json {
        print_json(&result);
    } else {
        print_comparison(&input, &result);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => error!(error = %e, "failed to serialize output"),
    }
}

fn print_header(input: &ValidatedInput) {
    println!("Disk: {} tracks, head at {}", input.disk.size(), input.disk.head());
    if let Some(direction) = input.direction {
        println!("Direction: {direction}");
    }
    println!("Requests ({}): {:?}\n", input.queue.len(), input.queue.tracks());
}

fn print_outcome(input: &ValidatedInput, outcome: &SimulationOutcome, show_trace: bool) {
    print_header(input);

    let m = &outcome.metrics;
    println!("--- {} ({}) ---", outcome.policy, outcome.policy.description());
    println!("Service order:     {:?}", outcome.sequence);
    println!("Total seek time:   {}", m.total_seek_time);
    println!("Average seek time: {:.2}", m.average_seek_time);
    println!("Throughput:        {:.4}", m.throughput);
    println!("Max seek:          {}", m.max_seek);
    println!("Reversals:         {}", m.direction_changes);
    println!("Elapsed time:      {:.2}", m.elapsed_time);

    if show_trace {
        println!(
            "\n{:>5} {:>7} {:>7} {:>8} {:>11} {:>10} {:>8}",
            "Step", "From", "To", "Moved", "Cumulative", "Time", "Request"
        );
        println!("{}", "-".repeat(62));
        for step in outcome.trace.steps() {
            let request = step
                .request
                .map(|i| format!("#{i}"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>5} {:>7} {:>7} {:>8} {:>11} {:>10.2} {:>8}",
                step.step, step.from, step.to, step.distance, step.cumulative, step.time, request
            );
        }
    }
}

fn print_comparison(input: &ValidatedInput, result: &ComparisonResult) {
    print_header(input);

    println!(
        "{:<4} {:<12} {:>10} {:>10} {:>11}",
        "Rank", "Policy", "Total", "Average", "Throughput"
    );
    println!("{}", "-".repeat(51));
    for (rank, report) in result.ranking().iter().enumerate() {
        let m = &report.metrics;
        println!(
            "{:<4} {:<12} {:>10} {:>10.2} {:>11.4}",
            rank + 1,
            report.policy.name(),
            m.total_seek_time,
            m.average_seek_time,
            m.throughput
        );
    }

    if !result.skipped.is_empty() {
        let names: Vec<&str> = result.skipped.iter().map(|p| p.name()).collect();
        println!("\nSkipped (no direction given): {}", names.join(", "));
    }
    if let Some(best) = result.best_policy {
        println!("\nBest policy: {best}");
    }
}
