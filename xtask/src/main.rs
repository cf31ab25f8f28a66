use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};

const CORE: &str = "dispatch_core";
const CLI: &str = "dispatch_cli";

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the RouteRide dispatch workspace",
    long_about = "Runs the RouteRide console, the dispatcher benchmarks,\n\
                  the ignored load tests and the CI checks."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive RouteRide console
    Run {
        /// Directory that receives driver history files
        #[arg(long, default_value = ".")]
        output_dir: String,
        /// JSON seed catalog (built-in catalog when omitted)
        #[arg(long, env = "ROUTERIDE_CATALOG")]
        catalog: Option<String>,
        /// Reject rides whose source and destination match
        #[arg(long)]
        reject_same_location: bool,
    },
    /// Run the dispatcher benchmarks
    Bench {
        /// Save results under this Criterion baseline name
        #[arg(long, conflicts_with = "baseline")]
        save_baseline: Option<String>,
        /// Compare against a previously saved baseline
        #[arg(long)]
        baseline: Option<String>,
    },
    /// Run CI checks
    Ci {
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Run the ignored dispatcher load tests
    LoadTest,
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests for both crates
    Check,
    /// Benchmarks
    Bench,
    /// Check, then bench
    All,
}

/// Run one cargo invocation, exiting with its status on failure.
fn cargo(label: &str, args: &[&str]) {
    eprintln!("\n=== {label} ===\n+ cargo {}", args.join(" "));
    match Command::new("cargo").args(args).status() {
        Ok(status) if status.success() => {}
        Ok(status) => exit(status.code().unwrap_or(1)),
        Err(err) => {
            eprintln!("could not start cargo: {err}");
            exit(1);
        }
    }
}

fn bench_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["bench", "-p", CORE, "--bench", "performance"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    args
}

fn ci_check() {
    cargo("Formatting", &["fmt", "--all", "--", "--check"]);
    cargo(
        "Clippy",
        &["clippy", "--all-targets", "--all-features", "--", "-D", "warnings"],
    );
    for package in [CORE, CLI] {
        cargo(&format!("Tests: {package}"), &["test", "-p", package]);
    }
}

fn main() {
    match Cli::parse().command {
        Commands::Run {
            output_dir,
            catalog,
            reject_same_location,
        } => {
            let mut args = vec!["run", "-p", CLI, "--release", "--", "--output-dir", output_dir.as_str()];
            if let Some(catalog) = catalog.as_deref() {
                args.extend(["--catalog", catalog]);
            }
            if reject_same_location {
                args.push("--reject-same-location");
            }
            cargo("RouteRide console", &args);
        }
        Commands::Bench {
            save_baseline,
            baseline,
        } => {
            let extra: Vec<&str> = match (save_baseline.as_deref(), baseline.as_deref()) {
                (Some(name), _) => vec!["--save-baseline", name],
                (None, Some(name)) => vec!["--baseline", name],
                (None, None) => Vec::new(),
            };
            cargo("Benchmarks", &bench_args(&extra));
        }
        Commands::Ci { job } => {
            if matches!(job, CiJob::Check | CiJob::All) {
                ci_check();
            }
            if matches!(job, CiJob::Bench | CiJob::All) {
                cargo("Benchmarks", &bench_args(&[]));
            }
            eprintln!("\nCI job passed.");
        }
        Commands::LoadTest => cargo(
            "Load tests",
            &["test", "-p", CORE, "--test", "load_tests", "--", "--ignored"],
        ),
    }
}
