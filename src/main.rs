// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This is the command line front-end of shipmatch. It reads one or more json
//! files listing drivers and shipments, and prints the assignment computed for
//! each of them.
//!
//! ```text
//! shipmatch data.json --strategy greedy
//! RUST_LOG=debug shipmatch day1.json day2.json day3.json --threads 3
//! ```

use std::{path::PathBuf, process::ExitCode, time::{Duration, Instant}};

use clap::Parser;
use shipmatch::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the input file(s)
    #[clap(required = true)]
    files: Vec<PathBuf>,
    /// The solving strategy: greedy or optimal
    #[clap(short, long, default_value = "optimal")]
    strategy: Strategy,
    /// The number of concurrent threads (when several files are given)
    #[clap(short, long)]
    threads: Option<usize>,
    /// The maximum amount of time (in seconds) you would like the computation to run
    #[clap(short, long)]
    duration: Option<u64>,
    /// Print the outcome as json rather than as text
    #[clap(long)]
    json: bool,
}

/// An utility function to return a cutoff heuristic that can either be a time budget policy
/// (if timeout is fixed) or no cutoff policy.
fn cutoff(timeout: Option<u64>) -> Box<dyn Cutoff + Send + Sync> {
    if let Some(t) = timeout {
        Box::new(TimeBudget::new(Duration::from_secs(t)))
    } else {
        Box::new(NoCutoff)
    }
}

fn print_outcome(outcome: &Outcome, as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(outcome) {
            Ok(text) => println!("{text}"),
            Err(e)   => eprintln!("cannot serialize outcome: {e}"),
        }
        return;
    }
    for a in outcome.assignments.iter() {
        println!("{:<30} -> {:<40} ({:.2})", a.agent_name, a.task_descriptor, a.score);
    }
    println!("Total score: {:.2}", outcome.total_score);
}

/// This is your executable's entry point. It is the place where all the pieces are put together.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args    = Args::parse();
    let cutoff  = cutoff(args.duration);
    let mut config = OrchestratorConfig::from(args.strategy);
    if let Some(threads) = args.threads {
        config.nb_threads = threads;
    }

    let orchestrator = AssignmentOrchestrator::custom(&SuitabilityScore, cutoff.as_ref(), config);
    let providers: Vec<JsonFileProvider> = args.files.iter().map(JsonFileProvider::new).collect();
    let providers: Vec<&(dyn DataProvider + Sync)> = providers.iter().map(|p| p as &(dyn DataProvider + Sync)).collect();

    let start    = Instant::now();
    let outcomes = orchestrator.run_all(&providers);
    let duration = start.elapsed();

    let mut failed = false;
    for (file, outcome) in args.files.iter().zip(outcomes.iter()) {
        if args.files.len() > 1 && !args.json {
            println!("== {}", file.display());
        }
        match outcome {
            Ok(outcome) => print_outcome(outcome, args.json),
            Err(e) => {
                eprintln!("{}: {e}", file.display());
                failed = true;
            }
        }
    }
    if !args.json {
        println!("Strategy:    {}", args.strategy);
        println!("Duration:    {:.3} seconds", duration.as_secs_f32());
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
