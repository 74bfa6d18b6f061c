//! Run the whale optimizer on one of the benchmark functions and print the optimum
//!
//! ```text
//! run_woa --function rastrigin --dimension 5 --population 40 --iterations 300 --seed 7
//! RUST_LOG=debug run_woa --function sphere --record data_generated/records
//! ```

use clap::Parser;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use woa::{
	Direction, SearchSpace, WoaConfig, WoaConfigBuilder, WoaReport, run_recorded_whale_optimization,
	whale_optimization,
};
use woa_testfunctions::{function_names, get_function_metadata};

/// Minimise (or maximise) a benchmark function with the Whale Optimization Algorithm.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Name of the benchmark function (see --list).
	#[arg(short, long, default_value = "sphere")]
	function: String,

	/// Number of coordinates per agent.
	#[arg(short, long, default_value_t = 2, value_parser = parse_positive_usize)]
	dimension: usize,

	/// Lower bound shared by all coordinates (default: the function's own bounds).
	#[arg(long, allow_hyphen_values = true)]
	lower: Option<f64>,

	/// Upper bound shared by all coordinates (default: the function's own bounds).
	#[arg(long, allow_hyphen_values = true)]
	upper: Option<f64>,

	/// Number of agents.
	#[arg(short, long, default_value_t = 30, value_parser = parse_positive_usize)]
	population: usize,

	/// Number of iterations.
	#[arg(short, long, default_value_t = 500, value_parser = parse_positive_usize)]
	iterations: usize,

	/// Optimization direction: minimize or maximize.
	#[arg(long, default_value = "minimize")]
	direction: Direction,

	/// Random seed for a reproducible run.
	#[arg(short, long)]
	seed: Option<u64>,

	/// Evaluate the objective in parallel.
	#[arg(long, default_value_t = false)]
	parallel: bool,

	/// Number of worker threads for parallel evaluation.
	#[arg(long)]
	threads: Option<usize>,

	/// Directory where the per-iteration CSV record is written.
	#[arg(long)]
	record: Option<PathBuf>,

	/// Print the convergence curve, one best score per iteration.
	#[arg(long, default_value_t = false)]
	curve: bool,

	/// Print the report as JSON instead of a table.
	#[arg(long, default_value_t = false)]
	json: bool,

	/// List the available benchmark functions and exit.
	#[arg(long, default_value_t = false)]
	list: bool,
}

fn parse_positive_usize(s: &str) -> Result<usize, String> {
	match s.parse::<usize>() {
		Ok(0) => Err("must be at least 1".to_string()),
		Ok(v) => Ok(v),
		Err(e) => Err(e.to_string()),
	}
}

/// JSON view of a run
#[derive(Serialize)]
struct RunSummary<'a> {
	function: &'a str,
	space: SearchSpace,
	direction: Direction,
	best_score: f64,
	best_position: Vec<f64>,
	iterations: usize,
	evaluations: usize,
	convergence: &'a [f64],
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	if args.list {
		for name in function_names() {
			println!("{}", name);
		}
		return;
	}

	if let Err(e) = run(&args) {
		eprintln!("run_woa: {}", e);
		process::exit(1);
	}
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
	let metadata = get_function_metadata();
	let meta = metadata.get(&args.function).ok_or_else(|| {
		format!("unknown function '{}', use --list to see the choices", args.function)
	})?;

	let lower = args.lower.unwrap_or(meta.bounds.0);
	let upper = args.upper.unwrap_or(meta.bounds.1);
	let space = SearchSpace::new(lower, upper, args.dimension)?;
	let config = build_config(args);

	let report = match &args.record {
		Some(dir) => {
			let (report, csv_path) = run_recorded_whale_optimization(
				&args.function,
				meta.function,
				space,
				config,
				&dir.to_string_lossy(),
			)?;
			log::info!("record written to {}", csv_path);
			report
		}
		None => whale_optimization(&meta.function, space, config)?,
	};

	if args.json {
		print_json(&args.function, space, &report)?;
	} else {
		println!("{}", report);
		if args.curve {
			for (iter, best) in report.convergence.iter().enumerate() {
				println!("{:6} {:.10e}", iter, best);
			}
		}
	}
	Ok(())
}

fn build_config(args: &Args) -> WoaConfig {
	let mut builder = WoaConfigBuilder::new()
		.population_size(args.population)
		.max_iterations(args.iterations)
		.direction(args.direction)
		.enable_parallel(args.parallel);
	if let Some(seed) = args.seed {
		builder = builder.seed(seed);
	}
	if let Some(threads) = args.threads {
		builder = builder.parallel_threads(threads);
	}
	builder.build()
}

fn print_json(function: &str, space: SearchSpace, report: &WoaReport) -> Result<(), Box<dyn Error>> {
	let summary = RunSummary {
		function,
		space,
		direction: report.direction,
		best_score: report.fun,
		best_position: report.x.to_vec(),
		iterations: report.nit,
		evaluations: report.nfev,
		convergence: &report.convergence,
	};
	println!("{}", serde_json::to_string_pretty(&summary)?);
	Ok(())
}
