//! Whale Optimization Algorithm (WOA) global optimizer in pure Rust using ndarray
//!
//! A population of agents ("whales") explores a box bounded search space.
//! Each iteration every agent is clamped to the bounds and scored, the best
//! agent becomes the leader, and the other agents move with one of three rules:
//! - encircling the leader
//! - bubble-net spiral around the leader
//! - search for prey relative to a random agent
//!
//! Supported features:
//! - Minimisation or maximisation of any `Fn(&Array1<f64>) -> f64`
//! - Injectable random source (seeded `StdRng` by default)
//! - Convergence curve with one best score per iteration
//! - Optional parallel objective evaluation with rayon
//! - Per-iteration callback and CSV recording of a run

#![allow(missing_docs)]
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub mod calc_fitness;
pub mod coefficients;
pub mod error;
pub mod init_random;
pub mod leader;
pub mod parallel_eval;
pub mod recorder;
pub mod run_recorded;
pub mod search_space;
pub mod update_positions;
pub mod whale_optimization;

pub use coefficients::{Coefficients, coefficients};
pub use error::{Result, WoaError};
pub use leader::Leader;
pub use parallel_eval::ParallelConfig;
pub use recorder::{OptimizationRecord, OptimizationRecorder};
pub use run_recorded::run_recorded_whale_optimization;
pub use search_space::SearchSpace;
pub use whale_optimization::whale_optimization;

#[cfg(test)]
mod tests;

/// Optimization direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	#[default]
	Minimize,
	Maximize,
}

impl Direction {
	/// Score a leader starts with: nothing can be worse
	pub fn worst_score(self) -> f64 {
		match self {
			Direction::Minimize => f64::INFINITY,
			Direction::Maximize => f64::NEG_INFINITY,
		}
	}

	/// Strict comparison: ties and NaN never improve
	pub fn improves(self, candidate: f64, current: f64) -> bool {
		match self {
			Direction::Minimize => candidate < current,
			Direction::Maximize => candidate > current,
		}
	}
}

impl FromStr for Direction {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"min" | "minimize" | "minimise" => Ok(Direction::Minimize),
			"max" | "maximize" | "maximise" => Ok(Direction::Maximize),
			_ => Err(format!("unknown direction: {}", s)),
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Direction::Minimize => write!(f, "minimize"),
			Direction::Maximize => write!(f, "maximize"),
		}
	}
}

/// Configuration for the whale optimizer
pub struct WoaConfig {
	/// Number of agents (whales)
	pub population_size: usize,
	/// Number of iterations; the convergence curve has exactly this length
	pub max_iterations: usize,
	pub direction: Direction,
	/// Seed of the default `StdRng` (None = seeded from the thread RNG)
	pub seed: Option<u64>,
	/// Parallel evaluation configuration
	pub parallel: ParallelConfig,
	/// Optional per-iteration observer, called after the leader is updated
	pub callback: Option<Box<dyn FnMut(&WoaIntermediate)>>,
}

impl Default for WoaConfig {
	fn default() -> Self {
		Self {
			population_size: 30,
			max_iterations: 500,
			direction: Direction::default(),
			seed: None,
			parallel: ParallelConfig::default(),
			callback: None,
		}
	}
}

impl WoaConfig {
	/// Reject configurations the optimizer cannot run
	pub fn validate(&self) -> Result<()> {
		if self.population_size == 0 {
			return Err(WoaError::EmptyPopulation);
		}
		if self.max_iterations == 0 {
			return Err(WoaError::NoIterations);
		}
		Ok(())
	}
}

impl fmt::Debug for WoaConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WoaConfig")
			.field("population_size", &self.population_size)
			.field("max_iterations", &self.max_iterations)
			.field("direction", &self.direction)
			.field("seed", &self.seed)
			.field("parallel", &self.parallel)
			.field("callback", &self.callback.is_some())
			.finish()
	}
}

/// Fluent builder for `WoaConfig`.
#[derive(Default)]
pub struct WoaConfigBuilder {
	cfg: WoaConfig,
}
impl WoaConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: WoaConfig::default() }
	}
	pub fn population_size(mut self, v: usize) -> Self {
		self.cfg.population_size = v;
		self
	}
	pub fn max_iterations(mut self, v: usize) -> Self {
		self.cfg.max_iterations = v;
		self
	}
	pub fn direction(mut self, v: Direction) -> Self {
		self.cfg.direction = v;
		self
	}
	pub fn minimize(self) -> Self {
		self.direction(Direction::Minimize)
	}
	pub fn maximize(self) -> Self {
		self.direction(Direction::Maximize)
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn callback(mut self, cb: Box<dyn FnMut(&WoaIntermediate)>) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
		self.cfg.parallel = parallel;
		self
	}
	pub fn enable_parallel(mut self, enable: bool) -> Self {
		self.cfg.parallel.enabled = enable;
		self
	}
	pub fn parallel_threads(mut self, num_threads: usize) -> Self {
		self.cfg.parallel.num_threads = Some(num_threads);
		self
	}
	pub fn build(self) -> WoaConfig {
		self.cfg
	}
}

/// Information passed to the callback after each iteration's evaluation
pub struct WoaIntermediate {
	pub x: Array1<f64>,
	pub fun: f64,
	pub iter: usize,
}

/// Result of a WOA run
#[derive(Clone)]
pub struct WoaReport {
	/// Leader coordinates
	pub x: Array1<f64>,
	/// Leader score
	pub fun: f64,
	/// Best score recorded at each iteration, before the position update
	pub convergence: Vec<f64>,
	pub nit: usize,
	pub nfev: usize,
	pub direction: Direction,
	/// Agents as scored by the final evaluation pass
	pub population: Array2<f64>,
}

impl fmt::Debug for WoaReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WoaReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("convergence", &format!("len={}", self.convergence.len()))
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("direction", &self.direction)
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.finish()
	}
}

/// Plain text table: the optimum followed by one column per dimension
impl fmt::Display for WoaReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let cell = 12;
		let columns = self.x.len() + 1;
		let rule = format!("+{}", format!("{}+", "-".repeat(cell)).repeat(columns));

		writeln!(f, "{}", rule)?;
		write!(f, "|{:^cell$}|", "optimal")?;
		for j in 0..self.x.len() {
			write!(f, "{:^cell$}|", format!("dim{}", j))?;
		}
		writeln!(f)?;
		writeln!(f, "{}", rule)?;
		write!(f, "|{:^cell$}|", format!("{:.5}", self.fun))?;
		for v in self.x.iter() {
			write!(f, "{:^cell$}|", format!("{:.5}", v))?;
		}
		writeln!(f)?;
		write!(f, "{}", rule)
	}
}

/// Whale optimizer over `func` inside `space`, drawing randomness from `R`
pub struct WhaleOptimizer<'a, F, R = StdRng>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
	R: Rng,
{
	func: &'a F,
	space: SearchSpace,
	config: WoaConfig,
	rng: R,
	pop: Array2<f64>,
	leader: Leader,
	convergence: Vec<f64>,
	nfev: usize,
}

impl<'a, F> WhaleOptimizer<'a, F, StdRng>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
{
	/// Create an optimizer whose random source is a `StdRng` built from `config.seed`
	pub fn new(func: &'a F, space: SearchSpace, config: WoaConfig) -> Result<Self> {
		let rng = match config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};
		Self::with_rng(func, space, config, rng)
	}
}

impl<'a, F, R> WhaleOptimizer<'a, F, R>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
	R: Rng,
{
	/// Create an optimizer drawing from a caller supplied random source.
	///
	/// The population is initialised here, so the first draws of `rng` go to
	/// the initial agent coordinates. `config.seed` is ignored.
	pub fn with_rng(func: &'a F, space: SearchSpace, config: WoaConfig, mut rng: R) -> Result<Self> {
		use init_random::init_random;

		config.validate()?;
		let pop = init_random(config.population_size, &space, &mut rng);
		let leader = Leader::new(space.dimension(), config.direction);
		let convergence = vec![0.0; config.max_iterations];
		Ok(Self { func, space, config, rng, pop, leader, convergence, nfev: 0 })
	}

	pub fn config(&self) -> &WoaConfig {
		&self.config
	}

	/// Mutable access to configuration.
	///
	/// `population_size` and `direction` are picked up only if nothing has been
	/// evaluated yet; `max_iterations`, `parallel` and `callback` apply to every
	/// following `solve`.
	pub fn config_mut(&mut self) -> &mut WoaConfig {
		&mut self.config
	}

	pub fn space(&self) -> &SearchSpace {
		&self.space
	}

	/// Current agents, one per row
	pub fn population(&self) -> &Array2<f64> {
		&self.pop
	}

	/// Leader coordinates (zeros before `solve`)
	pub fn leader_position(&self) -> &Array1<f64> {
		self.leader.position()
	}

	/// Leader score (the direction's worst score before `solve`)
	pub fn leader_score(&self) -> f64 {
		self.leader.score()
	}

	/// Best score per iteration (all zeros before `solve`)
	pub fn convergence_curve(&self) -> &[f64] {
		&self.convergence
	}

	/// Run `max_iterations` iterations plus a final evaluation pass and return a report.
	///
	/// Calling it again continues from the current population and leader and
	/// overwrites the convergence curve.
	pub fn solve(&mut self) -> WoaReport {
		use calc_fitness::calc_fitness;
		use init_random::init_random;
		use update_positions::update_positions;

		let max_iter = self.config.max_iterations;
		let direction = self.config.direction;

		if self.nfev == 0 {
			if self.pop.nrows() != self.config.population_size {
				self.pop = init_random(self.config.population_size, &self.space, &mut self.rng);
			}
			self.leader = Leader::new(self.space.dimension(), direction);
		}
		if self.convergence.len() != max_iter {
			self.convergence = vec![0.0; max_iter];
		}

		log::info!(
			"WOA init: {} dimensions in [{}, {}], population={}, maxiter={}, {}",
			self.space.dimension(),
			self.space.lower(),
			self.space.upper(),
			self.config.population_size,
			max_iter,
			direction
		);

		if let Some(n) = self.config.parallel.num_threads {
			// Ignore error if global pool already set
			let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
		}

		for iter in 0..max_iter {
			self.nfev += calc_fitness(
				&mut self.pop,
				&mut self.leader,
				&self.space,
				self.func,
				direction,
				&self.config.parallel,
			);
			let best_f = self.leader.score();
			self.convergence[iter] = best_f;

			log::debug!("WOA iter {:4}  best_f={:.6e}", iter, best_f);

			if let Some(ref mut cb) = self.config.callback {
				let intermediate =
					WoaIntermediate { x: self.leader.position().clone(), fun: best_f, iter };
				cb(&intermediate);
			}

			let coeffs = coefficients(iter, max_iter);
			update_positions(&mut self.pop, &self.leader, coeffs, &mut self.rng);
		}

		// score the positions produced by the last update
		self.nfev += calc_fitness(
			&mut self.pop,
			&mut self.leader,
			&self.space,
			self.func,
			direction,
			&self.config.parallel,
		);

		if self.leader.index().is_none() {
			log::warn!("WOA finished without a finite leader: the objective never beat the initial score");
		}
		log::info!(
			"WOA finished: best_f={:.6e} after {} iterations, {} evaluations",
			self.leader.score(),
			max_iter,
			self.nfev
		);

		WoaReport {
			x: self.leader.position().clone(),
			fun: self.leader.score(),
			convergence: self.convergence.clone(),
			nit: max_iter,
			nfev: self.nfev,
			direction,
			population: self.pop.clone(),
		}
	}
}
