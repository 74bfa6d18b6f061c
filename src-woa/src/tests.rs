use ndarray::{Array1, array};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
	Direction, OptimizationRecorder, SearchSpace, WhaleOptimizer, WoaConfigBuilder, WoaError,
	WoaIntermediate, whale_optimization,
};

fn sphere(x: &Array1<f64>) -> f64 {
	x.iter().map(|&xi| xi * xi).sum()
}

#[test]
fn test_parse_direction_variants() {
	assert_eq!("min".parse::<Direction>().unwrap(), Direction::Minimize);
	assert_eq!("Maximize".parse::<Direction>().unwrap(), Direction::Maximize);
	assert_eq!("MAX".parse::<Direction>().unwrap(), Direction::Maximize);
	assert!("sideways".parse::<Direction>().is_err());
	assert_eq!(Direction::Maximize.to_string(), "maximize");
}

#[test]
fn test_configuration_errors_fail_fast() {
	let space = SearchSpace::new(-1.0, 1.0, 2).unwrap();
	let config = WoaConfigBuilder::new().population_size(0).build();
	assert!(matches!(
		WhaleOptimizer::new(&sphere, space, config),
		Err(WoaError::EmptyPopulation)
	));

	let config = WoaConfigBuilder::new().max_iterations(0).build();
	assert!(matches!(whale_optimization(&sphere, space, config), Err(WoaError::NoIterations)));
}

#[test]
fn test_accessors_before_solve_hold_sentinels() {
	let space = SearchSpace::new(-1.0, 1.0, 3).unwrap();
	let config = WoaConfigBuilder::new().seed(1).max_iterations(7).population_size(4).build();
	let woa = WhaleOptimizer::new(&sphere, space, config).unwrap();
	assert_eq!(woa.leader_position(), &Array1::<f64>::zeros(3));
	assert_eq!(woa.leader_score(), f64::INFINITY);
	assert_eq!(woa.convergence_curve(), &[0.0; 7]);
	assert_eq!(woa.population().dim(), (4, 3));
}

#[test]
fn test_accessors_after_solve_match_report() {
	let space = SearchSpace::new(-2.0, 2.0, 2).unwrap();
	let config = WoaConfigBuilder::new().seed(9).max_iterations(25).population_size(10).build();
	let mut woa = WhaleOptimizer::new(&sphere, space, config).unwrap();
	let report = woa.solve();
	assert_eq!(woa.leader_position(), &report.x);
	assert_eq!(woa.leader_score(), report.fun);
	assert_eq!(woa.convergence_curve(), report.convergence.as_slice());
	assert_eq!(report.nit, 25);
	// one pass per iteration plus the final pass
	assert_eq!(report.nfev, 26 * 10);
	assert_eq!(sphere(&report.x), report.fun);
}

#[test]
fn test_config_mut_before_solve() {
	let space = SearchSpace::new(-2.0, 2.0, 3).unwrap();
	let direct = whale_optimization(
		&sphere,
		space,
		WoaConfigBuilder::new().seed(21).max_iterations(20).population_size(6).build(),
	)
	.unwrap();

	let config = WoaConfigBuilder::new().seed(21).max_iterations(10).population_size(6).build();
	let mut woa = WhaleOptimizer::new(&sphere, space, config).unwrap();
	woa.config_mut().max_iterations = 20;
	let report = woa.solve();
	assert_eq!(report.nit, 20);
	assert_eq!(report.convergence, direct.convergence);
	assert_eq!(report.x, direct.x);

	let neg = |x: &Array1<f64>| -sphere(x);
	let config = WoaConfigBuilder::new().seed(21).max_iterations(15).population_size(6).build();
	let mut woa = WhaleOptimizer::new(&neg, space, config).unwrap();
	woa.config_mut().population_size = 9;
	woa.config_mut().direction = Direction::Maximize;
	let report = woa.solve();
	assert_eq!(report.direction, Direction::Maximize);
	assert_eq!(report.population.dim(), (9, 3));
	assert_eq!(report.nfev, 16 * 9);
	assert!(report.fun.is_finite() && report.fun <= 0.0);
	for w in report.convergence.windows(2) {
		assert!(w[1] >= w[0]);
	}
}

#[test]
fn test_injected_rng_is_deterministic() {
	let space = SearchSpace::new(-5.0, 5.0, 3).unwrap();
	let run = || {
		let config = WoaConfigBuilder::new().max_iterations(30).population_size(12).build();
		let mut woa =
			WhaleOptimizer::with_rng(&sphere, space, config, StdRng::seed_from_u64(2024)).unwrap();
		woa.solve()
	};
	let a = run();
	let b = run();
	assert_eq!(a.x, b.x);
	assert_eq!(a.fun, b.fun);
	assert_eq!(a.convergence, b.convergence);
	assert_eq!(a.population, b.population);
}

#[test]
fn test_seed_matches_injected_std_rng() {
	let space = SearchSpace::new(-5.0, 5.0, 2).unwrap();
	let seeded = whale_optimization(
		&sphere,
		space,
		WoaConfigBuilder::new().seed(77).max_iterations(15).population_size(8).build(),
	)
	.unwrap();
	let config = WoaConfigBuilder::new().max_iterations(15).population_size(8).build();
	let injected = WhaleOptimizer::with_rng(&sphere, space, config, StdRng::seed_from_u64(77))
		.unwrap()
		.solve();
	assert_eq!(seeded.convergence, injected.convergence);
	assert_eq!(seeded.x, injected.x);
}

#[test]
fn test_parallel_evaluation_does_not_change_trajectory() {
	let space = SearchSpace::new(-5.0, 5.0, 4).unwrap();
	let sequential = whale_optimization(
		&sphere,
		space,
		WoaConfigBuilder::new().seed(5).max_iterations(20).population_size(16).build(),
	)
	.unwrap();
	let parallel = whale_optimization(
		&sphere,
		space,
		WoaConfigBuilder::new()
			.seed(5)
			.max_iterations(20)
			.population_size(16)
			.enable_parallel(true)
			.build(),
	)
	.unwrap();
	assert_eq!(sequential.convergence, parallel.convergence);
	assert_eq!(sequential.x, parallel.x);
}

#[test]
fn test_nan_objective_never_becomes_leader() {
	let space = SearchSpace::new(-1.0, 1.0, 2).unwrap();
	let nan = |_: &Array1<f64>| f64::NAN;
	let report = whale_optimization(
		&nan,
		space,
		WoaConfigBuilder::new().seed(3).max_iterations(5).population_size(6).build(),
	)
	.unwrap();
	assert_eq!(report.fun, f64::INFINITY);
	assert_eq!(report.x, Array1::<f64>::zeros(2));
	assert!(report.convergence.iter().all(|&v| v == f64::INFINITY));
}

#[test]
fn test_callback_sees_every_iteration() {
	use std::cell::RefCell;
	use std::rc::Rc;

	let iters = Rc::new(RefCell::new(Vec::new()));
	let iters_cb = iters.clone();
	let space = SearchSpace::new(-3.0, 3.0, 2).unwrap();
	let config = WoaConfigBuilder::new()
		.seed(8)
		.max_iterations(12)
		.population_size(5)
		.callback(Box::new(move |it: &WoaIntermediate| iters_cb.borrow_mut().push((it.iter, it.fun))))
		.build();
	let report = whale_optimization(&sphere, space, config).unwrap();

	let seen = iters.borrow();
	assert_eq!(seen.len(), 12);
	for (i, (iter, fun)) in seen.iter().enumerate() {
		assert_eq!(*iter, i);
		assert_eq!(*fun, report.convergence[i]);
	}
}

#[test]
fn test_report_renders_optimum_table() {
	let space = SearchSpace::new(-1.0, 1.0, 2).unwrap();
	let mut report = whale_optimization(
		&sphere,
		space,
		WoaConfigBuilder::new().seed(4).max_iterations(3).population_size(3).build(),
	)
	.unwrap();
	report.x = array![0.5, -0.25];
	report.fun = 0.3125;

	let table = report.to_string();
	let lines: Vec<&str> = table.lines().collect();
	assert_eq!(lines.len(), 5);
	assert_eq!(lines[0], lines[2]);
	assert_eq!(lines[0], lines[4]);
	assert!(lines[1].contains("optimal") && lines[1].contains("dim1"));
	assert!(lines[3].contains("0.31250"));
	assert!(lines[3].contains("-0.25000"));
	assert!(format!("{:?}", report).contains("population: \"3x2\""));
}

#[test]
fn test_optimization_recorder() {
	let recorder = OptimizationRecorder::new("test_function".to_string());
	let mut callback = recorder.create_callback();

	callback(&WoaIntermediate { x: array![1.0, 2.0], fun: 5.0, iter: 0 });
	callback(&WoaIntermediate { x: array![1.0, 2.0], fun: 5.0, iter: 1 });
	callback(&WoaIntermediate { x: array![0.5, 1.0], fun: 1.25, iter: 2 });

	let records = recorder.get_records();
	assert_eq!(records.len(), 3);
	assert!(records[0].is_improvement);
	assert!(!records[1].is_improvement);
	assert!(records[2].is_improvement);
	assert_eq!(records[2].x, vec![0.5, 1.0]);
	assert_eq!(recorder.get_best_solution(), Some((vec![0.5, 1.0], 1.25)));

	let dir = tempfile::tempdir().unwrap();
	let path = recorder.save_to_csv(dir.path().to_str().unwrap()).unwrap();
	let content = std::fs::read_to_string(&path).unwrap();
	let lines: Vec<&str> = content.trim().lines().collect();
	assert_eq!(lines[0], "iteration,x0,x1,best_result,is_improvement");
	assert_eq!(lines.len(), 4);
	assert!(lines[2].ends_with(",false"));

	recorder.clear();
	assert_eq!(recorder.num_iterations(), 0);
	assert_eq!(recorder.get_best_solution(), None);
}
