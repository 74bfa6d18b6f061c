use woa::{SearchSpace, WoaConfigBuilder, whale_optimization};
use woa_testfunctions::{ackley, get_function_bounds, griewank, rastrigin, rosenbrock};

fn space_for(name: &str, dimension: usize) -> SearchSpace {
    let (lower, upper) = get_function_bounds(name).unwrap();
    SearchSpace::new(lower, upper, dimension).unwrap()
}

#[test]
fn test_woa_rastrigin_2d() {
    let config = WoaConfigBuilder::new().seed(40).population_size(40).max_iterations(400).build();
    let report = whale_optimization(&rastrigin, space_for("rastrigin", 2), config).unwrap();
    assert!(report.fun < 1e-2, "Rastrigin function value too high: {}", report.fun);
    for &xi in report.x.iter() {
        assert!(xi.abs() < 1e-1, "Solution component too far from 0: {}", xi);
    }
}

#[test]
fn test_woa_ackley_3d() {
    let config = WoaConfigBuilder::new().seed(41).population_size(40).max_iterations(400).build();
    let report = whale_optimization(&ackley, space_for("ackley", 3), config).unwrap();
    assert!(report.fun < 1e-2, "Ackley function value too high: {}", report.fun);
}

#[test]
fn test_woa_griewank_2d() {
    let config = WoaConfigBuilder::new().seed(42).population_size(40).max_iterations(400).build();
    let report = whale_optimization(&griewank, space_for("griewank", 2), config).unwrap();
    assert!(report.fun < 1e-1, "Griewank function value too high: {}", report.fun);
}

#[test]
fn test_woa_rosenbrock_2d() {
    let config = WoaConfigBuilder::new().seed(43).population_size(60).max_iterations(500).build();
    let report = whale_optimization(&rosenbrock, space_for("rosenbrock", 2), config).unwrap();
    assert!(report.fun < 1.0, "Rosenbrock function value too high: {}", report.fun);
    assert!(report.convergence[report.convergence.len() - 1] <= report.convergence[0]);
}
