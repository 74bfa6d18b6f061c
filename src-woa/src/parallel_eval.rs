//! Objective evaluation over a whole population, optionally on the rayon pool

use ndarray::{Array1, Array2};
use rayon::prelude::*;

/// Parallel evaluation configuration
#[derive(Debug, Clone, Default)]
pub struct ParallelConfig {
    /// Evaluate the objective for all agents of an iteration concurrently
    pub enabled: bool,
    /// Size of the global rayon pool (None = rayon default)
    pub num_threads: Option<usize>,
}

/// Score every row of `pop`. Output order always matches row order.
pub fn evaluate_population_parallel<F>(
    pop: &Array2<f64>,
    func: &F,
    config: &ParallelConfig,
) -> Array1<f64>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    if config.enabled && pop.nrows() > 1 {
        let rows: Vec<Array1<f64>> = pop.rows().into_iter().map(|r| r.to_owned()).collect();
        let scores: Vec<f64> = rows.par_iter().map(|x| func(x)).collect();
        Array1::from(scores)
    } else {
        pop.rows().into_iter().map(|r| func(&r.to_owned())).collect()
    }
}
