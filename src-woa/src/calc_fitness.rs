use ndarray::{Array1, Array2};

use crate::Direction;
use crate::leader::Leader;
use crate::parallel_eval::{ParallelConfig, evaluate_population_parallel};
use crate::search_space::SearchSpace;

/// Clamp every agent, score it and promote strictly better agents to leader.
///
/// Agents are offered to the leader in population order so the earliest of
/// several equal scores wins, whether or not the scores were computed in
/// parallel. Returns the number of objective evaluations.
pub(crate) fn calc_fitness<F>(
    pop: &mut Array2<f64>,
    leader: &mut Leader,
    space: &SearchSpace,
    func: &F,
    direction: Direction,
    parallel: &ParallelConfig,
) -> usize
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    for row in pop.rows_mut() {
        space.clamp(row);
    }

    let scores = evaluate_population_parallel(pop, func, parallel);
    for (i, &score) in scores.iter().enumerate() {
        if leader.offer(i, pop.row(i), score, direction) {
            log::trace!("new leader from agent {} with score {:.6e}", i, score);
        }
    }
    pop.nrows()
}
