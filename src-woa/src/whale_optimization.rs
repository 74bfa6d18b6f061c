use crate::{Result, SearchSpace, WhaleOptimizer, WoaConfig, WoaReport};
use ndarray::Array1;

/// Convenience function running a whole optimization in one call:
/// - `func`: objective function mapping x -> f(x)
/// - `space`: bounds and dimension of the search
/// - `config`: WOA configuration (direction, sizes, seed, ...)
pub fn whale_optimization<F>(func: &F, space: SearchSpace, config: WoaConfig) -> Result<WoaReport>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    let mut woa = WhaleOptimizer::new(func, space, config)?;
    Ok(woa.solve())
}
