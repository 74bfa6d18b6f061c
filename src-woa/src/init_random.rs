use ndarray::Array2;
use rand::Rng;

use crate::search_space::SearchSpace;

/// Draw `npop` agents uniformly inside the search space, row by row
pub(crate) fn init_random<R: Rng + ?Sized>(
    npop: usize,
    space: &SearchSpace,
    rng: &mut R,
) -> Array2<f64> {
    let n = space.dimension();
    let mut pop = Array2::<f64>::zeros((npop, n));
    for i in 0..npop {
        for j in 0..n {
            pop[[i, j]] = space.lower() + rng.random::<f64>() * space.width();
        }
    }
    pop
}
