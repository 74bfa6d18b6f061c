use ndarray::Array2;
use rand::Rng;

use crate::coefficients::{Coefficients, spiral_factor};
use crate::leader::Leader;

/// Move every agent except the leader's slot with the whale update rules.
///
/// Per agent the draws are `r1, r2, p, l` in that order; they are shared by all
/// coordinates of the agent. With `p < 0.5` the agent either encircles the
/// leader (`|A| < 1`) or moves relative to a random agent `k`, one `k` drawn
/// per coordinate. Otherwise it follows the bubble-net spiral around the leader.
///
/// Agents are updated in place and in order, so the random agent branch can
/// read rows already moved during this pass. Nothing is clamped to the bounds
/// here. Moves that overflow saturate at `±f64::MAX` instead of becoming
/// infinite, so later reads of the row never produce NaN.
pub(crate) fn update_positions<R: Rng + ?Sized>(
    pop: &mut Array2<f64>,
    leader: &Leader,
    coeffs: Coefficients,
    rng: &mut R,
) {
    let npop = pop.nrows();
    let n = pop.ncols();
    let best = leader.position();

    for i in 0..npop {
        if leader.index() == Some(i) {
            continue;
        }
        let r1 = rng.random::<f64>();
        let r2 = rng.random::<f64>();
        let p = rng.random::<f64>();
        let l = (coeffs.a2 - 1.0) * rng.random::<f64>() + 1.0;

        let big_a = 2.0 * coeffs.a * r1 - coeffs.a;
        let c = 2.0 * r2;

        if p < 0.5 {
            if big_a.abs() < 1.0 {
                // encircling prey
                for j in 0..n {
                    let d = (c * best[j] - pop[[i, j]]).abs();
                    pop[[i, j]] = best[j] - big_a * d;
                }
            } else {
                // search for prey
                for j in 0..n {
                    let k = rng.random_range(0..npop);
                    let x_rand = pop[[k, j]];
                    let d = (c * x_rand - pop[[i, j]]).abs();
                    pop[[i, j]] = saturate(x_rand - big_a * d);
                }
            }
        } else {
            // bubble-net spiral
            let spiral = spiral_factor(coeffs.b, l);
            for j in 0..n {
                let d = (best[j] - pop[[i, j]]).abs();
                // exp(b l) overflows on long runs, 0 * inf stays on the leader
                pop[[i, j]] = if d == 0.0 {
                    best[j]
                } else {
                    saturate(d * spiral + best[j])
                };
            }
        }
    }
}

fn saturate(v: f64) -> f64 {
    v.clamp(f64::MIN, f64::MAX)
}
