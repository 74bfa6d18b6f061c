use ndarray::{Array1, ArrayView1};

use crate::Direction;

/// Best agent seen so far, stored as an owned copy of its coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    position: Array1<f64>,
    score: f64,
    /// Population slot the leader was copied from, None until a score beats the sentinel
    index: Option<usize>,
}

impl Leader {
    /// Empty leader: zero coordinates and the worst possible score for `direction`
    pub fn new(dimension: usize, direction: Direction) -> Self {
        Self { position: Array1::zeros(dimension), score: direction.worst_score(), index: None }
    }

    pub fn position(&self) -> &Array1<f64> {
        &self.position
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Replace the leader when `score` is strictly better. Ties keep the incumbent.
    pub fn offer(
        &mut self,
        index: usize,
        agent: ArrayView1<f64>,
        score: f64,
        direction: Direction,
    ) -> bool {
        if !direction.improves(score, self.score) {
            return false;
        }
        self.score = score;
        self.position.assign(&agent);
        self.index = Some(index);
        true
    }
}
