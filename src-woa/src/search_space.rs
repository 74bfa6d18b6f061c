use ndarray::{ArrayView1, ArrayViewMut1};
use serde::Serialize;

use crate::error::{Result, WoaError};

/// Box shaped search domain: every coordinate lives in `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchSpace {
    lower: f64,
    upper: f64,
    dimension: usize,
}

impl SearchSpace {
    /// Create a search space of `dimension` coordinates sharing the same bounds
    pub fn new(lower: f64, upper: f64, dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(WoaError::EmptyDimension);
        }
        if !lower.is_finite() || !upper.is_finite() {
            return Err(WoaError::NonFiniteBounds { lower, upper });
        }
        if lower > upper {
            return Err(WoaError::InvertedBounds { lower, upper });
        }
        Ok(Self { lower, upper, dimension })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Pull every coordinate of `agent` back inside the bounds, in place.
    ///
    /// NaN coordinates compare false on both sides and are left untouched.
    pub fn clamp(&self, mut agent: ArrayViewMut1<f64>) {
        for v in agent.iter_mut() {
            if *v < self.lower {
                *v = self.lower;
            }
            if *v > self.upper {
                *v = self.upper;
            }
        }
    }

    /// True when every coordinate lies in `[lower, upper]`
    pub fn contains(&self, x: &ArrayView1<f64>) -> bool {
        x.len() == self.dimension && x.iter().all(|&v| v >= self.lower && v <= self.upper)
    }
}
