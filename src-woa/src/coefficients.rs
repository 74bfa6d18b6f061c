use std::f64::consts::PI;

/// Iteration dependent coefficients of the position update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Decreases linearly from 2 to 0, scales the encircling step
    pub a: f64,
    /// Decreases linearly from -1 to -2, lower end of the spiral parameter `l`
    pub a2: f64,
    /// Spiral shape, grows with the iteration count
    pub b: f64,
}

/// Coefficients for iteration `iter` of `max_iter` (0-based)
pub fn coefficients(iter: usize, max_iter: usize) -> Coefficients {
    let t = iter as f64;
    let m = max_iter as f64;
    Coefficients { a: 2.0 - t * (2.0 / m), a2: -1.0 + t * (-1.0 / m), b: spiral_shape(t, m) }
}

/// `b = 1 + t/100 + (t mod 2.25) * t / max_iter`
pub fn spiral_shape(t: f64, m: f64) -> f64 {
    1.0 + t / 100.0 + (t % 2.25 * t / m)
}

/// Logarithmic spiral factor `exp(b l) cos(2 pi l)`
pub(crate) fn spiral_factor(b: f64, l: f64) -> f64 {
    (b * l).exp() * (2.0 * PI * l).cos()
}
