//! Optimization test functions library
//!
//! Benchmark objectives for the whale optimizer, all defined for any number of
//! dimensions and all shaped `fn(&Array1<f64>) -> f64`. Functions are organized
//! by category:
//!
//! - **Unimodal**: Single global optimum functions (sphere, rosenbrock, ...)
//! - **Multimodal**: Multiple local minima functions (ackley, rastrigin, ...)
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use woa_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let bounds = get_function_bounds("rastrigin");
//! assert_eq!(bounds, Some((-5.12, 5.12)));
//! ```

use ndarray::Array1;
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Objective signature shared by every test function
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata for a test function: bounds, optimum and a short description
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// The function itself
    pub function: TestFunction,
    /// Bounds shared by every dimension (min, max)
    pub bounds: (f64, f64),
    /// Coordinate repeated in every dimension at the global minimum
    pub optimum_coordinate: f64,
    /// Value of the global minimum
    pub optimum_value: f64,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
}

impl FunctionMetadata {
    fn new(
        name: &str,
        function: TestFunction,
        bounds: (f64, f64),
        optimum: (f64, f64),
        multimodal: bool,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            function,
            bounds,
            optimum_coordinate: optimum.0,
            optimum_value: optimum.1,
            description: description.to_string(),
            multimodal,
        }
    }

    /// Location of the global minimum in `dimension` dimensions
    pub fn optimum(&self, dimension: usize) -> Array1<f64> {
        Array1::from_elem(dimension, self.optimum_coordinate)
    }
}

/// Get metadata for all available test functions, keyed by name
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let all = [
        FunctionMetadata::new(
            "sphere",
            sphere,
            (-5.12, 5.12),
            (0.0, 0.0),
            false,
            "N-dimensional convex bowl",
        ),
        FunctionMetadata::new(
            "sum_squares",
            sum_squares,
            (-10.0, 10.0),
            (0.0, 0.0),
            false,
            "N-dimensional axis parallel hyper-ellipsoid",
        ),
        FunctionMetadata::new(
            "rosenbrock",
            rosenbrock,
            (-5.0, 10.0),
            (1.0, 0.0),
            false,
            "N-dimensional curved valley, hard to follow to the optimum",
        ),
        FunctionMetadata::new(
            "step",
            step,
            (-100.0, 100.0),
            (0.0, 0.0),
            true,
            "N-dimensional discontinuous function made of flat plateaus",
        ),
        FunctionMetadata::new(
            "rastrigin",
            rastrigin,
            (-5.12, 5.12),
            (0.0, 0.0),
            true,
            "N-dimensional highly multimodal function",
        ),
        FunctionMetadata::new(
            "ackley",
            ackley,
            (-32.768, 32.768),
            (0.0, 0.0),
            true,
            "N-dimensional multimodal function with a nearly flat outer region",
        ),
        FunctionMetadata::new(
            "griewank",
            griewank,
            (-600.0, 600.0),
            (0.0, 0.0),
            true,
            "N-dimensional multimodal function with product coupling",
        ),
        FunctionMetadata::new(
            "schwefel",
            schwefel,
            (-500.0, 500.0),
            (420.9687, 0.0),
            true,
            "N-dimensional deceptive multimodal function",
        ),
        FunctionMetadata::new(
            "alpine_n1",
            alpine_n1,
            (-10.0, 10.0),
            (0.0, 0.0),
            true,
            "N-dimensional non-differentiable multimodal function",
        ),
    ];
    all.into_iter().map(|meta| (meta.name.clone(), meta)).collect()
}

/// Look a test function up by name
pub fn get_function(function_name: &str) -> Option<TestFunction> {
    get_function_metadata().get(function_name).map(|meta| meta.function)
}

/// Bounds of a test function, None if the name is unknown
pub fn get_function_bounds(function_name: &str) -> Option<(f64, f64)> {
    get_function_metadata().get(function_name).map(|meta| meta.bounds)
}

/// Sorted names of every registered function
pub fn function_names() -> Vec<String> {
    let mut names: Vec<String> = get_function_metadata().into_keys().collect();
    names.sort();
    names
}
