//! Per-iteration recording of a WOA run, exported as CSV

use std::fs::create_dir_all;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Result, WoaIntermediate};

/// Records optimization progress via the WOA callback
#[derive(Debug)]
pub struct OptimizationRecorder {
    /// Function name (used for CSV filename)
    function_name: String,
    /// Shared records storage
    records: Arc<Mutex<Vec<OptimizationRecord>>>,
}

/// A single optimization iteration record
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationRecord {
    /// Iteration number
    pub iteration: usize,
    /// Leader coordinates at this iteration
    pub x: Vec<f64>,
    /// Leader score at this iteration
    pub best_result: f64,
    /// Whether the leader changed since the previous record
    pub is_improvement: bool,
}

impl OptimizationRecorder {
    /// Create a new optimization recorder for the given function
    pub fn new(function_name: String) -> Self {
        Self { function_name, records: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Create a callback that appends one record per iteration
    pub fn create_callback(&self) -> Box<dyn FnMut(&WoaIntermediate) + Send> {
        let records = self.records.clone();

        Box::new(move |intermediate: &WoaIntermediate| {
            let mut records_guard = records.lock();
            // the leader only changes on a strict improvement, so any change is one
            let is_improvement = match records_guard.last() {
                Some(last) => last.best_result != intermediate.fun,
                None => true,
            };
            records_guard.push(OptimizationRecord {
                iteration: intermediate.iter,
                x: intermediate.x.to_vec(),
                best_result: intermediate.fun,
                is_improvement,
            });
        })
    }

    /// Save all recorded iterations to `<output_dir>/<function_name>.csv`
    pub fn save_to_csv(&self, output_dir: &str) -> Result<String> {
        create_dir_all(output_dir)?;
        let filename = Path::new(output_dir)
            .join(format!("{}.csv", self.function_name))
            .to_string_lossy()
            .into_owned();

        let mut writer = csv::Writer::from_path(&filename)?;
        let records_guard = self.records.lock();

        if let Some(first) = records_guard.first() {
            let mut header = vec!["iteration".to_string()];
            header.extend((0..first.x.len()).map(|i| format!("x{}", i)));
            header.push("best_result".to_string());
            header.push("is_improvement".to_string());
            writer.write_record(&header)?;

            for record in records_guard.iter() {
                let mut row = vec![record.iteration.to_string()];
                row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
                row.push(format!("{:.16}", record.best_result));
                row.push(record.is_improvement.to_string());
                writer.write_record(&row)?;
            }
        }
        writer.flush()?;

        Ok(filename)
    }

    /// Get a copy of all recorded iterations
    pub fn get_records(&self) -> Vec<OptimizationRecord> {
        self.records.lock().clone()
    }

    /// Get the number of iterations recorded
    pub fn num_iterations(&self) -> usize {
        self.records.lock().len()
    }

    /// Clear all recorded iterations
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Get the final best solution if any iterations were recorded
    pub fn get_best_solution(&self) -> Option<(Vec<f64>, f64)> {
        self.records.lock().last().map(|r| (r.x.clone(), r.best_result))
    }
}
