//! Recording wrapper around `whale_optimization`

use ndarray::Array1;

use crate::recorder::OptimizationRecorder;
use crate::{Result, SearchSpace, WoaConfig, WoaIntermediate, WoaReport, whale_optimization};

/// Run WOA while recording the leader of every iteration to a CSV file
///
/// An existing `config.callback` keeps being called after the recorder.
/// Returns the report and the path of the CSV file.
pub fn run_recorded_whale_optimization<F>(
    function_name: &str,
    func: F,
    space: SearchSpace,
    mut config: WoaConfig,
    output_dir: &str,
) -> Result<(WoaReport, String)>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    let recorder = OptimizationRecorder::new(function_name.to_string());

    let mut record = recorder.create_callback();
    let mut user_callback = config.callback.take();
    config.callback = Some(Box::new(move |intermediate: &WoaIntermediate| {
        record(intermediate);
        if let Some(ref mut cb) = user_callback {
            cb(intermediate);
        }
    }));

    let report = whale_optimization(&func, space, config)?;
    let csv_path = recorder.save_to_csv(output_dir)?;
    log::info!("{} iterations of {} saved to {}", recorder.num_iterations(), function_name, csv_path);

    Ok((report, csv_path))
}
