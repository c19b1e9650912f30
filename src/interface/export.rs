use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::SolverResult;

#[derive(Debug, Serialize)]
struct ResultRow {
    rank: usize,
    distance: f64,
    pills: u32,
    combination: String,
}

/// Write ranked results to a CSV file, one row per result.
pub fn write_results_csv<P: AsRef<Path>>(path: P, results: &[SolverResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for (i, result) in results.iter().enumerate() {
        writer.serialize(ResultRow {
            rank: i + 1,
            distance: result.distance,
            pills: result.number_of_supplements,
            combination: result
                .chosen()
                .map(|(count, s)| format!("{}x{}", count, s.name))
                .collect::<Vec<_>>()
                .join(";"),
        })?;
    }

    writer.flush()?;
    Ok(())
}
