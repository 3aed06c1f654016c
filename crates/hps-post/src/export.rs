//! CSV export of swept efficiency matrices.

use std::io::Write;

use hps_study::EfficiencyMatrix;

use crate::error::{PostError, PostResult};

/// Write the matrix as one row per condensation setpoint, with the COP
/// columns labelled by evaporation temperature.
pub fn write_efficiency_matrix(matrix: &EfficiencyMatrix, writer: impl Write) -> PostResult<()> {
    let rows = matrix.rows();
    let cols = matrix.cols();
    if matrix.cop.len() != rows * cols {
        return Err(PostError::ShapeMismatch {
            rows,
            cols,
            values: matrix.cop.len(),
        });
    }

    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let mut header = vec!["t_condensation_c".to_string()];
    header.extend(
        matrix
            .evaporation_temps_c
            .iter()
            .map(|t| format!("cop_at_{t}_c")),
    );
    wtr.write_record(&header)?;

    for (i, t_cond) in matrix.condensation_temps_c.iter().enumerate() {
        let mut record = vec![t_cond.to_string()];
        record.extend(
            matrix.cop[i * cols..(i + 1) * cols]
                .iter()
                .map(f64::to_string),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
