//! Heating degree days, averaged per calendar month.
//!
//! Input is the statistics-office export with a `TIME_PERIOD` column in
//! `YYYY-MM` form and the observation in `OBS_VALUE`, with a units row under
//! the header. Averages pair each month's sum with its own observation
//! count; a calendar month with no observations at all is an error rather
//! than a silently misaligned average.

use std::io::Read;

use crate::error::{PostError, PostResult};

const PERIOD_COLUMN: &str = "TIME_PERIOD";
const VALUE_COLUMN: &str = "OBS_VALUE";

/// Average degree days per calendar month, January first.
pub fn read_monthly_degree_days(reader: impl Read) -> PostResult<[f64; 12]> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let period_idx = headers
        .iter()
        .position(|h| h == PERIOD_COLUMN)
        .ok_or_else(|| PostError::MissingColumn {
            name: PERIOD_COLUMN.into(),
        })?;
    let value_idx = headers
        .iter()
        .position(|h| h == VALUE_COLUMN)
        .ok_or_else(|| PostError::MissingColumn {
            name: VALUE_COLUMN.into(),
        })?;

    let mut sums = [0.0f64; 12];
    let mut counts = [0usize; 12];

    // Record 0 is the units row under the header.
    for (i, record) in rdr.records().enumerate().skip(1) {
        let record = record?;
        let row = i + 1;

        let period = record.get(period_idx).unwrap_or("").trim();
        let month: usize = period
            .rsplit('-')
            .next()
            .and_then(|m| m.parse().ok())
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| PostError::BadField {
                row,
                column: PERIOD_COLUMN.into(),
                value: period.into(),
            })?;

        let raw = record.get(value_idx).unwrap_or("");
        let value: f64 = raw.trim().parse().map_err(|_| PostError::BadField {
            row,
            column: VALUE_COLUMN.into(),
            value: raw.into(),
        })?;

        sums[month - 1] += value;
        counts[month - 1] += 1;
    }

    let mut averages = [0.0f64; 12];
    for month in 0..12 {
        if counts[month] == 0 {
            return Err(PostError::EmptyMonth { month: month + 1 });
        }
        averages[month] = sums[month] / counts[month] as f64;
    }
    Ok(averages)
}
