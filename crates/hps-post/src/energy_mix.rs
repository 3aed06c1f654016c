//! Monthly electricity generation mix.
//!
//! Input is the public monthly generation table: a `Monat` column plus one
//! column per production type, with a units row directly under the header.
//! Shares are fractions of the month's total generation across all
//! production columns, so categories absent from the grouping below still
//! count toward the denominator.

use std::io::Read;

use serde::Serialize;

use crate::error::{PostError, PostResult};

const MONTH_COLUMN: &str = "Monat";
const COAL_COLUMNS: [&str; 2] = ["Braunkohle", "Steinkohle"];
const NATURAL_GAS_COLUMN: &str = "Erdgas";
const NUCLEAR_COLUMN: &str = "Kernenergie";
const RENEWABLE_COLUMNS: [&str; 7] = [
    "Laufwasser",
    "Biomasse",
    "Geothermie",
    "Speicherwasser",
    "Wind Offshore",
    "Wind Onshore",
    "Solar",
];

/// Generation shares of one month, each in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyMix {
    pub month: String,
    pub coal: f64,
    pub natural_gas: f64,
    pub nuclear: f64,
    pub renewable: f64,
}

fn column_index(headers: &csv::StringRecord, name: &str) -> PostResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PostError::MissingColumn { name: name.into() })
}

fn parse_field(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> PostResult<f64> {
    let raw = record.get(idx).unwrap_or("");
    raw.trim().parse().map_err(|_| PostError::BadField {
        row,
        column: column.into(),
        value: raw.into(),
    })
}

/// Read the monthly generation table into per-month shares.
pub fn read_energy_mix(reader: impl Read) -> PostResult<Vec<EnergyMix>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let month_idx = column_index(&headers, MONTH_COLUMN)?;
    for name in COAL_COLUMNS
        .iter()
        .chain(RENEWABLE_COLUMNS.iter())
        .chain([&NATURAL_GAS_COLUMN, &NUCLEAR_COLUMN])
    {
        column_index(&headers, name)?;
    }

    let mut mixes = Vec::new();
    // Record 0 is the units row under the header.
    for (i, record) in rdr.records().enumerate().skip(1) {
        let record = record?;
        let row = i + 1;

        let mut total = 0.0;
        let mut group = |names: &[&str]| -> PostResult<f64> {
            let mut sum = 0.0;
            for name in names {
                sum += parse_field(&record, column_index(&headers, name)?, name, row)?;
            }
            Ok(sum)
        };
        let coal = group(&COAL_COLUMNS)?;
        let natural_gas = group(&[NATURAL_GAS_COLUMN])?;
        let nuclear = group(&[NUCLEAR_COLUMN])?;
        let renewable = group(&RENEWABLE_COLUMNS)?;

        for (idx, column) in headers.iter().enumerate() {
            if idx != month_idx {
                total += parse_field(&record, idx, column, row)?;
            }
        }
        if !(total > 0.0) {
            return Err(PostError::NonPositiveTotal { row });
        }

        mixes.push(EnergyMix {
            month: record.get(month_idx).unwrap_or("").trim().to_string(),
            coal: coal / total,
            natural_gas: natural_gas / total,
            nuclear: nuclear / total,
            renewable: renewable / total,
        });
    }
    Ok(mixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const HEADER: &str = "Monat,Braunkohle,Steinkohle,Erdgas,Kernenergie,Laufwasser,Biomasse,Geothermie,Speicherwasser,Wind Offshore,Wind Onshore,Solar";
    const UNITS: &str = "-,GWh,GWh,GWh,GWh,GWh,GWh,GWh,GWh,GWh,GWh,GWh";

    #[test]
    fn shares_partition_the_total() {
        let csv = format!(
            "{HEADER}\n{UNITS}\n2023-01,100,100,200,100,50,50,0,0,100,300,0\n"
        );
        let mixes = read_energy_mix(csv.as_bytes()).unwrap();
        assert_eq!(mixes.len(), 1);

        let mix = &mixes[0];
        assert_eq!(mix.month, "2023-01");
        assert_relative_eq!(mix.coal, 0.2);
        assert_relative_eq!(mix.natural_gas, 0.2);
        assert_relative_eq!(mix.nuclear, 0.1);
        assert_relative_eq!(mix.renewable, 0.5);
        assert_relative_eq!(
            mix.coal + mix.natural_gas + mix.nuclear + mix.renewable,
            1.0
        );
    }

    #[test]
    fn extra_production_columns_enter_the_denominator() {
        let header = format!("{HEADER},Sonstige");
        let units = format!("{UNITS},GWh");
        let csv =
            format!("{header}\n{units}\n2023-02,100,0,0,0,0,0,0,0,0,0,0,100\n");
        let mixes = read_energy_mix(csv.as_bytes()).unwrap();
        assert_relative_eq!(mixes[0].coal, 0.5);
    }

    #[test]
    fn units_row_is_skipped() {
        let csv = format!("{HEADER}\n{UNITS}\n");
        assert!(read_energy_mix(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Monat,Braunkohle\n-,GWh\n2023-01,1\n";
        let err = read_energy_mix(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PostError::MissingColumn { .. }));
    }

    #[test]
    fn unparseable_field_names_row_and_column() {
        let csv = format!("{HEADER}\n{UNITS}\n2023-01,abc,0,0,0,0,0,0,0,0,0,0\n");
        let err = read_energy_mix(csv.as_bytes()).unwrap_err();
        match err {
            PostError::BadField { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Braunkohle");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_total_is_rejected() {
        let csv = format!("{HEADER}\n{UNITS}\n2023-01,0,0,0,0,0,0,0,0,0,0,0\n");
        let err = read_energy_mix(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PostError::NonPositiveTotal { row: 2 }));
    }
}
