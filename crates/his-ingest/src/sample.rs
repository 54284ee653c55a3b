//! Synthetic demonstration dataset.
//!
//! Used when the data source is missing, so the report still renders with
//! recognizable shapes: a handful of named professionals plus generated
//! filler rows up to the requested size.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use his_model::{ReportError, Result, columns};

/// Default size of the fallback dataset.
pub const DEFAULT_SAMPLE_ROWS: usize = 110;

const BASE_ESTABLISHMENTS: [&str; 10] = [
    "IPRESS A", "IPRESS B", "IPRESS A", "IPRESS C", "IPRESS B", "IPRESS A", "IPRESS B", "IPRESS C",
    "IPRESS A", "IPRESS B",
];
const BASE_PROFESSIONS: [&str; 10] = [
    "Cardiología",
    "Medicina General",
    "Cardiología",
    "Ginecología",
    "Pediatría",
    "Medicina Interna",
    "Oftalmología",
    "Cirugía",
    "Cardiología",
    "Medicina General",
];
const BASE_PROFESSIONALS: [&str; 10] = [
    "Dr. Perez",
    "Lic. García",
    "Dr. Perez",
    "Dra. Lopez",
    "Dr. Soto",
    "Dra. Rojas",
    "Lic. Vidal",
    "Dr. Castro",
    "Dr. Perez",
    "Lic. García",
];
const BASE_MONTHS: [f64; 10] = [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 11.0];
const BASE_ATTENTIONS: [f64; 10] = [150.0, 220.0, 180.0, 90.0, 300.0, 110.0, 250.0, 140.0, 160.0, 230.0];
const BASE_SERVED: [f64; 10] = [120.0, 180.0, 140.0, 70.0, 250.0, 90.0, 200.0, 100.0, 130.0, 190.0];

/// Build a bare-convention demo frame with `rows` rows, both total columns
/// and all 31 day columns.
pub fn sample_frame(rows: usize) -> Result<DataFrame> {
    let mut year = Vec::with_capacity(rows);
    let mut month = Vec::with_capacity(rows);
    let mut establishment = Vec::with_capacity(rows);
    let mut profession = Vec::with_capacity(rows);
    let mut professional = Vec::with_capacity(rows);
    let mut attentions = Vec::with_capacity(rows);
    let mut served = Vec::with_capacity(rows);
    let mut days: Vec<Vec<f64>> = (0..31).map(|_| Vec::with_capacity(rows)).collect();

    for idx in 0..rows {
        year.push(2024.0);
        if idx < BASE_PROFESSIONALS.len() {
            month.push(BASE_MONTHS[idx]);
            establishment.push(BASE_ESTABLISHMENTS[idx].to_string());
            profession.push(BASE_PROFESSIONS[idx].to_string());
            professional.push(BASE_PROFESSIONALS[idx].to_string());
            attentions.push(BASE_ATTENTIONS[idx]);
            served.push(BASE_SERVED[idx]);
            for day in 1..=31i64 {
                let value = (10 + (idx as i64) * 2 - (day - 15).abs()).max(1);
                days[(day - 1) as usize].push(value as f64);
            }
        } else {
            month.push(11.0);
            establishment.push(format!("IPRESS {}", (b'A' + (idx % 3) as u8) as char));
            profession.push(format!("Especialidad {}", idx % 5));
            professional.push(format!("Dr(a). Ficticio {idx}"));
            attentions.push((100 + idx * 5) as f64);
            served.push((90 + idx * 4) as f64);
            for day in 1..=31usize {
                let value = 5 + (idx % 10) + (day % 5);
                days[day - 1].push(value as f64);
            }
        }
    }

    let mut frame_columns: Vec<Column> = vec![
        Series::new(columns::YEAR.into(), year).into(),
        Series::new(columns::MONTH.into(), month).into(),
        Series::new(columns::ESTABLISHMENT.into(), establishment).into(),
        Series::new(columns::PROFESSION.into(), profession).into(),
        Series::new(columns::PROFESSIONAL.into(), professional).into(),
        Series::new("Total Atenciones".into(), attentions).into(),
        Series::new(columns::SERVED_TOTAL.into(), served).into(),
    ];
    for (day_index, values) in days.into_iter().enumerate() {
        let name = (day_index + 1).to_string();
        frame_columns.push(Series::new(name.as_str().into(), values).into());
    }
    DataFrame::new(frame_columns)
        .map_err(|error| ReportError::Message(format!("build sample frame: {error}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use his_model::DatasetSchema;

    #[test]
    fn sample_has_requested_size_and_full_schema() {
        let df = sample_frame(25).unwrap();
        assert_eq!(df.height(), 25);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let schema = DatasetSchema::detect(&names);
        assert_eq!(schema.day_columns.len(), 31);
        assert!(schema.attention_total.is_some());
        assert!(schema.served_total.is_some());
    }
}
