//! Loading the yeast fermentation dataset from CSV.
//!
//! Expected header:
//! `temperature.celsius,temperature.fahrenheit,yeast.ady,yeast.idy,yeast.cy,hours`
//!
//! Rows with `hours = -1` are loaded as is; the index build excludes them.

use crate::{Error, Result, YeastRecord, YeastValues};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// CSV row format of the dataset
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "temperature.celsius")]
    celsius: f64,
    #[serde(rename = "temperature.fahrenheit")]
    fahrenheit: f64,
    #[serde(rename = "yeast.ady")]
    ady: f64,
    #[serde(rename = "yeast.idy")]
    idy: f64,
    #[serde(rename = "yeast.cy")]
    cy: f64,
    hours: f64,
}

impl From<CsvRow> for YeastRecord {
    fn from(row: CsvRow) -> Self {
        YeastRecord {
            celsius: row.celsius,
            fahrenheit: row.fahrenheit,
            hours: row.hours,
            yeast: YeastValues::new(row.idy, row.cy, row.ady),
        }
    }
}

/// Load all dataset records from a CSV file
pub fn load_yeast_records(path: &Path) -> Result<Vec<YeastRecord>> {
    if !path.exists() {
        return Err(Error::EmptyDataset(format!(
            "yeast dataset not found at {:?}",
            path
        )));
    }

    let file = std::fs::File::open(path)?;
    let records = read_yeast_records(file)?;

    tracing::info!("Loaded {} yeast records from {:?}", records.len(), path);
    Ok(records)
}

/// Read dataset records from any CSV source
pub fn read_yeast_records<R: Read>(source: R) -> Result<Vec<YeastRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        records.push(result?.into());
    }

    Ok(records)
}
