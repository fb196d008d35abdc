//! Yeast model index over the empirical fermentation dataset.
//!
//! Raw records are resolved to one temperature unit and grouped into
//! per-temperature series, each ordered by fermentation time. Series are kept
//! in first-seen order so nearest-temperature ties always resolve the same way.

use crate::{Error, Result, TemperatureUnit, YeastRecord, YeastSample};
use once_cell::sync::OnceCell;

/// All samples recorded at one temperature, sorted ascending by hours
#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureSeries {
    pub temperature: f64,
    pub samples: Vec<YeastSample>,
}

impl TemperatureSeries {
    /// Shortest and longest fermentation time in the series
    pub fn hours_range(&self) -> Option<(f64, f64)> {
        Some((self.samples.first()?.hours, self.samples.last()?.hours))
    }
}

/// Mapping from temperature to its fermentation series for one unit
#[derive(Clone, Debug, PartialEq)]
pub struct YeastModelIndex {
    unit: TemperatureUnit,
    series: Vec<TemperatureSeries>,
}

impl YeastModelIndex {
    /// Build a fresh index from raw dataset records for the given unit
    ///
    /// Records marked as excluded (`hours == -1`) are dropped; the rest are
    /// resolved to `unit` and grouped by temperature.
    pub fn build(records: &[YeastRecord], unit: TemperatureUnit) -> Self {
        let samples = records
            .iter()
            .filter(|r| !r.is_excluded())
            .map(|r| YeastSample::new(r.temperature(unit), r.hours, r.yeast));

        let index = Self::from_samples(unit, samples);

        if index.is_empty() {
            tracing::warn!(
                "Yeast model index for {} is empty ({} raw records)",
                unit,
                records.len()
            );
        } else {
            tracing::debug!(
                "Built {} yeast model index: {} temperatures from {} raw records",
                unit,
                index.len(),
                records.len()
            );
        }

        index
    }

    /// Build an index from samples already expressed in `unit`
    ///
    /// Samples are grouped by temperature in first-seen order, then each group
    /// is sorted by hours. The sort is stable, so samples with equal hours keep
    /// their insertion order.
    pub fn from_samples(
        unit: TemperatureUnit,
        samples: impl IntoIterator<Item = YeastSample>,
    ) -> Self {
        let mut series: Vec<TemperatureSeries> = Vec::new();

        for sample in samples {
            match series
                .iter_mut()
                .find(|s| s.temperature == sample.temperature)
            {
                Some(existing) => existing.samples.push(sample),
                None => series.push(TemperatureSeries {
                    temperature: sample.temperature,
                    samples: vec![sample],
                }),
            }
        }

        for s in &mut series {
            s.samples.sort_by(|a, b| a.hours.total_cmp(&b.hours));
        }

        Self { unit, series }
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Number of distinct temperatures
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// All series in first-seen temperature order
    pub fn series(&self) -> &[TemperatureSeries] {
        &self.series
    }

    /// Select the series whose temperature is closest to `target`
    ///
    /// Ties go to the temperature seen first. Fails on an empty index.
    pub fn select_series(&self, target: f64) -> Result<&TemperatureSeries> {
        let mut candidates = self.series.iter();
        let first = candidates.next().ok_or_else(|| {
            Error::EmptyDataset(format!("no {} temperatures in yeast model", self.unit))
        })?;

        let selected = candidates.fold(first, |best, s| {
            if (target - s.temperature).abs() < (target - best.temperature).abs() {
                s
            } else {
                best
            }
        });

        tracing::debug!(
            "Selected {} series for target {} ({} samples)",
            selected.temperature,
            target,
            selected.samples.len()
        );

        Ok(selected)
    }
}

/// Lazily built indexes for both units over one dataset
///
/// Each unit's index is built on first use and reused afterwards; the two
/// indexes never share state.
#[derive(Debug)]
pub struct IndexCache {
    records: Vec<YeastRecord>,
    celsius: OnceCell<YeastModelIndex>,
    fahrenheit: OnceCell<YeastModelIndex>,
}

impl IndexCache {
    pub fn new(records: Vec<YeastRecord>) -> Self {
        Self {
            records,
            celsius: OnceCell::new(),
            fahrenheit: OnceCell::new(),
        }
    }

    pub fn records(&self) -> &[YeastRecord] {
        &self.records
    }

    /// Index for `unit`, building it on first access
    pub fn get(&self, unit: TemperatureUnit) -> &YeastModelIndex {
        let cell = match unit {
            TemperatureUnit::Celsius => &self.celsius,
            TemperatureUnit::Fahrenheit => &self.fahrenheit,
        };
        cell.get_or_init(|| YeastModelIndex::build(&self.records, unit))
    }
}
