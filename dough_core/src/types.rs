//! Core domain types for the pizza dough calculator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Yeast quantities for the three yeast forms
//! - Temperatures and their units
//! - Raw dataset records and unit-resolved samples
//! - The computed dough recipe

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Yeast Types
// ============================================================================

/// Quantities for instant dry, fresh (compressed) and active dry yeast.
///
/// Depending on context these are baker's percentages (dataset samples) or
/// grams (recipe output).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct YeastValues {
    pub idy: f64,
    pub cy: f64,
    pub ady: f64,
}

impl YeastValues {
    pub fn new(idy: f64, cy: f64, ady: f64) -> Self {
        Self { idy, cy, ady }
    }

    /// Apply `f` to each yeast form independently
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            idy: f(self.idy),
            cy: f(self.cy),
            ady: f(self.ady),
        }
    }

    /// Combine two triples form by form
    pub fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            idy: f(self.idy, other.idy),
            cy: f(self.cy, other.cy),
            ady: f(self.ady, other.ady),
        }
    }
}

// ============================================================================
// Temperature Types
// ============================================================================

/// Unit a temperature value is expressed in
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Accepted temperature range (inclusive) for dough input in this unit
    pub fn valid_range(self) -> (f64, f64) {
        match self {
            TemperatureUnit::Celsius => (1.0, 35.0),
            TemperatureUnit::Fahrenheit => (35.0, 95.0),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "celsius"),
            TemperatureUnit::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(Error::InvalidInput(format!(
                "unknown temperature unit '{}'",
                other
            ))),
        }
    }
}

/// A temperature reading tagged with its unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Temperature {
    pub unit: TemperatureUnit,
    pub value: f64,
}

impl Temperature {
    pub fn new(unit: TemperatureUnit, value: f64) -> Self {
        Self { unit, value }
    }

    /// Convert to another unit, rounded to the nearest whole degree.
    ///
    /// Converting to the current unit returns the value unchanged.
    pub fn convert_to(self, unit: TemperatureUnit) -> Self {
        let value = match (self.unit, unit) {
            (from, to) if from == to => self.value,
            (_, TemperatureUnit::Celsius) => ((self.value - 32.0) / 1.8).round(),
            (_, TemperatureUnit::Fahrenheit) => (self.value * 1.8 + 32.0).round(),
        };
        Self { unit, value }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.symbol())
    }
}

// ============================================================================
// Dataset Types
// ============================================================================

/// Hours marker for dataset rows that take no part in recipes
pub const EXCLUDED_HOURS: f64 = -1.0;

/// One raw measurement from the fermentation dataset, carrying its
/// temperature in both units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct YeastRecord {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub hours: f64,
    pub yeast: YeastValues,
}

impl YeastRecord {
    /// Temperature value of this record in the given unit
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.fahrenheit,
        }
    }

    /// Whether the row is a control row excluded from recipes
    pub fn is_excluded(&self) -> bool {
        self.hours == EXCLUDED_HOURS
    }
}

/// A measurement resolved to a single temperature unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct YeastSample {
    pub temperature: f64,
    pub hours: f64,
    pub yeast: YeastValues,
}

impl YeastSample {
    pub fn new(temperature: f64, hours: f64, yeast: YeastValues) -> Self {
        Self {
            temperature,
            hours,
            yeast,
        }
    }
}

// ============================================================================
// Recipe Type
// ============================================================================

/// Ingredient weights in grams for a complete dough batch
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DoughRecipe {
    pub flour: f64,
    pub water: f64,
    pub salt: f64,
    pub yeast: YeastValues,
}
