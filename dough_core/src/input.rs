//! Dough input and its validation.
//!
//! The recipe engine only accepts a [`ValidatedDoughInput`], which can only be
//! obtained by running [`DoughInput::validate`].

use crate::{Error, Result, Temperature, TemperatureUnit};
use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Shortest supported fermentation time in hours
pub const MIN_HOURS: i64 = 2;
/// Longest supported fermentation time in hours
pub const MAX_HOURS: i64 = 167;

/// Baking parameters as entered by the user
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DoughInput {
    /// Number of dough balls
    pub count: u32,
    /// Weight of one dough ball in grams
    pub weight: f64,
    /// Water as a percentage of flour
    pub hydration: f64,
    /// Salt as a percentage of flour
    pub salt_percentage: f64,
    /// Fermentation temperature
    pub temperature: Temperature,
    /// Fermentation time in hours
    pub hours: i64,
}

impl Default for DoughInput {
    fn default() -> Self {
        Self {
            count: 4,
            weight: 270.0,
            hydration: 65.0,
            salt_percentage: 3.2,
            temperature: Temperature::new(TemperatureUnit::Celsius, 18.0),
            hours: 24,
        }
    }
}

impl DoughInput {
    /// Switch the temperature to `unit`, converting its value
    pub fn with_unit(self, unit: TemperatureUnit) -> Self {
        Self {
            temperature: self.temperature.convert_to(unit),
            ..self
        }
    }

    /// Check every field and return the input in its validated form
    ///
    /// All offending fields are reported together.
    pub fn validate(self) -> Result<ValidatedDoughInput> {
        let mut problems = Vec::new();

        if self.count == 0 {
            problems.push("count must be greater than 0".to_string());
        }
        if !(self.weight > 0.0) {
            problems.push(format!("weight must be greater than 0 (got {})", self.weight));
        }
        if !in_range((1.0, 100.0), self.hydration) {
            problems.push(format!(
                "hydration must be between 1 and 100% (got {})",
                self.hydration
            ));
        }
        if !in_range((1.0, 100.0), self.salt_percentage) {
            problems.push(format!(
                "salt percentage must be between 1 and 100% (got {})",
                self.salt_percentage
            ));
        }

        let (min_temp, max_temp) = self.temperature.unit.valid_range();
        if !in_range((min_temp, max_temp), self.temperature.value) {
            problems.push(format!(
                "temperature must be between {} and {} {} (got {})",
                min_temp, max_temp, self.temperature.unit, self.temperature.value
            ));
        }

        if !(MIN_HOURS..=MAX_HOURS).contains(&self.hours) {
            problems.push(format!(
                "hours must be between {} and {} (got {})",
                MIN_HOURS, MAX_HOURS, self.hours
            ));
        }

        if problems.is_empty() {
            Ok(ValidatedDoughInput(self))
        } else {
            Err(Error::InvalidInput(problems.join("; ")))
        }
    }
}

fn in_range((min, max): (f64, f64), value: f64) -> bool {
    value >= min && value <= max
}

/// Dough input that passed validation
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ValidatedDoughInput(DoughInput);

impl ValidatedDoughInput {
    pub fn into_inner(self) -> DoughInput {
        self.0
    }
}

impl Deref for ValidatedDoughInput {
    type Target = DoughInput;

    fn deref(&self) -> &DoughInput {
        &self.0
    }
}

/// Whole hours from `now` until `ready_at`
///
/// Minutes are zeroed on both instants before the difference is taken, and the
/// result is rounded to the nearest hour. Past times give negative values.
pub fn hours_until<Tz: TimeZone>(ready_at: &DateTime<Tz>, now: &DateTime<Tz>) -> Result<i64> {
    let ready_at = ready_at
        .with_minute(0)
        .ok_or_else(|| Error::InvalidInput("ready-at time cannot be truncated".into()))?;
    let now = now
        .with_minute(0)
        .ok_or_else(|| Error::InvalidInput("current time cannot be truncated".into()))?;

    let seconds = ready_at.signed_duration_since(now).num_seconds();
    Ok((seconds as f64 / 3600.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_default_input_is_valid() {
        let validated = DoughInput::default().validate().unwrap();
        assert_eq!(validated.count, 4);
        assert_eq!(validated.hours, 24);
    }

    #[test]
    fn test_rejects_zero_count() {
        let input = DoughInput {
            count: 0,
            ..DoughInput::default()
        };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let input = DoughInput {
            weight: 0.0,
            ..DoughInput::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_percentage_bounds_inclusive() {
        let edge = DoughInput {
            hydration: 100.0,
            salt_percentage: 1.0,
            ..DoughInput::default()
        };
        assert!(edge.validate().is_ok());

        let over = DoughInput {
            hydration: 100.5,
            ..DoughInput::default()
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_hours_bounds() {
        for (hours, ok) in [(1, false), (2, true), (167, true), (168, false)] {
            let input = DoughInput {
                hours,
                ..DoughInput::default()
            };
            assert_eq!(input.validate().is_ok(), ok, "hours = {}", hours);
        }
    }

    #[test]
    fn test_temperature_range_depends_on_unit() {
        let celsius = DoughInput {
            temperature: Temperature::new(TemperatureUnit::Celsius, 40.0),
            ..DoughInput::default()
        };
        assert!(celsius.validate().is_err());

        let fahrenheit = DoughInput {
            temperature: Temperature::new(TemperatureUnit::Fahrenheit, 40.0),
            ..DoughInput::default()
        };
        assert!(fahrenheit.validate().is_ok());
    }

    #[test]
    fn test_reports_all_problems() {
        let input = DoughInput {
            count: 0,
            hours: 500,
            ..DoughInput::default()
        };
        let message = input.validate().unwrap_err().to_string();
        assert!(message.contains("count"));
        assert!(message.contains("hours"));
    }

    #[test]
    fn test_with_unit_converts_temperature() {
        let input = DoughInput::default().with_unit(TemperatureUnit::Fahrenheit);
        assert_eq!(input.temperature.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(input.temperature.value, 64.0);
    }

    #[test]
    fn test_hours_until_ignores_minutes() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 1, 18, 50, 0).unwrap();
        let ready = tz.with_ymd_and_hms(2024, 5, 2, 19, 5, 0).unwrap();

        assert_eq!(hours_until(&ready, &now).unwrap(), 25);
    }

    #[test]
    fn test_hours_until_past_is_negative() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let now = tz.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        let ready = tz.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();

        assert_eq!(hours_until(&ready, &now).unwrap(), -3);
    }
}
