#![forbid(unsafe_code)]

//! Core domain model and recipe engine for the pizza dough calculator.
//!
//! This crate provides:
//! - Domain types (yeast samples, temperatures, recipes)
//! - Yeast model index built from empirical fermentation data
//! - Yeast lookup with nearest-neighbor selection and linear interpolation
//! - Baker's-percentage recipe computation
//! - Input validation, dataset loading and configuration

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod dataset;
pub mod index;
pub mod yeast;
pub mod input;
pub mod recipe;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use dataset::load_yeast_records;
pub use index::{IndexCache, TemperatureSeries, YeastModelIndex};
pub use yeast::resolve_yeast;
pub use input::{hours_until, DoughInput, ValidatedDoughInput, MAX_HOURS, MIN_HOURS};
pub use recipe::compute_recipe;
