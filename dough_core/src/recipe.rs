//! Recipe computation using baker's percentages.
//!
//! Flour is the 100% baseline; water and salt are percentages of flour and
//! together with it make up the requested dough weight. Yeast is computed on
//! top of that weight.

use crate::{resolve_yeast, DoughRecipe, Result, ValidatedDoughInput, YeastModelIndex};

/// Compute a complete dough recipe for `input` from the yeast model `index`
///
/// The index must be built for the same temperature unit as the input.
pub fn compute_recipe(index: &YeastModelIndex, input: &ValidatedDoughInput) -> Result<DoughRecipe> {
    if index.unit() != input.temperature.unit {
        tracing::warn!(
            "Input temperature is in {} but yeast model is indexed in {}",
            input.temperature.unit,
            index.unit()
        );
    }

    let total_weight = f64::from(input.count) * input.weight;
    let flour = total_weight / (1.0 + input.hydration / 100.0 + input.salt_percentage / 100.0);
    let water = flour * (input.hydration / 100.0);
    let salt = flour * (input.salt_percentage / 100.0);

    let series = index.select_series(input.temperature.value)?;
    let yeast_percentages = resolve_yeast(&series.samples, input.hours as f64)?;

    tracing::info!(
        "Recipe for {} x {}g at {} for {}h: {:.0}g flour",
        input.count,
        input.weight,
        input.temperature,
        input.hours,
        flour
    );

    Ok(DoughRecipe {
        flour,
        water,
        salt,
        yeast: yeast_percentages.map(|pct| flour * (pct / 100.0)),
    })
}
