//! Yeast lookup within one fermentation series.
//!
//! The sample closest in time to the requested duration is the anchor. An
//! exact hit is returned as is; otherwise the anchor is linearly interpolated
//! (or extrapolated at the series edges) with an adjacent sample.

use crate::{Error, Result, YeastSample, YeastValues};

/// Estimate yeast percentages for `target_hours` from an hours-sorted series
///
/// ## Rules
///
/// 1. A single-sample series returns that sample regardless of `target_hours`.
/// 2. The anchor is the sample with the smallest `|target_hours - hours|`;
///    on ties the earliest sample wins.
/// 3. If the anchor matches `target_hours` exactly its values are returned.
/// 4. The neighbor is the next sample when the target lies after the anchor
///    and the previous one when it lies before. At either end of the series the
///    only existing adjacent sample is used instead.
/// 5. Each yeast form is interpolated independently along the anchor-neighbor line.
pub fn resolve_yeast(series: &[YeastSample], target_hours: f64) -> Result<YeastValues> {
    let (anchor_idx, anchor) = series
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, &YeastSample)>, (idx, sample)| match best {
            Some((_, b)) if (target_hours - sample.hours).abs() >= (target_hours - b.hours).abs() => {
                best
            }
            _ => Some((idx, sample)),
        })
        .ok_or_else(|| Error::EmptyDataset("fermentation series has no samples".into()))?;

    if series.len() == 1 || anchor.hours == target_hours {
        return Ok(anchor.yeast);
    }

    let neighbor_idx = if target_hours > anchor.hours {
        if anchor_idx + 1 < series.len() {
            anchor_idx + 1
        } else {
            anchor_idx - 1
        }
    } else if anchor_idx > 0 {
        anchor_idx - 1
    } else {
        anchor_idx + 1
    };
    let neighbor = &series[neighbor_idx];

    tracing::debug!(
        "Interpolating {}h between {}h and {}h",
        target_hours,
        anchor.hours,
        neighbor.hours
    );

    Ok(interpolate(anchor, neighbor, target_hours))
}

fn interpolate(anchor: &YeastSample, neighbor: &YeastSample, target_hours: f64) -> YeastValues {
    let offset = target_hours - anchor.hours;
    let span = neighbor.hours - anchor.hours;

    anchor
        .yeast
        .zip_with(neighbor.yeast, |a, n| a + offset * (n - a) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hours: f64, idy: f64, cy: f64, ady: f64) -> YeastSample {
        YeastSample::new(20.0, hours, YeastValues::new(idy, cy, ady))
    }

    fn reference_series() -> Vec<YeastSample> {
        vec![
            sample(15.0, 0.056, 0.175, 0.074),
            sample(17.0, 0.048, 0.15, 0.063),
            sample(19.0, 0.04, 0.125, 0.053),
            sample(22.0, 0.032, 0.1, 0.042),
        ]
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_single_sample_ignores_hours() {
        let series = vec![sample(22.0, 0.032, 0.1, 0.042)];

        for hours in [2.0, 22.0, 167.0] {
            let yeast = resolve_yeast(&series, hours).unwrap();
            assert_eq!(yeast, YeastValues::new(0.032, 0.1, 0.042));
        }
    }

    #[test]
    fn test_exact_match_returns_sample_values() {
        let series = reference_series();

        for s in &series {
            assert_eq!(resolve_yeast(&series, s.hours).unwrap(), s.yeast);
        }
    }

    #[test]
    fn test_midpoint_interpolation() {
        let yeast = resolve_yeast(&reference_series(), 18.0).unwrap();

        assert_close(yeast.cy, 0.1375);
        assert_close(yeast.idy, 0.044);
        assert_close(yeast.ady, 0.058);
    }

    #[test]
    fn test_target_below_anchor_uses_previous_sample() {
        let series = vec![
            sample(14.0, 0.064, 0.2, 0.084),
            sample(15.0, 0.056, 0.175, 0.074),
            sample(19.0, 0.04, 0.125, 0.053),
            sample(22.0, 0.032, 0.1, 0.042),
        ];

        // Anchor is 19h, neighbor 15h
        let yeast = resolve_yeast(&series, 18.0).unwrap();
        assert_close(yeast.cy, 0.1375);
    }

    #[test]
    fn test_interpolated_value_between_bounds() {
        let series = vec![
            sample(10.0, 0.1, 0.3, 0.13),
            sample(20.0, 0.05, 0.15, 0.065),
            sample(30.0, 0.02, 0.06, 0.026),
        ];

        let yeast = resolve_yeast(&series, 23.0).unwrap();
        assert!(yeast.cy < 0.15 && yeast.cy > 0.06);
        assert!(yeast.idy < 0.05 && yeast.idy > 0.02);
        assert!(yeast.ady < 0.065 && yeast.ady > 0.026);
    }

    #[test]
    fn test_tie_prefers_earlier_anchor() {
        let series = vec![sample(10.0, 0.2, 0.2, 0.2), sample(12.0, 0.1, 0.1, 0.1)];

        // Equidistant: anchor 10h, neighbor 12h; midpoint either way
        let yeast = resolve_yeast(&series, 11.0).unwrap();
        assert_close(yeast.cy, 0.15);
    }

    #[test]
    fn test_extrapolates_below_first_sample() {
        let series = vec![sample(10.0, 0.2, 0.2, 0.2), sample(20.0, 0.1, 0.1, 0.1)];

        let yeast = resolve_yeast(&series, 5.0).unwrap();
        assert_close(yeast.cy, 0.25);
    }

    #[test]
    fn test_extrapolates_above_last_sample() {
        let series = vec![sample(10.0, 0.2, 0.2, 0.2), sample(20.0, 0.1, 0.1, 0.1)];

        let yeast = resolve_yeast(&series, 30.0).unwrap();
        assert_close(yeast.cy, 0.0);
    }

    #[test]
    fn test_yeast_forms_are_independent() {
        let series = vec![sample(10.0, 1.0, 0.0, 5.0), sample(20.0, 1.0, 10.0, 0.0)];

        let yeast = resolve_yeast(&series, 15.0).unwrap();
        assert_close(yeast.idy, 1.0);
        assert_close(yeast.cy, 5.0);
        assert_close(yeast.ady, 2.5);
    }

    #[test]
    fn test_deterministic() {
        let series = reference_series();
        let a = resolve_yeast(&series, 20.5).unwrap();
        let b = resolve_yeast(&series, 20.5).unwrap();
        assert_eq!(a.cy.to_bits(), b.cy.to_bits());
    }

    #[test]
    fn test_empty_series_fails() {
        let err = resolve_yeast(&[], 24.0).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset(_)));
    }
}
