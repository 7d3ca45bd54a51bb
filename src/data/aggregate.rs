use crate::error::{CompareError, Result};

use super::model::Series;

/// Number of decider queries in one benchmark batch. Averages are taken
/// over the whole batch, not over the distinct sizes present in the file.
pub const QUERY_BATCH: f64 = 1000.0;

/// `sum(size * count) / 1000.0` over the offset-adjusted sizes.
pub fn weighted_scaled_average(series: &Series) -> f64 {
    let weighted: f64 = series
        .records
        .iter()
        .map(|r| r.size * r.count as f64)
        .sum();
    weighted / QUERY_BATCH
}

/// Round to 4 decimal digits for display.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Ratio of the second average to the first.
pub fn improvement_factor(first: f64, second: f64) -> Result<f64> {
    if first == 0.0 {
        return Err(CompareError::DivisionByZero);
    }
    Ok(second / first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Record, SeriesKind};

    fn series(pairs: &[(f64, i64)]) -> Series {
        Series {
            kind: SeriesKind::First,
            records: pairs
                .iter()
                .map(|&(size, count)| Record { size, count })
                .collect(),
        }
    }

    #[test]
    fn hand_computed_average() {
        let s = series(&[(1.0, 10), (2.0, 20), (3.0, 30)]);
        assert!((weighted_scaled_average(&s) - 0.14).abs() < 1e-12);
        assert_eq!(round4(weighted_scaled_average(&s)), 0.14);
    }

    #[test]
    fn empty_series_averages_to_zero() {
        assert_eq!(weighted_scaled_average(&series(&[])), 0.0);
    }

    #[test]
    fn rounding_keeps_four_digits() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.04400000000000001), 0.044);
        assert_eq!(round4(12.0), 12.0);
    }

    #[test]
    fn factor_is_second_over_first() {
        let f = improvement_factor(0.044, 0.073).unwrap();
        assert!((f - 1.6591).abs() < 1e-4);
    }

    #[test]
    fn zero_first_average_is_fatal() {
        assert!(matches!(
            improvement_factor(0.0, 0.5),
            Err(CompareError::DivisionByZero)
        ));
    }
}
