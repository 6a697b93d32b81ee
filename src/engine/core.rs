//! Clipped-average Growing Degree Day arithmetic.
//!
//! Everything here is a total function: invalid thresholds or missing
//! observations degrade to a sentinel `(None, 0)` row instead of an
//! error, so the aggregate stays defined while the user is mid-edit.

use crate::config::ThresholdBand;
use crate::domain::{Celsius, DailyRecord, Gdd};

/// Per-day result of the clipped-average method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowResult {
    /// Mid-range of the day after clamping both extremes into the band.
    /// `None` when the band or either observation is unusable.
    pub clipped_avg: Option<Celsius>,
    /// Heat units for the day. Zero whenever `clipped_avg` is `None`.
    pub gdd: Gdd,
}

impl RowResult {
    /// Sentinel for an unusable band or observation pair.
    pub(crate) const UNDEFINED: Self = Self {
        clipped_avg: None,
        gdd: Gdd::ZERO,
    };
}

/// Aggregate over the whole table, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// One result per record, in record order.
    pub rows: Vec<RowResult>,
    /// Sum of gdd over all rows. Defined even for an empty table.
    pub total: Gdd,
    /// Mean clipped average over the rows where it is defined.
    pub average_clipped: Option<Celsius>,
}

/// Computes one day. Pure; same inputs give bit-identical outputs.
pub fn compute_row(band: &ThresholdBand, tmin: Option<Celsius>, tmax: Option<Celsius>) -> RowResult {
    let Some((base, upper)) = band.bounds() else {
        return RowResult::UNDEFINED;
    };
    let (Some(tmin), Some(tmax)) = (tmin, tmax) else {
        return RowResult::UNDEFINED;
    };

    let tmin_star = tmin.max(base);
    let tmax_star = tmax.min(upper);
    let clipped_avg = Celsius::new((tmin_star.value() + tmax_star.value()) / 2.0);

    RowResult {
        clipped_avg: Some(clipped_avg),
        // Gdd::new floors at zero
        gdd: Gdd::new(clipped_avg.value() - base.value()),
    }
}

/// Reduces the whole record sequence. Undefined rows contribute zero to
/// the total and are excluded from the average.
pub fn compute_all(band: &ThresholdBand, records: &[DailyRecord]) -> Summary {
    let mut total = Gdd::ZERO;
    let mut avg_sum = 0.0;
    let mut avg_count = 0usize;

    let rows: Vec<RowResult> = records
        .iter()
        .map(|rec| {
            let row = compute_row(band, rec.tmin(), rec.tmax());
            total += row.gdd;
            if let Some(avg) = row.clipped_avg {
                avg_sum += avg.value();
                avg_count += 1;
            }
            row
        })
        .collect();

    Summary {
        rows,
        total,
        average_clipped: (avg_count > 0).then(|| Celsius::new(avg_sum / avg_count as f64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> ThresholdBand {
        ThresholdBand::new(10.0, 30.0)
    }

    fn c(v: f64) -> Option<Celsius> {
        Some(Celsius::new(v))
    }

    fn record(tmin: f64, tmax: f64) -> DailyRecord {
        DailyRecord::with_temps("", tmin, tmax)
    }

    #[test]
    fn clips_minimum_up_to_base() {
        // base=10, upper=30, tmin=8.2, tmax=19.7
        // tmin*=10, tmax*=19.7 → avg 14.85, gdd 4.85
        let row = compute_row(&band(), c(8.2), c(19.7));
        assert!((row.clipped_avg.unwrap().value() - 14.85).abs() < 1e-9);
        assert!((row.gdd.value() - 4.85).abs() < 1e-9);
    }

    #[test]
    fn clips_maximum_down_to_upper() {
        // base=10, upper=30, tmin=12.1, tmax=31.3
        // tmin*=12.1, tmax*=30 → avg 21.05, gdd 11.05
        let row = compute_row(&band(), c(12.1), c(31.3));
        assert!((row.clipped_avg.unwrap().value() - 21.05).abs() < 1e-9);
        assert!((row.gdd.value() - 11.05).abs() < 1e-9);
    }

    #[test]
    fn clipped_bounds_stay_inside_band() {
        for &(tmin, tmax) in &[(-20.0, -5.0), (0.0, 15.0), (12.0, 25.0), (28.0, 45.0)] {
            let row = compute_row(&band(), c(tmin), c(tmax));
            let avg = row.clipped_avg.unwrap().value();
            assert!(avg >= (tmin.max(10.0) + tmax.min(30.0)) / 2.0 - 1e-9);
            assert!(row.gdd.value() >= 0.0);
        }
    }

    #[test]
    fn day_at_or_below_base_contributes_nothing() {
        // tmax <= base → clipped avg sits at base, gdd floors to 0
        let row = compute_row(&band(), c(2.0), c(8.0));
        assert!(row.clipped_avg.unwrap().value() <= 10.0);
        assert_eq!(row.gdd, Gdd::ZERO);
    }

    #[test]
    fn degenerate_band_yields_sentinel() {
        let inverted = ThresholdBand::new(30.0, 10.0);
        let row = compute_row(&inverted, c(12.0), c(25.0));
        assert_eq!(row.clipped_avg, None);
        assert_eq!(row.gdd, Gdd::ZERO);

        let collapsed = ThresholdBand::new(10.0, 10.0);
        assert_eq!(compute_row(&collapsed, c(12.0), c(25.0)).clipped_avg, None);
    }

    #[test]
    fn missing_observation_yields_sentinel() {
        assert_eq!(compute_row(&band(), None, c(25.0)), RowResult::UNDEFINED);
        assert_eq!(compute_row(&band(), c(12.0), None), RowResult::UNDEFINED);
        assert_eq!(compute_row(&band(), None, None), RowResult::UNDEFINED);
    }

    #[test]
    fn one_missing_field_gets_no_partial_credit() {
        let mut rec = DailyRecord::new("2026-08-27");
        rec.tmin = "12.0".to_string();
        let summary = compute_all(&band(), &[rec]);
        assert_eq!(summary.total, Gdd::ZERO);
        assert_eq!(summary.average_clipped, None);
    }

    #[test]
    fn empty_table_aggregates_to_zero_and_undefined() {
        let summary = compute_all(&band(), &[]);
        assert_eq!(summary.total, Gdd::ZERO);
        assert_eq!(summary.average_clipped, None);
        assert!(summary.rows.is_empty());
    }

    #[test]
    fn aggregate_matches_independent_rows() {
        let days = [
            (8.2, 19.7),
            (10.4, 27.5),
            (12.1, 31.3),
            (6.8, 18.9),
            (14.0, 29.2),
        ];
        let records: Vec<DailyRecord> = days.iter().map(|&(lo, hi)| record(lo, hi)).collect();
        let summary = compute_all(&band(), &records);

        let mut expected_total = 0.0;
        let mut expected_avg = 0.0;
        for &(lo, hi) in &days {
            let row = compute_row(&band(), c(lo), c(hi));
            expected_total += row.gdd.value();
            expected_avg += row.clipped_avg.unwrap().value();
        }
        expected_avg /= days.len() as f64;

        assert!((summary.total.value() - expected_total).abs() < 1e-9);
        assert!((summary.average_clipped.unwrap().value() - expected_avg).abs() < 1e-9);

        // Order-independence of the numerics
        let reversed: Vec<DailyRecord> = records.iter().rev().cloned().collect();
        let rev_summary = compute_all(&band(), &reversed);
        assert!((rev_summary.total.value() - summary.total.value()).abs() < 1e-9);
    }

    #[test]
    fn recompute_is_idempotent() {
        let records = vec![record(8.2, 19.7), record(12.1, 31.3)];
        let first = compute_all(&band(), &records);
        let second = compute_all(&band(), &records);
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_rows_do_not_poison_the_total() {
        let records = vec![record(8.2, 19.7), DailyRecord::new(""), record(12.1, 31.3)];
        let summary = compute_all(&band(), &records);
        assert!((summary.total.value() - (4.85 + 11.05)).abs() < 1e-9);
        // Average over the two defined rows only
        assert!((summary.average_clipped.unwrap().value() - (14.85 + 21.05) / 2.0).abs() < 1e-9);
    }
}
