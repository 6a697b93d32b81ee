//! CSV text assembly. Pure string building; delivery lives in `sink`.

use crate::config::{ThresholdBand, constants::export};
use crate::domain::{Celsius, DailyRecord};
use crate::engine::compute_row;

/// Two decimal places when defined, empty cell when not.
fn cell(value: Option<Celsius>) -> String {
    match value {
        Some(v) => format!("{:.2}", v.value()),
        None => String::new(),
    }
}

/// Builds the full CSV artifact, header first, one line per record in
/// table order. Results are recomputed from the band here rather than
/// read back from the UI, so the export is consistent even mid-edit.
pub fn build_csv(band: &ThresholdBand, records: &[DailyRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(export::HEADER.join(","));

    for rec in records {
        let row = compute_row(band, rec.tmin(), rec.tmax());
        let gdd = row
            .clipped_avg
            .is_some()
            .then(|| Celsius::new(row.gdd.value()));
        lines.push(
            [
                rec.date.clone(),
                cell(rec.tmin()),
                cell(rec.tmax()),
                cell(row.clipped_avg),
                cell(gdd),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}

/// `agroclime_gdd_<YYYY-MM-DD>.csv`
pub fn export_filename(today: chrono::NaiveDate) -> String {
    format!("{}_{}.csv", export::FILENAME_BASE, today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> ThresholdBand {
        ThresholdBand::new(10.0, 30.0)
    }

    #[test]
    fn header_order_is_fixed() {
        let csv = build_csv(&band(), &[]);
        assert_eq!(csv, "Date,Tmin_C,Tmax_C,Clipped_Avg_C,GDD");
    }

    #[test]
    fn defined_row_formats_two_decimals() {
        let rec = DailyRecord::with_temps("2026-08-27", 8.2, 19.7);
        let csv = build_csv(&band(), &[rec]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "2026-08-27,8.20,19.70,14.85,4.85");
    }

    #[test]
    fn undefined_fields_export_as_empty() {
        let mut rec = DailyRecord::new("2026-08-28");
        rec.tmin = "12.1".to_string(); // tmax left blank
        let csv = build_csv(&band(), &[rec]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "2026-08-28,12.10,,,");
    }

    #[test]
    fn invalid_band_exports_observations_only() {
        let inverted = ThresholdBand::new(30.0, 10.0);
        let rec = DailyRecord::with_temps("2026-08-29", 8.2, 19.7);
        let csv = build_csv(&inverted, &[rec]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "2026-08-29,8.20,19.70,,");
    }

    #[test]
    fn filename_carries_iso_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        assert_eq!(export_filename(date), "agroclime_gdd_2026-08-27.csv");
    }
}
