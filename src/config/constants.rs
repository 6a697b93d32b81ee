// Top Level Constants

/// Default lower development threshold (°C). Typical for maize/soy GDD.
pub const DEFAULT_BASE_C: f64 = 10.0;
/// Default upper development ceiling (°C).
pub const DEFAULT_UPPER_C: f64 = 30.0;

pub mod sample {
    /// Demo observations seeded by the "Sample Data" action.
    /// `(day offset from today, tmin °C, tmax °C)`
    pub const DAYS: &[(i64, f64, f64)] = &[
        (-1, 8.2, 19.7),
        (0, 10.4, 27.5),
        (1, 12.1, 31.3),
        (2, 6.8, 18.9),
        (3, 14.0, 29.2),
    ];
}

pub mod export {
    /// Fixed column order of the CSV artifact.
    pub const HEADER: &[&str] = &["Date", "Tmin_C", "Tmax_C", "Clipped_Avg_C", "GDD"];
    /// Prefix of the generated filename; the ISO date is appended.
    pub const FILENAME_BASE: &str = "agroclime_gdd";
}
