//! Every user-facing string in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub method_subtitle: &'static str,

    // --- Threshold inputs ---
    pub label_base: &'static str,
    pub label_upper: &'static str,
    pub hint_tmin: &'static str,
    pub hint_tmax: &'static str,

    // --- Toolbar ---
    pub btn_add_row: &'static str,
    pub btn_sample: &'static str,
    pub btn_clear: &'static str,
    pub btn_export: &'static str,
    pub btn_save_prefs: &'static str,
    pub btn_reset_prefs: &'static str,
    pub btn_theme: &'static str,
    pub btn_remove_row: &'static str,

    // --- Table headers ---
    pub header_date: &'static str,
    pub header_tmin: &'static str,
    pub header_tmax: &'static str,
    pub header_clipped: &'static str,
    pub header_gdd: &'static str,

    // --- Aggregates ---
    pub label_total: &'static str,
    pub label_avg_preview: &'static str,
    pub undefined_cell: &'static str,

    // --- Confirm dialog ---
    pub confirm_clear_title: &'static str,
    pub confirm_clear_yes: &'static str,
    pub confirm_clear_no: &'static str,

    // --- Status line ---
    pub status_prefs_saved: &'static str,
    pub status_prefs_invalid: &'static str,
    pub status_no_rows: &'static str,
    pub status_export_failed: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "AgroClime GDD Calculator",
    method_subtitle: "Clipped method · °C",

    label_base: "Base temp (°C)",
    label_upper: "Upper threshold (°C)",
    hint_tmin: "e.g., 7.5",
    hint_tmax: "e.g., 22.3",

    btn_add_row: "Add Row",
    btn_sample: "Sample Data",
    btn_clear: "Clear Rows",
    btn_export: "Export CSV",
    btn_save_prefs: "Save Prefs",
    btn_reset_prefs: "Reset Prefs",
    btn_theme: "Theme",
    btn_remove_row: "✖",

    header_date: "Date",
    header_tmin: "Tmin (°C)",
    header_tmax: "Tmax (°C)",
    header_clipped: "Clipped Avg (°C)",
    header_gdd: "GDD",

    label_total: "Total GDD",
    label_avg_preview: "Avg clipped temp",
    undefined_cell: "—",

    confirm_clear_title: "Remove all rows?",
    confirm_clear_yes: "Remove",
    confirm_clear_no: "Keep",

    status_prefs_saved: "Saved! These thresholds will load next time.",
    status_prefs_invalid: "Please provide valid numeric thresholds.",
    status_no_rows: "No rows to export.",
    status_export_failed: "Export failed, see log for details.",
};
