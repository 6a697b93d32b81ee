pub use crate::ui::ui_text::UI_TEXT;

/// Layout metrics for the observation table.
#[derive(Clone, Copy)]
pub struct TableLayout {
    pub date_width: f32,
    pub temp_width: f32,
    pub row_spacing: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub table: TableLayout,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    table: TableLayout {
        date_width: 110.0,
        temp_width: 70.0,
        row_spacing: 4.0,
    },
};
