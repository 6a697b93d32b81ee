mod ui_config;
mod ui_render;
mod ui_text;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
