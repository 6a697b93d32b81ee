//! Panel rendering. Widgets never mutate session state directly; every
//! edit is emitted as a [`Command`] and applied after the frame.

use chrono::{Datelike, Local};
use eframe::egui::{
    Align2, CentralPanel, Context, Grid, RichText, ScrollArea, TextEdit, TopBottomPanel, Window,
    vec2,
};

use crate::app::{App, Command};
use crate::domain::Celsius;
use crate::engine::{RowResult, Summary};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// Two decimals, or the em-dash placeholder for an undefined value.
pub(crate) fn fmt_cell(value: Option<Celsius>) -> String {
    match value {
        Some(v) => format!("{:.2}", v.value()),
        None => UI_TEXT.undefined_cell.to_string(),
    }
}

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) -> Vec<Command> {
        let mut cmds = Vec::new();

        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading(UI_TEXT.app_title);
                ui.label(RichText::new(UI_TEXT.method_subtitle).weak());
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        if ui.button(UI_TEXT.btn_theme).clicked() {
                            self.theme = self.theme.toggled();
                        }
                    },
                );
            });
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(UI_TEXT.label_base);
                let mut base = self.session.base_input.clone();
                if ui
                    .add(TextEdit::singleline(&mut base).desired_width(UI_CONFIG.table.temp_width))
                    .changed()
                {
                    cmds.push(Command::SetBase(base));
                }

                ui.label(UI_TEXT.label_upper);
                let mut upper = self.session.upper_input.clone();
                if ui
                    .add(TextEdit::singleline(&mut upper).desired_width(UI_CONFIG.table.temp_width))
                    .changed()
                {
                    cmds.push(Command::SetUpper(upper));
                }

                ui.separator();

                if ui.button(UI_TEXT.btn_save_prefs).clicked() {
                    cmds.push(Command::SavePrefs);
                }
                if ui.button(UI_TEXT.btn_reset_prefs).clicked() {
                    cmds.push(Command::ResetPrefs);
                }
            });
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button(UI_TEXT.btn_add_row).clicked() {
                    cmds.push(Command::AddRow);
                }
                if ui.button(UI_TEXT.btn_sample).clicked() {
                    cmds.push(Command::LoadSample);
                }
                if ui.button(UI_TEXT.btn_clear).clicked() {
                    self.confirm_clear = true;
                }
                if ui.button(UI_TEXT.btn_export).clicked() {
                    cmds.push(Command::ExportCsv);
                }
            });
            ui.add_space(4.0);
        });

        cmds
    }

    pub(crate) fn render_central_panel(&self, ctx: &Context, summary: &Summary) -> Vec<Command> {
        let mut cmds = Vec::new();
        let records = &self.session.records;

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                Grid::new("gdd_table")
                    .striped(true)
                    .num_columns(6)
                    .spacing([8.0, UI_CONFIG.table.row_spacing])
                    .show(ui, |ui| {
                        ui.label(RichText::new(UI_TEXT.header_date).strong());
                        ui.label(RichText::new(UI_TEXT.header_tmin).strong());
                        ui.label(RichText::new(UI_TEXT.header_tmax).strong());
                        ui.label(RichText::new(UI_TEXT.header_clipped).strong());
                        ui.label(RichText::new(UI_TEXT.header_gdd).strong());
                        ui.label("");
                        ui.end_row();

                        for (i, rec) in records.iter().enumerate() {
                            // Summary rows track records one-to-one; a row
                            // added this frame shows as undefined until the
                            // next recompute.
                            let row = summary.rows.get(i).copied().unwrap_or(RowResult::UNDEFINED);

                            let mut date = rec.date.clone();
                            if ui
                                .add(
                                    TextEdit::singleline(&mut date)
                                        .desired_width(UI_CONFIG.table.date_width),
                                )
                                .changed()
                            {
                                cmds.push(Command::SetDate(i, date));
                            }

                            let mut tmin = rec.tmin.clone();
                            if ui
                                .add(
                                    TextEdit::singleline(&mut tmin)
                                        .hint_text(UI_TEXT.hint_tmin)
                                        .desired_width(UI_CONFIG.table.temp_width),
                                )
                                .changed()
                            {
                                cmds.push(Command::SetTmin(i, tmin));
                            }

                            let mut tmax = rec.tmax.clone();
                            if ui
                                .add(
                                    TextEdit::singleline(&mut tmax)
                                        .hint_text(UI_TEXT.hint_tmax)
                                        .desired_width(UI_CONFIG.table.temp_width),
                                )
                                .changed()
                            {
                                cmds.push(Command::SetTmax(i, tmax));
                            }

                            ui.label(RichText::new(fmt_cell(row.clipped_avg)).weak());
                            ui.label(format!("{}", row.gdd));

                            if ui.button(UI_TEXT.btn_remove_row).clicked() {
                                cmds.push(Command::RemoveRow(i));
                            }
                            ui.end_row();
                        }
                    });
            });
        });

        cmds
    }

    pub(crate) fn render_status_panel(&self, ctx: &Context, summary: &Summary) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(UI_TEXT.label_total).strong());
                ui.label(RichText::new(format!("{}", summary.total)).strong());
                ui.separator();
                ui.label(UI_TEXT.label_avg_preview);
                ui.label(fmt_cell(summary.average_clipped));

                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(RichText::new(status).italics());
                }

                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        ui.label(RichText::new(format!("AgroClime · {}", Local::now().year())).weak());
                    },
                );
            });
            ui.add_space(2.0);
        });
    }

    pub(crate) fn render_confirm_window(&mut self, ctx: &Context) -> Vec<Command> {
        let mut cmds = Vec::new();
        if !self.confirm_clear {
            return cmds;
        }

        Window::new(UI_TEXT.confirm_clear_title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(UI_TEXT.confirm_clear_yes).clicked() {
                        cmds.push(Command::ClearRows);
                        self.confirm_clear = false;
                    }
                    if ui.button(UI_TEXT.confirm_clear_no).clicked() {
                        self.confirm_clear = false;
                    }
                });
            });

        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_cells_render_as_em_dash() {
        assert_eq!(fmt_cell(None), "—");
        assert_eq!(fmt_cell(Some(Celsius::new(14.85))), "14.85");
        assert_eq!(fmt_cell(Some(Celsius::new(5.0))), "5.00");
    }
}
