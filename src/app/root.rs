use eframe::{
    Frame, Storage,
    egui::{Context, Visuals},
};

use crate::{
    Cli,
    app::{Command, SessionState, Theme},
    config::{PERSISTENCE, PrefsStore, ThresholdPrefs},
    engine::compute_all,
    export::{build_csv, deliver_csv, export_filename},
    ui::UI_TEXT,
};

pub struct App {
    pub(crate) session: SessionState,
    /// Mirror of what the store should hold; written out in `save`.
    saved_prefs: Option<ThresholdPrefs>,
    pub(crate) theme: Theme,
    pub(crate) confirm_clear: bool,
    pub(crate) status: Option<String>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let saved_prefs = cc.storage.and_then(|s| s.load_thresholds());
        let theme = cc
            .storage
            .and_then(|s| s.get_string(PERSISTENCE.prefs.theme_key))
            .map(|key| Theme::from_key(&key))
            .unwrap_or_default();

        let mut session = SessionState::default();
        if let Some(prefs) = &saved_prefs {
            session.base_input = format!("{}", prefs.base);
            session.upper_input = format!("{}", prefs.upper);
        }
        // Original page starts with a single dated row
        session.apply(if args.sample {
            Command::LoadSample
        } else {
            Command::AddRow
        });

        Self {
            session,
            saved_prefs,
            theme,
            confirm_clear: false,
            status: None,
        }
    }

    fn dispatch(&mut self, cmd: Command) {
        match cmd {
            Command::SavePrefs => self.save_thresholds(),
            Command::ResetPrefs => {
                self.session.reset_thresholds();
                self.saved_prefs = None;
            }
            Command::ExportCsv => self.export_csv(),
            other => self.session.apply(other),
        }
    }

    /// Prefs validation lives here, at the boundary. The engine itself
    /// never rejects a band; saving one the user cannot parse back is the
    /// only case worth flagging.
    fn save_thresholds(&mut self) {
        let band = self.session.band();
        match (band.base, band.upper) {
            (Some(base), Some(upper)) => {
                self.saved_prefs = Some(ThresholdPrefs {
                    base: base.value(),
                    upper: upper.value(),
                });
                self.status = Some(UI_TEXT.status_prefs_saved.to_string());
            }
            _ => self.status = Some(UI_TEXT.status_prefs_invalid.to_string()),
        }
    }

    fn export_csv(&mut self) {
        if self.session.records.is_empty() {
            self.status = Some(UI_TEXT.status_no_rows.to_string());
            return;
        }
        let csv = build_csv(&self.session.band(), &self.session.records);
        let filename = export_filename(chrono::Local::now().date_naive());
        match deliver_csv(&filename, &csv) {
            Ok(()) => self.status = Some(filename),
            Err(err) => {
                log::error!("CSV export failed: {}", err);
                self.status = Some(UI_TEXT.status_export_failed.to_string());
            }
        }
    }

    fn apply_visuals(&self, ctx: &Context) {
        let visuals = match self.theme {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };
        ctx.set_visuals(visuals);
        ctx.style_mut(|s| s.interaction.selectable_labels = false);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.apply_visuals(ctx);

        // One synchronous recompute per frame; the engine is cheap and
        // stateless so there is nothing to cache or invalidate.
        let summary = compute_all(&self.session.band(), &self.session.records);

        let mut cmds = self.render_top_panel(ctx);
        self.render_status_panel(ctx, &summary);
        cmds.extend(self.render_central_panel(ctx, &summary));
        cmds.extend(self.render_confirm_window(ctx));

        for cmd in cmds {
            self.dispatch(cmd);
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        storage.set_string(PERSISTENCE.prefs.theme_key, self.theme.to_string());
        match &self.saved_prefs {
            Some(prefs) => storage.save_thresholds(prefs),
            None => storage.clear_thresholds(),
        }
    }
}
