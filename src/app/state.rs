// src/app/state.rs

use chrono::{Duration, Local, NaiveDate};
use strum_macros::Display;

use crate::config::{ThresholdBand, constants};
use crate::domain::DailyRecord;

/// Everything a recompute needs: the live threshold field text plus the
/// ordered record table. Owned by the app, handed to the engine by
/// reference once per triggering event.
#[derive(Clone)]
pub struct SessionState {
    pub base_input: String,
    pub upper_input: String,
    pub records: Vec<DailyRecord>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            base_input: format!("{}", constants::DEFAULT_BASE_C),
            upper_input: format!("{}", constants::DEFAULT_UPPER_C),
            records: Vec::new(),
        }
    }
}

/// One discrete user action. The UI emits these during the frame and the
/// app applies them afterwards, followed by a single recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddRow,
    RemoveRow(usize),
    /// Already confirmed by the dialog when it reaches dispatch.
    ClearRows,
    LoadSample,
    SetDate(usize, String),
    SetTmin(usize, String),
    SetTmax(usize, String),
    SetBase(String),
    SetUpper(String),
    SavePrefs,
    ResetPrefs,
    ExportCsv,
}

impl SessionState {
    pub fn band(&self) -> ThresholdBand {
        ThresholdBand::from_inputs(&self.base_input, &self.upper_input)
    }

    /// Applies a state-mutating command. Boundary commands (prefs, export)
    /// are the app's concern and are ignored here.
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::AddRow => self.records.push(DailyRecord::new(today_iso())),
            Command::RemoveRow(idx) => {
                if idx < self.records.len() {
                    self.records.remove(idx);
                }
            }
            Command::ClearRows => self.records.clear(),
            Command::LoadSample => self.seed_sample(Local::now().date_naive()),
            Command::SetDate(idx, text) => {
                if let Some(rec) = self.records.get_mut(idx) {
                    rec.date = text;
                }
            }
            Command::SetTmin(idx, text) => {
                if let Some(rec) = self.records.get_mut(idx) {
                    rec.tmin = text;
                }
            }
            Command::SetTmax(idx, text) => {
                if let Some(rec) = self.records.get_mut(idx) {
                    rec.tmax = text;
                }
            }
            Command::SetBase(text) => self.base_input = text,
            Command::SetUpper(text) => self.upper_input = text,
            Command::SavePrefs | Command::ResetPrefs | Command::ExportCsv => {}
        }
    }

    pub fn reset_thresholds(&mut self) {
        self.base_input = format!("{}", constants::DEFAULT_BASE_C);
        self.upper_input = format!("{}", constants::DEFAULT_UPPER_C);
    }

    fn seed_sample(&mut self, today: NaiveDate) {
        self.records = constants::sample::DAYS
            .iter()
            .map(|&(offset, tmin, tmax)| {
                DailyRecord::with_temps((today + Duration::days(offset)).to_string(), tmin, tmax)
            })
            .collect();
    }
}

fn today_iso() -> String {
    Local::now().date_naive().to_string()
}

/// Display surface, persisted under its own key like the original page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Theme {
    #[default]
    #[strum(to_string = "dark")]
    Dark,
    #[strum(to_string = "light")]
    Light,
}

impl Theme {
    pub fn from_key(key: &str) -> Self {
        match key {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_lifecycle() {
        let mut session = SessionState::default();
        session.apply(Command::AddRow);
        session.apply(Command::AddRow);
        assert_eq!(session.records.len(), 2);

        session.apply(Command::SetTmin(0, "8.2".to_string()));
        session.apply(Command::SetTmax(0, "19.7".to_string()));
        assert_eq!(session.records[0].tmin, "8.2");

        session.apply(Command::RemoveRow(0));
        assert_eq!(session.records.len(), 1);
        assert_eq!(session.records[0].tmin, "");

        // Out-of-range removal is a no-op, not a panic
        session.apply(Command::RemoveRow(7));
        assert_eq!(session.records.len(), 1);

        session.apply(Command::ClearRows);
        assert!(session.records.is_empty());
    }

    #[test]
    fn sample_seeds_five_known_days() {
        let mut session = SessionState::default();
        session.seed_sample(NaiveDate::from_ymd_opt(2026, 8, 27).unwrap());
        assert_eq!(session.records.len(), 5);
        assert_eq!(session.records[0].date, "2026-08-26");
        assert_eq!(session.records[0].tmin, "8.2");
        assert_eq!(session.records[4].tmax, "29.2");
    }

    #[test]
    fn defaults_form_a_valid_band() {
        let session = SessionState::default();
        assert!(session.band().is_valid());

        let mut session = session;
        session.apply(Command::SetUpper("5".to_string()));
        assert!(!session.band().is_valid());
        session.reset_thresholds();
        assert!(session.band().is_valid());
    }

    #[test]
    fn theme_round_trips_through_its_key() {
        assert_eq!(Theme::from_key(&Theme::Light.to_string()), Theme::Light);
        assert_eq!(Theme::from_key(&Theme::Dark.to_string()), Theme::Dark);
        assert_eq!(Theme::from_key("junk"), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
