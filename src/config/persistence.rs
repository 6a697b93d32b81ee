//! Preference persistence configuration and the storage seam.

use serde::{Deserialize, Serialize};

/// Configuration for preference persistence
pub struct PrefsPersistenceConfig {
    /// Key holding the saved threshold pair
    pub thresholds_key: &'static str,
    /// Key holding the chosen theme
    pub theme_key: &'static str,
}

/// Configuration for application state persistence (native only)
pub struct AppPersistenceConfig {
    /// Path for the eframe key-value store backing file
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub prefs: PrefsPersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    prefs: PrefsPersistenceConfig {
        thresholds_key: "agroclime_prefs",
        theme_key: "agroclime_theme",
    },
    app: AppPersistenceConfig {
        state_path: ".agroclime.ron",
    },
};

/// The one persisted entity: the user's saved threshold pair.
/// Round-trips as JSON `{"base":…,"upper":…}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPrefs {
    pub base: f64,
    pub upper: f64,
}

/// Storage seam for threshold preferences. The app only ever sees this
/// interface; the physical medium (disk file natively, localStorage on
/// wasm) is whatever backs the `eframe::Storage` underneath.
pub trait PrefsStore {
    fn load_thresholds(&self) -> Option<ThresholdPrefs>;
    fn save_thresholds(&mut self, prefs: &ThresholdPrefs);
    fn clear_thresholds(&mut self);
}

impl<S: eframe::Storage + ?Sized> PrefsStore for S {
    fn load_thresholds(&self) -> Option<ThresholdPrefs> {
        let raw = self.get_string(PERSISTENCE.prefs.thresholds_key)?;
        match serde_json::from_str(&raw) {
            Ok(prefs) => Some(prefs),
            Err(err) => {
                if !raw.is_empty() {
                    log::warn!("Discarding unreadable threshold prefs: {}", err);
                }
                None
            }
        }
    }

    fn save_thresholds(&mut self, prefs: &ThresholdPrefs) {
        match serde_json::to_string(prefs) {
            Ok(json) => self.set_string(PERSISTENCE.prefs.thresholds_key, json),
            Err(err) => log::error!("Failed to serialize threshold prefs: {}", err),
        }
    }

    fn clear_thresholds(&mut self) {
        // eframe::Storage has no removal; an empty value reads back as None.
        self.set_string(PERSISTENCE.prefs.thresholds_key, String::new());
    }
}
