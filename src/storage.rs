//! Local storage persistence for theme, choices and roll history
//!
//! Every failure is logged and replaced with a default; storage trouble never
//! reaches the user.

use dioxus::logger::tracing::warn;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dice::{ChoiceSet, RollHistory, RollRecord};
use crate::error::{DiceError, Result};
use crate::theme::{self, Theme};

pub const THEME_KEY: &str = "decisionDiceTheme";
pub const CHOICES_KEY: &str = "decisionDiceChoices";
pub const HISTORY_KEY: &str = "decisionDiceHistory";

fn read_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>> {
    match LocalStorage::get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn write_json<T: Serialize>(key: &str, value: &T) {
    if let Err(err) = LocalStorage::set(key, value) {
        warn!("Failed to persist {}: {}", key, DiceError::from(err));
    }
}

/// Theme is stored as the bare string `light` / `dark`, not JSON
pub fn load_theme() -> Theme {
    let stored = LocalStorage::raw().get_item(THEME_KEY).unwrap_or_else(|_| {
        warn!("Falling back to system theme: {}", DiceError::StorageRejected(THEME_KEY));
        None
    });
    Theme::resolve(stored.as_deref(), theme::system_prefers_dark())
}

pub fn save_theme(theme: Theme) {
    if LocalStorage::raw().set_item(THEME_KEY, theme.as_str()).is_err() {
        warn!("Failed to persist theme: {}", DiceError::StorageRejected(THEME_KEY));
    }
}

pub fn load_choices() -> ChoiceSet {
    match read_json::<ChoiceSet>(CHOICES_KEY) {
        Ok(choices) => choices.unwrap_or_default(),
        Err(err) => {
            warn!("Falling back to empty choices: {}", err);
            ChoiceSet::default()
        }
    }
}

pub fn save_choices(choices: &ChoiceSet) {
    write_json(CHOICES_KEY, choices);
}

pub fn load_history(capacity: usize) -> RollHistory {
    match read_json::<Vec<RollRecord>>(HISTORY_KEY) {
        Ok(records) => RollHistory::from_records(records.unwrap_or_default(), capacity),
        Err(err) => {
            warn!("Falling back to empty history: {}", err);
            RollHistory::new(capacity)
        }
    }
}

pub fn save_history(history: &RollHistory) {
    write_json(HISTORY_KEY, &history.to_records());
}
