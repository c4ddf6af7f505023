//! Runtime configuration - defaults plus URL query overrides
//!
//! `?tick_ms=80&ticks=30&duration_ms=1500&history=5&confetti=120`

use dioxus::logger::tracing::warn;

use crate::dice::{RollHistory, Timing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceConfig {
    /// Timing for the classic "decide for me" board
    pub classic: Timing,
    /// Timing for the custom dice board
    pub custom: Timing,
    pub history_capacity: usize,
    pub celebration_ms: u32,
    pub confetti_pieces: usize,
}

impl DiceConfig {
    pub const CELEBRATION_MS: u32 = 3000;
    pub const CONFETTI_PIECES: usize = 200;
    const MAX_CONFETTI: usize = 1000;
    const MAX_CELEBRATION_MS: u32 = 60_000;
    const MAX_HISTORY: u32 = 1000;

    /// Defaults with overrides from a query string (leading `?` optional)
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let Ok(value) = raw.parse::<u32>() else {
                warn!(key, raw, "ignoring non-numeric config override");
                continue;
            };
            match key {
                "tick_ms" if value > 0 => {
                    config.classic.tick_ms = value;
                    config.custom.tick_ms = value;
                }
                "ticks" if value > 0 => {
                    config.custom = Timing::tick_count(value, config.custom.tick_ms);
                }
                "duration_ms" if value > 0 => {
                    config.classic = Timing::fixed_duration(value, config.classic.tick_ms);
                }
                "history" if value <= Self::MAX_HISTORY => config.history_capacity = value as usize,
                "celebration_ms" if value <= Self::MAX_CELEBRATION_MS => config.celebration_ms = value,
                "confetti" => config.confetti_pieces = (value as usize).min(Self::MAX_CONFETTI),
                "tick_ms" | "ticks" | "duration_ms" => {
                    warn!(key, "ignoring zero config override");
                }
                "history" | "celebration_ms" => {
                    warn!(key, value, "ignoring out-of-range config override");
                }
                _ => {}
            }
        }
        config
    }

    /// Read overrides from the current page URL
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            classic: Timing::fixed_duration(Timing::DEFAULT_DURATION_MS, Timing::DEFAULT_TICK_MS),
            custom: Timing::tick_count(Timing::DEFAULT_TICKS, Timing::DEFAULT_TICK_MS),
            history_capacity: RollHistory::DEFAULT_CAPACITY,
            celebration_ms: Self::CELEBRATION_MS,
            confetti_pieces: Self::CONFETTI_PIECES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::sequencer::PickMode;

    #[test]
    fn defaults_match_observed_behavior() {
        let config = DiceConfig::default();
        assert_eq!(config.classic.mode, PickMode::FixedDuration { duration_ms: 2000 });
        assert_eq!(config.classic.tick_ms, 100);
        assert_eq!(config.custom.mode, PickMode::TickCount { ticks: 20 });
        assert_eq!(config.custom.tick_ms, 100);
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.celebration_ms, 3000);
    }

    #[test]
    fn empty_query_is_default() {
        assert_eq!(DiceConfig::from_query(""), DiceConfig::default());
        assert_eq!(DiceConfig::from_query("?"), DiceConfig::default());
    }

    #[test]
    fn overrides_apply_in_any_order() {
        let config = DiceConfig::from_query("?ticks=30&tick_ms=80&duration_ms=1500&history=5");
        assert_eq!(config.custom, Timing::tick_count(30, 80));
        assert_eq!(config.classic, Timing::fixed_duration(1500, 80));
        assert_eq!(config.history_capacity, 5);
    }

    #[test]
    fn bad_values_are_ignored() {
        let config = DiceConfig::from_query("tick_ms=fast&ticks=0&debug&confetti=99999&other=3");
        assert_eq!(config.classic, DiceConfig::default().classic);
        assert_eq!(config.custom, DiceConfig::default().custom);
        assert_eq!(config.confetti_pieces, 1000);
    }

    #[test]
    fn oversized_overrides_are_ignored() {
        let config = DiceConfig::from_query("?celebration_ms=2000000000&history=4000000000");
        assert_eq!(config.celebration_ms, DiceConfig::CELEBRATION_MS);
        assert_eq!(config.history_capacity, RollHistory::DEFAULT_CAPACITY);

        let config = DiceConfig::from_query("?celebration_ms=60000&history=1000");
        assert_eq!(config.celebration_ms, 60_000);
        assert_eq!(config.history_capacity, 1000);
    }
}
