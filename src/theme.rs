//! Light/dark theme and the colors each one paints with

use std::fmt;

use crate::error::{DiceError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Inline-style colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page_bg: &'static str,
    pub card_bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub input_bg: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub danger: &'static str,
    pub disabled: &'static str,
}

const DARK: Palette = Palette {
    page_bg: "linear-gradient(135deg, #111827, #1f2937 50%, #111827)",
    card_bg: "rgba(31, 41, 55, 0.6)",
    border: "rgba(55, 65, 81, 0.6)",
    text: "#e5e7eb",
    muted: "#9ca3af",
    input_bg: "#1f2937",
    accent: "#4f46e5",
    success: "#16a34a",
    danger: "#f87171",
    disabled: "rgba(55, 65, 81, 0.6)",
};

const LIGHT: Palette = Palette {
    page_bg: "linear-gradient(135deg, #eff6ff, #eef2ff 50%, #faf5ff)",
    card_bg: "rgba(255, 255, 255, 0.6)",
    border: "#e5e7eb",
    text: "#1f2937",
    muted: "#4b5563",
    input_bg: "#f9fafb",
    accent: "#4f46e5",
    success: "#16a34a",
    danger: "#ef4444",
    disabled: "#d1d5db",
};

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored preference wins, then the system setting, then the default (dark)
    pub fn resolve(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Self {
        if let Some(theme) = stored.and_then(Self::parse) {
            return theme;
        }
        match system_prefers_dark {
            Some(true) => Self::Dark,
            Some(false) => Self::Light,
            None => Self::default(),
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Label for the toggle button (shows what clicking switches to)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// System `prefers-color-scheme`, if the browser exposes it
pub fn system_prefers_dark() -> Option<bool> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

/// Mirror the theme onto `<html data-theme=..>`
pub fn apply(theme: Theme) -> Result<()> {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return Ok(());
    };
    el.set_attribute("data-theme", theme.as_str())
        .map_err(|err| DiceError::Script(format!("set data-theme: {err:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn resolve_prefers_stored_value() {
        assert_eq!(Theme::resolve(Some("light"), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), Some(false)), Theme::Dark);
    }

    #[test]
    fn resolve_falls_back_to_system_then_default() {
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(Some("garbage"), Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, None), Theme::Dark);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
