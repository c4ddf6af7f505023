use dioxus::prelude::*;

use crate::dice::RollHistory;
use super::{card_style, use_palette};

/// Human-readable age of a record ("just now", "5m ago", "3h ago", "2d ago")
pub fn relative_age(now_ms: f64, then_ms: f64) -> String {
    let secs = ((now_ms - then_ms) / 1000.0).max(0.0) as u64;
    match secs {
        0..=9 => "just now".to_string(),
        10..=59 => format!("{secs}s ago"),
        60..=3599 => format!("{}m ago", secs / 60),
        3600..=86_399 => format!("{}h ago", secs / 3600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

/// Most-recent-first list of committed rolls
#[component]
pub fn HistoryPanel(history: RollHistory, #[props(default)] on_clear: Option<EventHandler<()>>) -> Element {
    let palette = use_palette();
    if history.is_empty() {
        return rsx! {};
    }

    let card = card_style(palette);
    let muted = palette.muted;
    let border = palette.border;
    let now = js_sys::Date::now();
    let rows: Vec<(usize, String, String)> = history
        .iter()
        .enumerate()
        .map(|(i, r)| (i, r.result.clone(), relative_age(now, r.timestamp_ms)))
        .collect();

    rsx! {
        div {
            style: "{card} margin-top: 24px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 10px;",
                h3 { style: "margin: 0; font-size: 16px;", "Recent decisions" }
                if let Some(handler) = on_clear {
                    button {
                        style: "background: none; border: none; color: {muted}; font-size: 13px; cursor: pointer;",
                        onclick: move |_| handler.call(()),
                        "Clear"
                    }
                }
            }
            for (i, result, age) in rows {
                div {
                    key: "{i}",
                    style: "display: flex; justify-content: space-between; padding: 6px 0; border-top: 1px solid {border}; font-size: 14px;",
                    span { "{result}" }
                    span { style: "color: {muted}; font-family: monospace; font-size: 12px;", "{age}" }
                }
            }
        }
    }
}
