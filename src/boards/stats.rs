//! Statistics over the persisted roll history

use dioxus::prelude::*;

use crate::components::{Header, HistoryPanel, card_style, relative_age, use_palette};
use crate::config::DiceConfig;
use crate::dice::RollHistory;
use crate::storage;
use super::{COLUMN_STYLE, page_style};

/// Rows for the tally chart: (choice, count, bar width relative to the leader, percent of all rolls)
pub fn tally_rows(history: &RollHistory) -> Vec<(String, usize, f32, f32)> {
    let tally = history.tally();
    let top = tally.first().map(|(_, n)| *n).unwrap_or(0).max(1) as f32;
    tally
        .into_iter()
        .map(|(name, n)| {
            let share = history.share_of(&name) * 100.0;
            (name, n, n as f32 / top * 100.0, share)
        })
        .collect()
}

#[component]
pub fn StatsBoard() -> Element {
    let config = use_context::<DiceConfig>();
    let palette = use_palette();
    let mut history = use_signal(|| storage::load_history(config.history_capacity));

    let page = page_style(palette);
    let card = card_style(palette);
    let muted = palette.muted;
    let accent = palette.accent;
    let border = palette.border;

    let snapshot = history.read().clone();
    let rows = tally_rows(&snapshot);
    let total = snapshot.len();
    let leader = rows.first().map(|(name, ..)| name.clone());
    let last = snapshot
        .latest()
        .map(|r| (r.result.clone(), relative_age(js_sys::Date::now(), r.timestamp_ms)));

    rsx! {
        div {
            style: "{page}",
            div {
                style: "{COLUMN_STYLE}",
                Header {
                    title: "\u{1F4CA} Statistics",
                    subtitle: "What fate picked lately",
                    show_back: true,
                }

                if rows.is_empty() {
                    div {
                        style: "{card} text-align: center; color: {muted};",
                        "No decisions yet. Roll the dice first!"
                    }
                } else {
                    div {
                        style: "{card}",
                        p {
                            style: "margin: 0 0 12px 0; color: {muted}; font-size: 14px;",
                            "Last {total} decisions"
                            if let Some(name) = leader {
                                ", most often: "
                                span { style: "font-weight: 700;", "{name}" }
                            }
                        }
                        if let Some((result, age)) = last {
                            p {
                                style: "margin: 0 0 12px 0; color: {muted}; font-size: 14px;",
                                "Last pick: "
                                span { style: "font-weight: 700;", "{result}" }
                                " ({age})"
                            }
                        }
                        for (name, count, width, share) in rows {
                            div {
                                key: "{name}",
                                style: "margin-bottom: 10px;",
                                div {
                                    style: "display: flex; justify-content: space-between; font-size: 14px; margin-bottom: 4px;",
                                    span { "{name}" }
                                    span {
                                        style: "color: {muted}; font-family: monospace;",
                                        "{count} ({share:.0}%)"
                                    }
                                }
                                div {
                                    style: "height: 8px; background: {border}; border-radius: 4px; overflow: hidden;",
                                    div { style: "height: 100%; width: {width:.0}%; background: {accent};" }
                                }
                            }
                        }
                    }

                    HistoryPanel {
                        history: snapshot,
                        on_clear: move |_| {
                            history.write().clear();
                            storage::save_history(&history.read());
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_leader() {
        let mut history = RollHistory::default();
        for name in ["a", "a", "a", "a", "b", "b", "c"] {
            history.record(name, 0.0);
        }
        let rows = tally_rows(&history);
        assert_eq!((rows[0].0.as_str(), rows[0].1, rows[0].2), ("a", 4, 100.0));
        assert_eq!((rows[1].0.as_str(), rows[1].1, rows[1].2), ("b", 2, 50.0));
        assert_eq!((rows[2].0.as_str(), rows[2].1, rows[2].2), ("c", 1, 25.0));
        assert!((rows[0].3 - 400.0 / 7.0).abs() < 1e-3);
    }

    #[test]
    fn empty_history_has_no_rows() {
        assert!(tally_rows(&RollHistory::default()).is_empty());
    }
}
