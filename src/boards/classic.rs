//! Classic board - fixed-duration roll with persisted choices and history

use dioxus::prelude::*;

use crate::celebration::keyframes_css;
use crate::components::{
    ChoiceInput, ChoiceList, ConfettiOverlay, Header, HistoryPanel, ResultCard, RollButton,
    ShareButton, use_palette,
};
use crate::config::DiceConfig;
use crate::dice::DiceSession;
use crate::roller::{fresh_rng, use_roller};
use crate::storage;
use super::{COLUMN_STYLE, blob_style, page_style};

#[component]
pub fn ClassicBoard() -> Element {
    let config = use_context::<DiceConfig>();
    let palette = use_palette();
    let mut session = use_signal(|| {
        DiceSession::new(config.classic)
            .with_choices(storage::load_choices())
            .with_history(storage::load_history(config.history_capacity))
    });
    let mut roller = use_roller(session);

    // memos only fire when the value actually changes, not on every tick
    let choices = use_memo(move || session.read().choices().clone());
    let history = use_memo(move || session.read().history().cloned());
    use_effect(move || storage::save_choices(&choices.read()));
    use_effect(move || {
        if let Some(history) = history.read().as_ref() {
            storage::save_history(history);
        }
    });

    let state = session.read();
    let rolling = state.is_running();
    let has_choices = !state.choices().is_empty();
    let result = if rolling { None } else { state.result().map(str::to_string) };
    drop(state);

    let muted = palette.muted;
    let border = palette.border;
    let tool_style = format!(
        "flex: 1; padding: 8px; background: none; border: 1px solid {border}; color: {muted}; \
         border-radius: 10px; font-size: 14px; cursor: pointer;"
    );
    let keyframes = keyframes_css();
    let page = page_style(palette);
    let blobs = [
        blob_style("0", "left: 0", "rgba(99,102,241,0.3)", 0),
        blob_style("0", "right: 0", "rgba(168,85,247,0.3)", 2),
        blob_style("60%", "left: 80px", "rgba(236,72,153,0.3)", 4),
    ];

    rsx! {
        style { "{keyframes}" }
        div {
            style: "{page}",

            for blob in blobs {
                div { style: "{blob}" }
            }

            div {
                style: "{COLUMN_STYLE}",
                Header {
                    title: "\u{1F3B2} Decision Dice",
                    subtitle: "Let fate decide for you!",
                    show_back: true,
                }

                ChoiceInput { session, placeholder: "Add your choice..." }
                ChoiceList { session }

                if has_choices {
                    div {
                        style: "display: flex; gap: 8px;",
                        button {
                            style: "{tool_style}",
                            disabled: rolling,
                            onclick: move |_| session.write().shuffle_choices(&mut fresh_rng()),
                            "Shuffle"
                        }
                        button {
                            style: "{tool_style}",
                            disabled: rolling,
                            onclick: move |_| session.write().clear_choices(),
                            "Clear All"
                        }
                    }
                }

                RollButton {
                    session,
                    idle_label: "Decide For Me!",
                    rolling_label: "Deciding...",
                    empty_label: "Add some choices first!",
                    onroll: move |_| roller.roll(),
                }

                ResultCard { session, heading: "\u{1F389} The chosen one is:" }
                if let Some(result) = result {
                    ShareButton { result }
                }

                if let Some(history) = history() {
                    HistoryPanel {
                        history,
                        on_clear: move |_| session.write().clear_history(),
                    }
                }
            }

            ConfettiOverlay { celebration: roller.celebration() }
        }
    }
}
