use dioxus::prelude::*;

use crate::dice::{DiceSession, Phase};
use super::{card_style, use_palette};

/// Shows the rolling value while a roll runs and the committed value after
#[component]
pub fn ResultCard(session: Signal<DiceSession>, heading: String) -> Element {
    let palette = use_palette();
    let state = session.read();
    let rolling = state.phase() == Phase::Running;
    let shown = match state.phase() {
        Phase::Running => state.display(),
        Phase::Idle | Phase::Settled => state.result(),
    }
    .map(str::to_string);
    drop(state);

    let Some(value) = shown else {
        return rsx! {};
    };

    let card = card_style(palette);
    let muted = palette.muted;
    // re-keying on value restarts the pop animation for each committed result
    let animation = if rolling {
        "opacity: 0.85;"
    } else {
        "animation: result-pop 0.3s ease-out, result-float 3s ease-in-out 0.3s infinite;"
    };
    let caption = if rolling { "Rolling..." } else { heading.as_str() };

    rsx! {
        div {
            key: "{rolling}-{value}",
            style: "{card} text-align: center; margin-top: 24px; {animation}",
            div {
                style: "color: {muted}; font-size: 16px; margin-bottom: 6px;",
                "{caption}"
            }
            div {
                id: "result",
                style: "font-size: 28px; font-weight: 700; word-break: break-word;",
                "{value}"
            }
        }
    }
}
