use dioxus::prelude::*;

use crate::celebration::Celebration;

/// Full-viewport overlay that rains one confetti burst; ignores pointer events
#[component]
pub fn ConfettiOverlay(celebration: Option<Celebration>) -> Element {
    let Some(burst) = celebration else {
        return rsx! {};
    };
    let burst_id = burst.id;
    let pieces: Vec<String> = burst.pieces.iter().map(|p| p.to_css()).collect();

    rsx! {
        div {
            key: "{burst_id}",
            style: "position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: 50;",
            for (i, css) in pieces.into_iter().enumerate() {
                div { key: "{i}", style: "{css}" }
            }
        }
    }
}
