use dioxus::prelude::*;

use crate::celebration::spinning_die_css;
use crate::dice::DiceSession;
use super::use_palette;

/// Trigger control; disabled while the set is empty or a roll is running
#[component]
pub fn RollButton(
    session: Signal<DiceSession>,
    idle_label: String,
    rolling_label: String,
    empty_label: String,
    onroll: EventHandler<()>,
) -> Element {
    let palette = use_palette();
    let state = session.read();
    let rolling = state.is_running();
    let empty = state.choices().is_empty();
    let disabled = !state.can_roll();
    let progress = state.progress();
    drop(state);

    let label = if rolling {
        rolling_label
    } else if empty {
        empty_label
    } else {
        idle_label
    };
    let bg = if disabled { palette.disabled } else { palette.success };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    let die_style = spinning_die_css(rolling);
    let bar_track = format!(
        "height: 4px; margin-top: 6px; background: {}; border-radius: 2px; overflow: hidden;",
        palette.border
    );
    let bar_fill = format!(
        "height: 100%; width: {:.0}%; background: {}; transition: width 0.1s linear;",
        progress * 100.0,
        palette.accent
    );

    rsx! {
        div {
            style: "width: 100%;",
            button {
                style: "width: 100%; padding: 16px; background: {bg}; color: white; border: none; border-radius: 12px; font-size: 17px; font-weight: 700; font-family: system-ui, sans-serif; cursor: {cursor}; display: flex; align-items: center; justify-content: center; gap: 8px; box-shadow: 0 4px 14px rgba(0,0,0,0.2);",
                disabled: disabled,
                onclick: move |_| onroll.call(()),
                span { style: "{die_style} font-size: 22px;", "\u{1F3B2}" }
                span { "{label}" }
            }
            if rolling {
                div {
                    style: "{bar_track}",
                    div {
                        style: "{bar_fill}",
                    }
                }
            }
        }
    }
}
