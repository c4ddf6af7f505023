use dioxus::prelude::*;

use crate::dice::DiceSession;
use super::use_palette;

#[component]
pub fn ChoiceList(mut session: Signal<DiceSession>) -> Element {
    let palette = use_palette();
    let choices: Vec<String> = session.read().choices().iter().map(str::to_string).collect();
    let highlighted = session.read().display().map(str::to_string);

    if choices.is_empty() {
        let muted = palette.muted;
        return rsx! {
            p {
                style: "margin: 8px 0; color: {muted}; font-size: 14px; text-align: center;",
                "No choices yet."
            }
        };
    }

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; max-height: 240px; overflow-y: auto;",
            for (idx, choice) in choices.into_iter().enumerate() {
                {
                    let lit = highlighted.as_deref() == Some(choice.as_str());
                    let border = if lit { palette.accent } else { palette.border };
                    let row_style = format!(
                        "display: flex; align-items: center; justify-content: space-between; padding: 10px 14px; \
                         border: 1px solid {}; border-radius: 12px; background: {}; color: {}; \
                         animation: choice-in 0.2s ease-out; transition: border-color 0.1s;",
                        border, palette.card_bg, palette.text
                    );
                    let danger = palette.danger;
                    rsx! {
                        div {
                            key: "{idx}-{choice}",
                            style: "{row_style}",
                            span {
                                style: "flex: 1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; padding-right: 8px;",
                                "{choice}"
                            }
                            button {
                                style: "background: none; border: none; color: {danger}; font-size: 18px; cursor: pointer; line-height: 1;",
                                title: "Remove",
                                onclick: move |_| {
                                    session.write().remove_choice(idx);
                                },
                                "\u{00D7}"
                            }
                        }
                    }
                }
            }
        }
    }
}
