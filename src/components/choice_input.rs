use dioxus::prelude::*;

use crate::dice::DiceSession;
use super::use_palette;

/// Text field that appends to the session's choices on Enter (and on the
/// optional Add button, which stays disabled while the field is blank)
#[component]
pub fn ChoiceInput(
    mut session: Signal<DiceSession>,
    placeholder: String,
    #[props(default)] with_button: bool,
) -> Element {
    let palette = use_palette();
    let mut text = use_signal(String::new);

    let mut submit = move || {
        let value = text.read().clone();
        if session.write().add_choice(&value) {
            text.set(String::new());
        }
    };

    let blank = text.read().trim().is_empty();
    let button_bg = if blank { palette.disabled } else { palette.accent };
    let button_cursor = if blank { "not-allowed" } else { "pointer" };
    let input_style = format!(
        "flex: 1; padding: 12px 16px; border: 1px solid {}; border-radius: 12px; font-size: 15px; \
         font-family: system-ui, sans-serif; outline: none; background: {}; color: {}; box-sizing: border-box;",
        palette.border, palette.input_bg, palette.text
    );

    rsx! {
        div {
            style: "display: flex; gap: 8px; width: 100%;",
            input {
                r#type: "text",
                style: "{input_style}",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |e: Event<FormData>| text.set(e.value()),
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        submit();
                    }
                },
            }
            if with_button {
                button {
                    style: "padding: 0 20px; background: {button_bg}; color: white; border: none; border-radius: 12px; font-size: 15px; font-weight: 600; cursor: {button_cursor}; font-family: system-ui, sans-serif;",
                    disabled: blank,
                    onclick: move |_| submit(),
                    "Add"
                }
            }
        }
    }
}
