//! Custom dice board - tick-count roll over an in-memory option list

use dioxus::prelude::*;

use crate::celebration::keyframes_css;
use crate::components::{
    ChoiceInput, ChoiceList, ConfettiOverlay, Header, ResultCard, RollButton, card_style,
    use_palette,
};
use crate::config::DiceConfig;
use crate::dice::DiceSession;
use crate::roller::use_roller;
use super::{COLUMN_STYLE, page_style};

#[component]
pub fn CustomBoard() -> Element {
    let config = use_context::<DiceConfig>();
    let palette = use_palette();
    let session = use_signal(|| DiceSession::new(config.custom));
    let mut roller = use_roller(session);

    let keyframes = keyframes_css();
    let page = page_style(palette);
    let card = card_style(palette);

    rsx! {
        style { "{keyframes}" }
        div {
            style: "{page}",
            div {
                style: "{COLUMN_STYLE}",
                Header {
                    title: "\u{1F3B2} Custom Decision Dice",
                    subtitle: "Roll the dice & let the magic happen! \u{2728}",
                    show_back: true,
                }

                div {
                    style: "{card} display: flex; flex-direction: column; gap: 12px;",
                    ChoiceInput { session, placeholder: "Enter your option...", with_button: true }
                    ChoiceList { session }
                }

                RollButton {
                    session,
                    idle_label: "Roll the Dice!",
                    rolling_label: "Rolling...",
                    empty_label: "Add options to roll!",
                    onroll: move |_| roller.roll(),
                }

                ResultCard { session, heading: "\u{1F389} The chosen one is:" }
            }

            ConfettiOverlay { celebration: roller.celebration() }
        }
    }
}
