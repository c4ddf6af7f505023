//! Shared dice board widgets
//!
//! Every widget reads the active theme from the `Signal<Theme>` context.

mod choice_input;
mod choice_list;
mod confetti;
mod header;
mod history_panel;
mod result_card;
mod roll_button;
mod share_button;

pub use choice_input::ChoiceInput;
pub use choice_list::ChoiceList;
pub use confetti::ConfettiOverlay;
pub use header::Header;
pub use history_panel::{HistoryPanel, relative_age};
pub use result_card::ResultCard;
pub use roll_button::RollButton;
pub use share_button::ShareButton;

use dioxus::prelude::*;

use crate::theme::{Palette, Theme};

pub fn use_palette() -> &'static Palette {
    let theme = use_context::<Signal<Theme>>();
    theme().palette()
}

pub fn card_style(palette: &Palette) -> String {
    format!(
        "background: {}; border: 1px solid {}; border-radius: 16px; padding: 20px; \
         backdrop-filter: blur(8px); box-shadow: 0 8px 32px rgba(0,0,0,0.15); color: {};",
        palette.card_bg, palette.border, palette.text
    )
}
