use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::Route;
use crate::theme::Theme;
use super::use_palette;

/// Page header: back link, title, subtitle and the theme toggle
#[component]
pub fn Header(title: String, subtitle: String, #[props(default)] show_back: bool) -> Element {
    let palette = use_palette();
    let mut theme = use_context::<Signal<Theme>>();
    let icon = theme().toggle_icon();
    let text = palette.text;
    let muted = palette.muted;
    let border = palette.border;

    rsx! {
        div {
            style: "width: 100%; margin-bottom: 24px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                if show_back {
                    Link {
                        to: Route::Landing {},
                        style: "color: {muted}; text-decoration: none; font-size: 14px;",
                        "\u{2190} Home"
                    }
                } else {
                    span {}
                }
                button {
                    style: "background: none; border: 1px solid {border}; border-radius: 9999px; padding: 6px 10px; font-size: 16px; cursor: pointer;",
                    title: "Toggle theme",
                    onclick: move |_| {
                        let next = theme().toggle();
                        info!(theme = %next, "theme toggled");
                        theme.set(next);
                    },
                    "{icon}"
                }
            }
            div {
                style: "text-align: center;",
                h1 {
                    style: "font-size: 40px; font-weight: 700; color: {text}; margin: 0 0 8px 0; letter-spacing: -1px;",
                    "{title}"
                }
                p {
                    style: "color: {muted}; font-size: 17px; margin: 0;",
                    "{subtitle}"
                }
            }
        }
    }
}
