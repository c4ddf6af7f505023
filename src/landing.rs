use dioxus::prelude::*;
use crate::Route;
use crate::celebration::keyframes_css;
use crate::components::{Header, card_style, use_palette};

#[component]
pub fn Landing() -> Element {
    let palette = use_palette();
    let keyframes = keyframes_css();
    let card = card_style(palette);
    let page_bg = palette.page_bg;
    let text = palette.text;
    let muted = palette.muted;
    let link = format!("{card} display: block; text-decoration: none; transition: transform 0.2s;");

    rsx! {
        style { "{keyframes}" }
        div {
            style: "min-height: 100vh; background: {page_bg}; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif; color: {text}; box-sizing: border-box;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px; width: 100%;",
                Header {
                    title: "\u{1F3B2} Decision Dice",
                    subtitle: "Can't make up your mind? Add your options and let fate pick one.",
                }
            }

            // Mode grid
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 20px; max-width: 800px; width: 100%; margin-top: 40px;",

                Link {
                    to: Route::ClassicBoard {},
                    style: "{link}",
                    h3 { style: "font-size: 18px; margin: 0 0 8px 0;", "Decide \u{2192}" }
                    p {
                        style: "color: {muted}; font-size: 14px; margin: 0; line-height: 1.5;",
                        "Your choices and recent picks are remembered between visits."
                    }
                }

                Link {
                    to: Route::CustomBoard {},
                    style: "{link}",
                    h3 { style: "font-size: 18px; margin: 0 0 8px 0;", "Quick Roll \u{2192}" }
                    p {
                        style: "color: {muted}; font-size: 14px; margin: 0; line-height: 1.5;",
                        "A throwaway list for one-off decisions. Nothing is saved."
                    }
                }

                Link {
                    to: Route::StatsBoard {},
                    style: "{link}",
                    h3 { style: "font-size: 18px; margin: 0 0 8px 0;", "Statistics \u{2192}" }
                    p {
                        style: "color: {muted}; font-size: 14px; margin: 0; line-height: 1.5;",
                        "See which options fate has favored lately."
                    }
                }
            }

            // Footer
            p {
                style: "color: {muted}; font-size: 13px; margin-top: 64px;",
                "Let fate decide for you!"
            }
        }
    }
}
