use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::share::share_result;
use super::use_palette;

const NOTICE_MS: u32 = 2000;

/// Shares `result`; the outcome flashes next to the button for a moment
#[component]
pub fn ShareButton(result: String) -> Element {
    let palette = use_palette();
    let mut notice = use_signal(|| None::<String>);
    let mut notices = use_signal(|| 0u32);

    let accent = palette.accent;
    let muted = palette.muted;
    let border = palette.border;

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; gap: 10px; margin-top: 12px;",
            button {
                style: "background: none; border: 1px solid {border}; color: {accent}; border-radius: 9999px; padding: 6px 16px; font-size: 14px; font-weight: 600; cursor: pointer;",
                onclick: move |_| {
                    let result = result.clone();
                    spawn(async move {
                        let message = match share_result(&result).await {
                            Ok(outcome) => outcome.message().to_string(),
                            Err(err) => {
                                warn!("share failed: {}", err);
                                "Couldn't share, try copying by hand.".to_string()
                            }
                        };
                        let n = notices() + 1;
                        notices.set(n);
                        notice.set(Some(message));
                        TimeoutFuture::new(NOTICE_MS).await;
                        if notices() == n {
                            notice.set(None);
                        }
                    });
                },
                "Share"
            }
            if let Some(message) = notice() {
                span { style: "color: {muted}; font-size: 13px;", "{message}" }
            }
        }
    }
}
