mod boards;
mod celebration;
mod components;
mod config;
mod dice;
mod error;
mod landing;
mod roller;
mod share;
mod storage;
mod theme;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use boards::{ClassicBoard, CustomBoard, StatsBoard};
use config::DiceConfig;
use landing::Landing;
use theme::Theme;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/decide")]
    ClassicBoard {},
    #[route("/custom")]
    CustomBoard {},
    #[route("/stats")]
    StatsBoard {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    use_context_provider(DiceConfig::from_location);
    let theme = use_context_provider(|| Signal::new(storage::load_theme()));

    // keep the document attribute and the stored preference in step with the toggle
    use_effect(move || {
        let theme: Theme = theme();
        if let Err(err) = theme::apply(theme) {
            warn!("{}", err);
        }
        storage::save_theme(theme);
    });

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
