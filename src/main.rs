use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod content;
mod utils;

use components::SiteView;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "KTRP Podcast" }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#1e3a8a" }
        document::Meta { name: "description", content: "KTRP Podcast: new episodes every week." }

        document::Stylesheet { href: SITE_CSS }

        Router::<SiteView> {}
    }
}
