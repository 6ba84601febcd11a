use crate::components::{AudioPlayer, ContactForm, EpisodeSeasons};
use crate::content::{ABOUT_TEXT, SOCIAL_LINKS};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                img {
                    class: "hero-logo",
                    src: "images/ktrplogo.jpg",
                    alt: "KTRP Podcast logo",
                }
                h1 { class: "hero-title", "KTRP Podcast" }
                p { class: "hero-tagline", "Press play on our welcome message." }
                AudioPlayer {}
            }
        }
        section { id: "about", class: "about",
            div { class: "about-content",
                h2 { class: "section-title", "About the Show" }
                p { "{ABOUT_TEXT}" }
                img {
                    src: "images/hostspicture.jpg",
                    alt: "The hosts",
                    "loading": "lazy",
                }
            }
            div { class: "social-links",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.href}",
                        class: "social-link",
                        href: link.href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{link.label}"
                    }
                }
            }
        }
        EpisodeSeasons {}
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Get in Touch" }
            ContactForm {}
        }
    }
}
