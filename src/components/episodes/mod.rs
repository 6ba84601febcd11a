//! Episode seasons: tab switching between seasons and a per-season
//! "see more" expander.

mod expander;
mod tabs;

pub use expander::*;
pub use tabs::*;

use crate::config::SiteConfig;
use crate::content::{seasons, Episode, Season};
use crate::utils::delay_ms;
use dioxus::prelude::*;

#[component]
pub fn EpisodeSeasons() -> Element {
    let config = use_context::<SiteConfig>();
    let seasons = use_hook(seasons);
    let tabs = {
        let ids: Vec<&'static str> = seasons.iter().map(|season| season.id).collect();
        use_signal(move || TabGroup::new(ids))
    };
    let transition_delay_ms = config.tab_transition_delay_ms;

    rsx! {
        section { id: "episodes", class: "episodes",
            h2 { class: "section-title", "Episodes" }
            div { class: "episode-tabs", role: "tablist",
                for season in seasons.iter() {
                    button {
                        key: "{season.id}",
                        class: if tabs.read().is_active(season.id) { "tab-btn active" } else { "tab-btn" },
                        "data-season": season.id,
                        role: "tab",
                        onclick: {
                            let id = season.id;
                            let mut tabs = tabs.clone();
                            move |_| {
                                let Some(token) = tabs.write().activate(id) else {
                                    return;
                                };
                                spawn(async move {
                                    delay_ms(transition_delay_ms).await;
                                    tabs.write().settle(token);
                                });
                            }
                        },
                        "{season.label}"
                    }
                }
            }
            for season in seasons.iter() {
                div {
                    key: "{season.id}",
                    id: season.panel_id(),
                    class: if tabs.read().is_active(season.id) { "season-content active" } else { "season-content" },
                    style: tabs.read().panel_style(season.id),
                    div { class: "episodes-grid",
                        for episode in season.featured() {
                            EpisodeCard { key: "{episode.number}", episode: episode.clone() }
                        }
                    }
                    if !season.extra().is_empty() {
                        SeasonExpander { season: season.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn SeasonExpander(season: Season) -> Element {
    let mut expander = use_signal(ExpanderState::default);
    let state = expander();

    rsx! {
        div { id: season.hidden_id(), class: state.container_class(),
            div { class: "episodes-grid",
                for episode in season.extra() {
                    EpisodeCard { key: "{episode.number}", episode: episode.clone() }
                }
            }
        }
        button {
            class: "see-more-btn",
            onclick: move |_| expander.write().toggle(),
            "{state.label()}"
        }
    }
}

#[component]
fn EpisodeCard(episode: Episode) -> Element {
    rsx! {
        article { class: "episode-card",
            span { class: "episode-number", "Episode {episode.number}" }
            h3 { class: "episode-title", "{episode.title}" }
            p { class: "episode-summary", "{episode.summary}" }
            span { class: "episode-runtime", "{episode.runtime}" }
        }
    }
}
