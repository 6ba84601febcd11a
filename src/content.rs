//! Static editorial content rendered by the page shell.

#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub number: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub runtime: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    /// Used for `data-season`, `season-{id}` and `{id}-hidden`.
    pub id: &'static str,
    pub label: &'static str,
    pub episodes: Vec<Episode>,
}

impl Season {
    pub fn panel_id(&self) -> String {
        format!("season-{}", self.id)
    }

    pub fn hidden_id(&self) -> String {
        format!("{}-hidden", self.id)
    }

    /// Episodes shown before the season is expanded.
    pub fn featured(&self) -> &[Episode] {
        let split = self.episodes.len().min(FEATURED_PER_SEASON);
        &self.episodes[..split]
    }

    /// Episodes revealed by the "See More Episodes" toggle.
    pub fn extra(&self) -> &[Episode] {
        let split = self.episodes.len().min(FEATURED_PER_SEASON);
        &self.episodes[split..]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FEATURED_PER_SEASON: usize = 3;

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Episodes", href: "#episodes" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Spotify", href: "https://open.spotify.com" },
    SocialLink { label: "Apple Podcasts", href: "https://podcasts.apple.com" },
    SocialLink { label: "YouTube", href: "https://www.youtube.com" },
    SocialLink { label: "Instagram", href: "https://www.instagram.com" },
];

pub const ABOUT_TEXT: &str = "Two friends, one microphone, and an unreasonable number of opinions. \
Every week we dig into the stories behind the stories.";

pub fn seasons() -> Vec<Season> {
    vec![
        Season {
            id: "1",
            label: "Season 1",
            episodes: vec![
                episode(1, "Pilot", "How the show started and why we kept going.", "42 min"),
                episode(2, "Origins", "Where we grew up and what shaped us.", "38 min"),
                episode(3, "The Road Trip", "Four states, one broken radio.", "51 min"),
                episode(4, "Listener Mail", "Your questions, answered honestly.", "33 min"),
                episode(5, "Finale", "Looking back on the first run.", "47 min"),
            ],
        },
        Season {
            id: "2",
            label: "Season 2",
            episodes: vec![
                episode(1, "Back Again", "What changed over the break.", "40 min"),
                episode(2, "Guest Week", "Our first in-studio guest.", "55 min"),
                episode(3, "Deep Cuts", "The stories we almost left out.", "44 min"),
                episode(4, "Live Show", "Recorded in front of a real audience.", "61 min"),
            ],
        },
    ]
}

fn episode(
    number: u32,
    title: &'static str,
    summary: &'static str,
    runtime: &'static str,
) -> Episode {
    Episode {
        number,
        title,
        summary,
        runtime,
    }
}
