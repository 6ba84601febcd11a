use serde::{Deserialize, Serialize};

/// Tunables shared by the page behaviours.
/// Provided once through context by the site shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Height of the fixed header subtracted from smooth-scroll targets.
    pub header_offset_px: f64,
    pub navbar_scroll_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub stagger_step_secs: f64,
    pub banner_lifetime_ms: u64,
    pub tab_transition_delay_ms: u64,
    pub initial_volume: f64,
    pub critical_images: Vec<String>,
    /// Form backend the contact form posts to.
    pub contact_action: String,
    pub welcome_audio_src: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 70.0,
            navbar_scroll_threshold_px: 50.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -30px 0px".to_string(),
            stagger_step_secs: 0.05,
            banner_lifetime_ms: 5000,
            tab_transition_delay_ms: 50,
            initial_volume: 0.5,
            critical_images: vec![
                "images/ktrplogo.jpg".to_string(),
                "images/hostspicture.jpg".to_string(),
                "images/podcastbanner.jpg".to_string(),
            ],
            contact_action: "https://formspree.io/f/ktrp-contact".to_string(),
            welcome_audio_src: "audio/welcome.mp3".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.header_offset_px, 70.0);
        assert_eq!(config.banner_lifetime_ms, 5000);
        assert_eq!(config.critical_images.len(), 3);
        assert_eq!(config.initial_volume, 0.5);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "header_offset_px": 90.0 }"#).expect("valid config");
        assert_eq!(config.header_offset_px, 90.0);
        assert_eq!(config.navbar_scroll_threshold_px, 50.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -30px 0px");
    }
}
