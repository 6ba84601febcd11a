use super::RevealOptions;
use crate::config::SiteConfig;

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement};

#[cfg(any(target_arch = "wasm32", test))]
pub const REVEAL_SELECTOR: &str = ".about-content, .social-link, .episode-card, \
.external-link, .review-card, .sponsor-card, .contact-form";
#[cfg(target_arch = "wasm32")]
pub const STAGGER_GRID_SELECTOR: &str = ".social-links, .episodes-grid, .reviews-grid, .sponsors-grid";

#[cfg(any(target_arch = "wasm32", test))]
pub const PENDING_CLASS: &str = "animate-on-scroll";
#[cfg(any(target_arch = "wasm32", test))]
pub const VISIBLE_CLASS: &str = "visible";

pub fn reveal_options(config: &SiteConfig) -> RevealOptions {
    RevealOptions {
        threshold: config.reveal_threshold,
        root_margin: config.reveal_root_margin.clone(),
    }
}

/// `animation-delay` for the `index`-th child of a staggered grid.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{:.2}s", index as f64 * step_secs)
}

/// Mark the reveal targets and stagger grid children once the page shell
/// has rendered.
pub fn use_scroll_reveal(config: &SiteConfig) {
    let options = reveal_options(config);
    let step_secs = config.stagger_step_secs;

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let observed =
            super::reveal_on_intersect(REVEAL_SELECTOR, PENDING_CLASS, VISIBLE_CLASS, &options);
        dioxus::logger::tracing::debug!(?observed, "scroll reveal installed");
        stagger_grid_children(step_secs);
    });

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (options, step_secs);
}

#[cfg(target_arch = "wasm32")]
fn stagger_grid_children(step_secs: f64) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(grids) = document.query_selector_all(STAGGER_GRID_SELECTOR) else {
        return;
    };

    for grid_index in 0..grids.length() {
        let Some(grid) = grids
            .item(grid_index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let children = grid.children();
        for index in 0..children.length() {
            if let Some(child) = children
                .item(index)
                .and_then(|child| child.dyn_into::<HtmlElement>().ok())
            {
                let _ = child
                    .style()
                    .set_property("animation-delay", &stagger_delay(index as usize, step_secs));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_steps_by_fifty_milliseconds() {
        assert_eq!(stagger_delay(0, 0.05), "0.00s");
        assert_eq!(stagger_delay(1, 0.05), "0.05s");
        assert_eq!(stagger_delay(3, 0.05), "0.15s");
    }

    #[test]
    fn reveal_uses_configured_threshold_and_margin() {
        let options = reveal_options(&SiteConfig::default());
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -30px 0px");
    }

    #[test]
    fn reveal_selector_covers_every_animated_class() {
        for class in [".about-content", ".episode-card", ".contact-form", ".sponsor-card"] {
            assert!(REVEAL_SELECTOR.contains(class));
        }
    }

    #[test]
    fn toggled_classes_exist_in_the_stylesheet() {
        let css = include_str!("../../../assets/styling/site.css");
        assert!(css.contains(&format!(".{PENDING_CLASS} {{")));
        assert!(css.contains(&format!(".{PENDING_CLASS}.{VISIBLE_CLASS} {{")));
    }
}
