use crate::config::SiteConfig;

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, ScrollBehavior, ScrollToOptions};

#[cfg(target_arch = "wasm32")]
const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
/// Selector for an in-page `href`, or `None` for a bare `#`.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_target_top(target_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    target_top + page_offset - header_offset
}

/// Intercept same-page anchor clicks and scroll there smoothly.
pub fn use_smooth_scroll(config: &SiteConfig) {
    let header_offset = config.header_offset_px;

    #[cfg(target_arch = "wasm32")]
    use_effect(move || install_smooth_scroll(header_offset));

    #[cfg(not(target_arch = "wasm32"))]
    let _ = header_offset;
}

#[cfg(target_arch = "wasm32")]
fn install_smooth_scroll(header_offset: f64) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let click_cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(anchor) = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(IN_PAGE_ANCHOR).ok().flatten())
        else {
            return;
        };
        event.prevent_default();

        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(selector) = anchor_selector(&href) else {
            return;
        };
        let Some(win) = window() else {
            return;
        };
        let Some(target) = win
            .document()
            .and_then(|doc| doc.query_selector(selector).ok().flatten())
        else {
            return;
        };

        let top = scroll_target_top(
            target.get_bounding_client_rect().top(),
            win.page_y_offset().unwrap_or(0.0),
            header_offset,
        );
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }) as Box<dyn FnMut(_)>);

    let _ = document.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
    click_cb.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_subtracts_header() {
        assert_eq!(scroll_target_top(400.0, 1200.0, 70.0), 1530.0);
        assert_eq!(scroll_target_top(-300.0, 1200.0, 70.0), 830.0);
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector(""), None);
        assert_eq!(anchor_selector("#episodes"), Some("#episodes"));
        assert_eq!(anchor_selector("https://example.com/#x"), None);
    }
}
