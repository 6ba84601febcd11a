use crate::config::SiteConfig;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::{reveal_on_intersect, RevealOptions};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
/// Coalesces bursts of events into at most one pending animation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    ticking: bool,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl FrameThrottle {
    /// Returns `true` when the caller should schedule a frame now.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// The scheduled frame ran.
    pub fn complete(&mut self) {
        self.ticking = false;
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn navbar_is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Lazy image reveal plus the frame-throttled navbar `scrolled` flag.
pub fn use_performance_helpers(config: &SiteConfig, scrolled: Signal<bool>) {
    let threshold_px = config.navbar_scroll_threshold_px;

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let _ = reveal_on_intersect(LAZY_IMAGE_SELECTOR, "lazy-load", "loaded", &RevealOptions::default());
        install_navbar_scroll(threshold_px, scrolled);
    });

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (threshold_px, scrolled);
}

#[cfg(target_arch = "wasm32")]
fn install_navbar_scroll(threshold_px: f64, scrolled: Signal<bool>) {
    let Some(win) = window() else {
        return;
    };
    let runtime = Runtime::current();
    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));

    let frame_cb = {
        let throttle = throttle.clone();
        let mut scrolled = scrolled.clone();
        Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let next = navbar_is_scrolled(scroll_y, threshold_px);
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
            throttle.borrow_mut().complete();
        }) as Box<dyn FnMut()>)
    };
    let frame_fn: js_sys::Function = frame_cb.as_ref().unchecked_ref::<js_sys::Function>().clone();
    frame_cb.forget();

    let scroll_cb = Closure::wrap(Box::new(move || {
        if !throttle.borrow_mut().request() {
            return;
        }
        let scheduled = window().map(|w| w.request_animation_frame(&frame_fn).is_ok());
        if scheduled != Some(true) {
            throttle.borrow_mut().complete();
        }
    }) as Box<dyn FnMut()>);

    let _ = win.add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
    scroll_cb.forget();
}

/// `<link rel="preload" as="image">` for every critical image.
#[component]
pub fn PreloadHints() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        for src in config.critical_images.iter() {
            document::Link { key: "{src}", rel: "preload", r#as: "image", href: "{src}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_per_burst_of_scroll_events() {
        let mut throttle = FrameThrottle::default();
        let scheduled = (0..25).filter(|_| throttle.request()).count();
        assert_eq!(scheduled, 1);

        throttle.complete();
        assert!(throttle.request());
        assert!(!throttle.request());
    }

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_is_scrolled(0.0, 50.0));
        assert!(!navbar_is_scrolled(50.0, 50.0));
        assert!(navbar_is_scrolled(50.5, 50.0));
    }
}
