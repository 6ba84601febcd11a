//! Page-wide browser behaviours installed once by the site shell: scroll
//! reveal, lazy images, the navbar scroll class, in-page smooth scrolling and
//! the global error / focus listeners.
//!
//! Everything that touches the browser directly is wasm-only; the decisions
//! those listeners make are plain functions tested on the host.

mod performance;
mod safety_net;
mod scroll_reveal;
mod smooth_scroll;

pub use performance::*;
pub use safety_net::*;
pub use scroll_reveal::*;
pub use smooth_scroll::*;

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Whether the navbar should carry its `scrolled` class.
#[derive(Clone, Copy)]
pub struct NavbarScrolled(pub Signal<bool>);

/// Set by the global error listener when an audio-related script error
/// happens; the player then renders its fallback text.
#[derive(Clone, Copy)]
pub struct AudioDegraded(pub Signal<bool>);

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
/// Viewport-intersection options for a reveal-style observer.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn has_intersection_observer() -> bool {
    window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Tag every element matching `selector` with `pending_class` and add
/// `revealed_class` the first time it intersects the viewport. Revealed
/// elements are unobserved, so the class is never taken away.
#[cfg(target_arch = "wasm32")]
fn reveal_on_intersect(
    selector: &str,
    pending_class: &str,
    revealed_class: &'static str,
    options: &RevealOptions,
) -> Option<usize> {
    if !has_intersection_observer() {
        dioxus::logger::tracing::debug!(selector, "IntersectionObserver unavailable");
        return None;
    }
    let document = window()?.document()?;

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(revealed_class);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    callback.forget();

    let nodes = document.query_selector_all(selector).ok()?;
    let mut observed = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let _ = element.class_list().add_1(pending_class);
        observer.observe(&element);
        observed += 1;
    }
    Some(observed)
}
