use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
/// Textual heuristic: treat an uncaught error as audio-related when its
/// message mentions audio. Coarse; there is no structured classification.
pub fn mentions_audio(message: &str) -> bool {
    message.to_ascii_lowercase().contains("audio")
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
/// Keys that switch the page into keyboard-focus mode.
pub fn enters_keyboard_navigation(key: &str) -> bool {
    key == "Tab"
}

/// Global error listener and keyboard/mouse focus-visibility toggle.
pub fn use_safety_net(degraded: Signal<bool>) {
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        install_error_listener(degraded);
        install_focus_toggle();
    });

    #[cfg(not(target_arch = "wasm32"))]
    let _ = degraded;
}

#[cfg(target_arch = "wasm32")]
fn install_error_listener(degraded: Signal<bool>) {
    let Some(win) = window() else {
        return;
    };
    let runtime = Runtime::current();
    let mut degraded = degraded.clone();

    let error_cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let _guard = RuntimeGuard::new(runtime.clone());
        let message = event
            .dyn_ref::<web_sys::ErrorEvent>()
            .map(|err| err.message())
            .unwrap_or_default();
        warn!(%message, "script error handled gracefully");

        if mentions_audio(&message) && !*degraded.peek() {
            warn!("audio player degraded after audio-related error");
            degraded.set(true);
        }
    }) as Box<dyn FnMut(_)>);

    let _ = win.add_event_listener_with_callback("error", error_cb.as_ref().unchecked_ref());
    error_cb.forget();
}

#[cfg(target_arch = "wasm32")]
fn install_focus_toggle() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let key_cb = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if !enters_keyboard_navigation(&event.key()) {
            return;
        }
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().add_1(KEYBOARD_NAV_CLASS);
        }
    }) as Box<dyn FnMut(_)>);
    let mouse_cb = Closure::wrap(Box::new(move || {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().remove_1(KEYBOARD_NAV_CLASS);
        }
    }) as Box<dyn FnMut()>);

    let _ = document.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
    let _ =
        document.add_event_listener_with_callback("mousedown", mouse_cb.as_ref().unchecked_ref());
    key_cb.forget();
    mouse_cb.forget();
}
