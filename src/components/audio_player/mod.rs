//! Welcome-message player: play/pause, time display, click and drag seeking,
//! volume. State lives in `PlayerState`; the element is reached through
//! `MediaElement` so side effects stay out of the render path.

mod media;
mod state;

pub use media::*;
pub use state::*;

use crate::components::{AudioDegraded, Icon};
use crate::config::SiteConfig;
use crate::utils::percent;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[component]
pub fn AudioPlayer() -> Element {
    let config = use_context::<SiteConfig>();
    let degraded = use_context::<AudioDegraded>().0;
    let player = use_signal(|| PlayerState::new(config.initial_volume));

    // Apply the starting volume and pick up metadata that loaded before mount.
    {
        let mut player = player.clone();
        use_effect(move || {
            let Some(audio) = welcome_audio() else {
                return;
            };
            audio.set_volume(player.peek().volume());
            let duration = audio.duration();
            if duration.is_finite() {
                player.write().metadata_loaded(duration);
            }
        });
    }

    // Drag moves are tracked on the whole document, not just the track.
    #[cfg(target_arch = "wasm32")]
    {
        let player = player.clone();
        use_effect(move || install_drag_listeners(player));
    }

    if degraded() {
        return rsx! {
            div { class: "custom-audio-player",
                p { class: "audio-fallback", "Audio player temporarily unavailable" }
            }
        };
    }

    let on_toggle = {
        let mut player = player.clone();
        move |_: MouseEvent| {
            let Some(audio) = welcome_audio() else {
                return;
            };
            let command = player.write().toggle();
            match command {
                PlayCommand::Pause => audio.pause(),
                PlayCommand::Play => {
                    spawn(async move {
                        if start_playback(&audio).await.is_err() {
                            player.write().playback_rejected();
                        }
                    });
                }
            }
        }
    };

    let on_track_click = {
        let mut player = player.clone();
        move |evt: MouseEvent| {
            let Some(track) = progress_track_rect() else {
                return;
            };
            let pointer_x = evt.client_coordinates().x;
            if let Some(time) = player.write().seek_at(pointer_x, track) {
                if let Some(audio) = welcome_audio() {
                    audio.seek(time);
                }
            }
        }
    };

    let on_volume = {
        let mut player = player.clone();
        move |evt: FormEvent| {
            if let Ok(value) = evt.value().parse::<f64>() {
                let volume = player.write().set_volume_from_slider(value);
                if let Some(audio) = welcome_audio() {
                    audio.set_volume(volume);
                }
            }
        }
    };

    let mut player_for_media = player.clone();
    let state = player.read().clone();
    let progress = percent(state.progress_ratio());
    let slider_value = (state.volume() * 100.0).round();

    rsx! {
        div { class: "custom-audio-player",
            audio {
                id: WELCOME_AUDIO_ID,
                src: "{config.welcome_audio_src}",
                preload: "metadata",
                onloadedmetadata: move |_| {
                    if let Some(audio) = welcome_audio() {
                        player_for_media.write().metadata_loaded(audio.duration());
                    }
                },
                ontimeupdate: move |_| {
                    if player_for_media.peek().is_dragging() {
                        return;
                    }
                    if let Some(audio) = welcome_audio() {
                        player_for_media.write().time_updated(audio.current_time());
                    }
                },
                onended: move |_| player_for_media.write().ended(),
            }
            button {
                id: "playPauseBtn",
                class: if state.is_unavailable() { "play-pause-btn unavailable" } else { "play-pause-btn" },
                aria_label: state.button_label(),
                onclick: on_toggle,
                Icon { name: state.button_icon().to_string(), class: "player-icon".to_string() }
            }
            div { class: "player-timeline",
                span { id: "currentTime", class: "time", "{state.elapsed_label()}" }
                div {
                    id: PROGRESS_TRACK_ID,
                    class: "progress-container",
                    onclick: on_track_click,
                    div { id: "progressBar", class: "progress-bar", style: "width: {progress}" }
                    div {
                        id: "progressHandle",
                        class: "progress-handle",
                        style: "left: {progress}",
                        onmousedown: move |evt: MouseEvent| {
                            evt.prevent_default();
                            player_for_media.write().begin_drag();
                        },
                        ontouchstart: move |_| player_for_media.write().begin_drag(),
                    }
                }
                span { id: "duration", class: "time", "{state.duration_label()}" }
            }
            div { class: "volume-control",
                Icon { name: "volume".to_string(), class: "volume-icon".to_string() }
                input {
                    id: "volumeSlider",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{slider_value}",
                    aria_label: "Volume",
                    oninput: on_volume,
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn pointer_client_x(event: &web_sys::Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
        return Some(mouse.client_x() as f64);
    }
    let touch = event.dyn_ref::<web_sys::TouchEvent>()?;
    touch.touches().get(0).map(|t| t.client_x() as f64)
}

#[cfg(target_arch = "wasm32")]
fn install_drag_listeners(player: Signal<PlayerState>) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let runtime = Runtime::current();

    let move_cb = {
        let mut player = player.clone();
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if !player.peek().is_dragging() {
                return;
            }
            let (Some(pointer_x), Some(track)) = (pointer_client_x(&event), progress_track_rect())
            else {
                return;
            };
            if let Some(time) = player.write().drag_to(pointer_x, track) {
                if let Some(audio) = welcome_audio() {
                    audio.seek(time);
                }
            }
        }) as Box<dyn FnMut(_)>)
    };
    let end_cb = {
        let mut player = player.clone();
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if player.peek().is_dragging() {
                player.write().end_drag();
            }
        }) as Box<dyn FnMut(_)>)
    };

    for name in ["mousemove", "touchmove"] {
        let _ = document.add_event_listener_with_callback(name, move_cb.as_ref().unchecked_ref());
    }
    for name in ["mouseup", "touchend", "touchcancel"] {
        let _ = document.add_event_listener_with_callback(name, end_cb.as_ref().unchecked_ref());
    }

    move_cb.forget();
    end_cb.forget();
}
