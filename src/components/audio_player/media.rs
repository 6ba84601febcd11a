// Media element seam: the player logic talks to this trait, the browser build
// backs it with the page's <audio> element.
use super::state::TrackRect;
use dioxus::logger::tracing::warn;
use futures_util::future::LocalBoxFuture;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use futures_util::future::FutureExt;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, HtmlMediaElement};

pub const WELCOME_AUDIO_ID: &str = "welcomeAudio";
pub const PROGRESS_TRACK_ID: &str = "progressContainer";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),

    #[error("no media element available")]
    Unsupported,
}

pub trait MediaElement {
    /// Start playback. Resolves once the browser accepts or refuses.
    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlaybackError>>;
    fn pause(&self);
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    fn seek(&self, seconds: f64);
    fn set_volume(&self, volume: f64);
}

/// Start playback and log a refusal. The caller decides how to show it.
pub async fn start_playback<M: MediaElement + ?Sized>(media: &M) -> Result<(), PlaybackError> {
    let result = media.play().await;
    if let Err(err) = &result {
        warn!(%err, "audio play failed");
    }
    result
}

#[cfg(target_arch = "wasm32")]
pub type WelcomeAudio = HtmlAudioElement;

#[cfg(target_arch = "wasm32")]
fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

#[cfg(target_arch = "wasm32")]
impl MediaElement for HtmlAudioElement {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlaybackError>> {
        let promise = HtmlMediaElement::play(self);
        async move {
            let promise = promise.map_err(|err| PlaybackError::Rejected(describe_js_error(&err)))?;
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| PlaybackError::Rejected(describe_js_error(&err)))
        }
        .boxed_local()
    }

    fn pause(&self) {
        let _ = HtmlMediaElement::pause(self);
    }

    fn current_time(&self) -> f64 {
        HtmlMediaElement::current_time(self)
    }

    fn duration(&self) -> f64 {
        HtmlMediaElement::duration(self)
    }

    fn seek(&self, seconds: f64) {
        HtmlMediaElement::set_current_time(self, seconds);
    }

    fn set_volume(&self, volume: f64) {
        HtmlMediaElement::set_volume(self, volume);
    }
}

/// The page's welcome-message audio element.
#[cfg(target_arch = "wasm32")]
pub fn welcome_audio() -> Option<WelcomeAudio> {
    let document = window()?.document()?;
    document
        .get_element_by_id(WELCOME_AUDIO_ID)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
pub fn progress_track_rect() -> Option<TrackRect> {
    let document = window()?.document()?;
    let rect = document
        .get_element_by_id(PROGRESS_TRACK_ID)?
        .get_bounding_client_rect();
    Some(TrackRect {
        left: rect.left(),
        width: rect.width(),
    })
}

/// Stand-in used off the browser, where no media element exists.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedMedia;

#[cfg(not(target_arch = "wasm32"))]
pub type WelcomeAudio = DetachedMedia;

#[cfg(not(target_arch = "wasm32"))]
impl MediaElement for DetachedMedia {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlaybackError>> {
        Box::pin(async { Err(PlaybackError::Unsupported) })
    }

    fn pause(&self) {}

    fn current_time(&self) -> f64 {
        0.0
    }

    fn duration(&self) -> f64 {
        f64::NAN
    }

    fn seek(&self, _seconds: f64) {}

    fn set_volume(&self, _volume: f64) {}
}

#[cfg(not(target_arch = "wasm32"))]
pub fn welcome_audio() -> Option<WelcomeAudio> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn progress_track_rect() -> Option<TrackRect> {
    None
}
