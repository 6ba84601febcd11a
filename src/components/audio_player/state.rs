use crate::utils::{clamp_ratio, format_time};

/// Horizontal extent of the progress track in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    pub left: f64,
    pub width: f64,
}

impl TrackRect {
    /// Position of `pointer_x` along the track, clamped to `[0, 1]`.
    /// `None` for a collapsed track.
    pub fn ratio_at(&self, pointer_x: f64) -> Option<f64> {
        if !(self.width.is_finite() && self.width > 0.0) || !pointer_x.is_finite() {
            return None;
        }
        Some(clamp_ratio((pointer_x - self.left) / self.width))
    }
}

/// What the element should do after a play/pause click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Play,
    Pause,
}

/// Welcome-message player state. Owned by the player component; nothing here
/// touches the media element directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    is_playing: bool,
    is_dragging: bool,
    unavailable: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
}

impl PlayerState {
    pub fn new(volume: f64) -> Self {
        Self {
            is_playing: false,
            is_dragging: false,
            unavailable: false,
            current_time: 0.0,
            duration: f64::NAN,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    fn seekable_duration(&self) -> Option<f64> {
        (self.duration.is_finite() && self.duration > 0.0).then_some(self.duration)
    }

    /// Flip the play state. Clicking again after a rejected play clears the
    /// unavailable marker and tries once more; nothing retries on its own.
    pub fn toggle(&mut self) -> PlayCommand {
        if self.is_playing {
            self.is_playing = false;
            PlayCommand::Pause
        } else {
            self.is_playing = true;
            self.unavailable = false;
            PlayCommand::Play
        }
    }

    /// The browser refused to start playback.
    pub fn playback_rejected(&mut self) {
        self.is_playing = false;
        self.unavailable = true;
    }

    pub fn metadata_loaded(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Periodic position report. Ignored while the handle is being dragged.
    /// Returns whether the displayed position changed.
    pub fn time_updated(&mut self, current_time: f64) -> bool {
        if self.is_dragging {
            return false;
        }
        self.current_time = current_time;
        true
    }

    /// Click on the track. Returns the new playback position to apply.
    pub fn seek_at(&mut self, pointer_x: f64, track: TrackRect) -> Option<f64> {
        let duration = self.seekable_duration()?;
        let ratio = track.ratio_at(pointer_x)?;
        self.current_time = ratio * duration;
        Some(self.current_time)
    }

    pub fn begin_drag(&mut self) {
        self.is_dragging = true;
    }

    /// Pointer moved anywhere on the page during a drag.
    pub fn drag_to(&mut self, pointer_x: f64, track: TrackRect) -> Option<f64> {
        if !self.is_dragging {
            return None;
        }
        self.seek_at(pointer_x, track)
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    /// Slider value 0-100 to playback volume 0.0-1.0.
    pub fn set_volume_from_slider(&mut self, slider_value: f64) -> f64 {
        self.volume = if slider_value.is_finite() {
            (slider_value / 100.0).clamp(0.0, 1.0)
        } else {
            self.volume
        };
        self.volume
    }

    /// Natural end of media: back to the initial visual state.
    pub fn ended(&mut self) {
        self.is_playing = false;
        self.is_dragging = false;
        self.current_time = 0.0;
    }

    pub fn progress_ratio(&self) -> f64 {
        match self.seekable_duration() {
            Some(duration) => clamp_ratio(self.current_time / duration),
            None => 0.0,
        }
    }

    pub fn elapsed_label(&self) -> String {
        format_time(self.current_time)
    }

    pub fn duration_label(&self) -> String {
        format_time(self.duration)
    }

    pub fn button_icon(&self) -> &'static str {
        if self.unavailable {
            "alert"
        } else if self.is_playing {
            "pause"
        } else {
            "play"
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.unavailable {
            "Audio unavailable"
        } else if self.is_playing {
            "Pause welcome message"
        } else {
            "Play welcome message"
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: TrackRect = TrackRect {
        left: 100.0,
        width: 200.0,
    };

    fn loaded(duration: f64) -> PlayerState {
        let mut player = PlayerState::default();
        player.metadata_loaded(duration);
        player
    }

    #[test]
    fn ratios_stay_inside_the_track() {
        for x in [-1e6, 0.0, 99.0, 100.0, 150.0, 300.0, 301.0, 1e6] {
            let ratio = TRACK.ratio_at(x).expect("track has width");
            assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} for x {x}");
        }
        assert_eq!(TRACK.ratio_at(150.0), Some(0.25));
    }

    #[test]
    fn collapsed_track_disables_seeking() {
        let track = TrackRect {
            left: 0.0,
            width: 0.0,
        };
        assert_eq!(track.ratio_at(10.0), None);
        assert_eq!(loaded(60.0).seek_at(10.0, track), None);
    }

    #[test]
    fn click_seek_uses_duration() {
        let mut player = loaded(120.0);
        assert_eq!(player.seek_at(200.0, TRACK), Some(60.0));
        assert_eq!(player.elapsed_label(), "1:00");
        assert_eq!(player.progress_ratio(), 0.5);
    }

    #[test]
    fn missing_duration_disables_seeking() {
        let mut player = PlayerState::default();
        assert_eq!(player.seek_at(200.0, TRACK), None);
        player.metadata_loaded(0.0);
        assert_eq!(player.seek_at(200.0, TRACK), None);
        player.metadata_loaded(f64::INFINITY);
        assert_eq!(player.seek_at(200.0, TRACK), None);
        assert_eq!(player.progress_ratio(), 0.0);
        assert_eq!(player.duration_label(), "0:00");
    }

    #[test]
    fn drag_clamps_outside_the_track_and_suppresses_time_updates() {
        let mut player = loaded(100.0);
        assert_eq!(player.drag_to(200.0, TRACK), None);

        player.begin_drag();
        assert_eq!(player.drag_to(-500.0, TRACK), Some(0.0));
        assert_eq!(player.drag_to(5_000.0, TRACK), Some(100.0));
        assert!(!player.time_updated(12.0));
        assert_eq!(player.progress_ratio(), 1.0);

        player.end_drag();
        assert!(player.time_updated(12.0));
        assert_eq!(player.elapsed_label(), "0:12");
    }

    #[test]
    fn toggle_alternates_commands_and_labels() {
        let mut player = PlayerState::default();
        assert_eq!(player.button_label(), "Play welcome message");
        assert_eq!(player.toggle(), PlayCommand::Play);
        assert_eq!(player.button_icon(), "pause");
        assert_eq!(player.toggle(), PlayCommand::Pause);
        assert_eq!(player.button_icon(), "play");
    }

    #[test]
    fn rejected_playback_shows_unavailable_until_next_click() {
        let mut player = PlayerState::default();
        player.toggle();
        player.playback_rejected();
        assert!(player.is_unavailable());
        assert!(!player.is_playing());
        assert_eq!(player.button_label(), "Audio unavailable");

        assert_eq!(player.toggle(), PlayCommand::Play);
        assert!(!player.is_unavailable());
    }

    #[test]
    fn end_of_media_resets_display() {
        let mut player = loaded(30.0);
        player.toggle();
        player.time_updated(29.5);
        player.ended();
        assert!(!player.is_playing());
        assert_eq!(player.progress_ratio(), 0.0);
        assert_eq!(player.elapsed_label(), "0:00");
        assert_eq!(player.button_icon(), "play");
    }

    #[test]
    fn slider_maps_linearly_to_volume() {
        let mut player = PlayerState::default();
        assert_eq!(player.set_volume_from_slider(0.0), 0.0);
        assert_eq!(player.set_volume_from_slider(100.0), 1.0);
        assert_eq!(player.set_volume_from_slider(25.0), 0.25);
        assert_eq!(player.set_volume_from_slider(140.0), 1.0);
        assert_eq!(player.set_volume_from_slider(f64::NAN), 1.0);
    }
}
