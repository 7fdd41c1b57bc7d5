//! Hero video playback state.
//!
//! The video starts muted and tries to autoplay. Browsers that block
//! autoplay get a click-to-play overlay. A media error removes the video
//! for good.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroVideoState {
    pub overlay_visible: bool,
    /// Set once by a media error and never cleared.
    pub video_hidden: bool,
    pub muted: bool,
    pub controls: bool,
}

impl Default for HeroVideoState {
    fn default() -> Self {
        Self { overlay_visible: false, video_hidden: false, muted: true, controls: false }
    }
}

impl HeroVideoState {
    /// Result of the muted autoplay attempt on mount.
    pub fn autoplay_resolved(&mut self, played: bool) {
        if self.video_hidden {
            return;
        }
        self.overlay_visible = !played;
    }

    /// The source failed to load or decode.
    pub fn media_error(&mut self) {
        self.video_hidden = true;
        self.overlay_visible = false;
    }

    /// Visitor clicked the overlay: play with sound and native controls.
    pub fn overlay_clicked(&mut self) {
        self.muted = false;
        self.controls = true;
    }

    /// Result of the play attempt after an overlay click. A failure keeps
    /// the overlay up so the visitor can try again.
    pub fn play_resolved(&mut self, played: bool) {
        if played {
            self.overlay_visible = false;
        }
    }

    /// Value for the overlay's class attribute.
    #[must_use]
    pub fn overlay_class(&self) -> &'static str {
        if self.overlay_visible { "video-play-overlay show" } else { "video-play-overlay" }
    }
}
