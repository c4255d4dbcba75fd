//! Moderation: flagging and un-flagging videos
//!
//! A flagged video is hidden from listing, search and random play, and
//! cannot be played until allowed again.

use super::{PlaybackState, Player};
use crate::console::{Console, IndexPicker};

impl<'l, C: Console, P: IndexPicker> Player<'l, C, P> {
    /// Flag a video, optionally with a reason
    ///
    /// Flagging the video that is currently playing stops it first.
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) {
        let library = self.library;
        let Some(video) = library.get(video_id) else {
            self.console.line("Cannot flag video: Video does not exist");
            return;
        };
        if self.flags.contains_key(video_id) {
            self.console
                .line("Cannot flag video: Video is already flagged");
            return;
        }

        let is_current = matches!(
            &self.state,
            PlaybackState::Playing { video_id: current } | PlaybackState::Paused { video_id: current }
                if current.as_str() == video_id
        );
        if is_current {
            self.console.line(&format!("Stopping video: {}", video.title));
            self.state = PlaybackState::Stopped;
        }

        self.flags
            .insert(video_id.to_string(), reason.map(|r| r.to_string()));
        log::debug!("Video flagged: {}", video_id);
        self.console.line(&format!(
            "Successfully flagged video: {} (reason: {})",
            video.title,
            reason.unwrap_or("Not supplied")
        ));
    }

    /// Clear the flag from a video
    pub fn allow_video(&mut self, video_id: &str) {
        let library = self.library;
        let Some(video) = library.get(video_id) else {
            self.console
                .line("Cannot remove flag from video: Video does not exist");
            return;
        };
        if self.flags.remove(video_id).is_none() {
            self.console
                .line("Cannot remove flag from video: Video is not flagged");
            return;
        }

        log::debug!("Video allowed: {}", video_id);
        self.console.line(&format!(
            "Successfully removed flag from video: {}",
            video.title
        ));
    }
}
