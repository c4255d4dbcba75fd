//! Playback operations: play, stop, random, pause, continue, show

use super::{PlaybackState, Player};
use crate::console::{Console, IndexPicker};

impl<'l, C: Console, P: IndexPicker> Player<'l, C, P> {
    /// Play a video by id
    ///
    /// Stops the current video first if one is playing or paused. Refuses
    /// unknown and flagged ids with distinct messages.
    pub fn play(&mut self, video_id: &str) {
        let library = self.library;
        let Some(video) = library.get(video_id) else {
            self.console.line("Cannot play video: Video does not exist");
            return;
        };

        if let Some(reason) = self.flags.get(video_id) {
            let line = match reason {
                Some(reason) => format!(
                    "Cannot play video: Video is currently flagged (reason: {})",
                    reason
                ),
                None => "Cannot play video: Video is currently flagged".to_string(),
            };
            self.console.line(&line);
            return;
        }

        if let Some(previous) = self.current_video_id().map(|id| self.title_of(id)) {
            self.console.line(&format!("Stopping video: {}", previous));
        }

        self.console.line(&format!("Playing video: {}", video.title));
        log::debug!("Playback started: {}", video.id);
        self.state = PlaybackState::Playing {
            video_id: video.id.clone(),
        };
    }

    /// Stop the current video
    pub fn stop(&mut self) {
        match self.current_video_id().map(|id| self.title_of(id)) {
            Some(title) => {
                self.console.line(&format!("Stopping video: {}", title));
                self.state = PlaybackState::Stopped;
            }
            None => {
                self.console
                    .line("Cannot stop video: No video is currently playing");
            }
        }
    }

    /// Play a uniformly random non-flagged video
    pub fn play_random(&mut self) {
        let candidates: Vec<String> = self
            .visible_videos()
            .iter()
            .map(|video| video.id.clone())
            .collect();

        if candidates.is_empty() {
            self.console.line("No videos available");
            return;
        }

        let choice = self.picker.pick(candidates.len());
        log::debug!("Random pick: {} of {} candidates", choice, candidates.len());
        self.play(&candidates[choice]);
    }

    /// Pause the current video; pausing twice is reported, not an error
    pub fn pause(&mut self) {
        match self.state.clone() {
            PlaybackState::Stopped => {
                self.console
                    .line("Cannot pause video: No video is currently playing");
            }
            PlaybackState::Paused { video_id } => {
                let title = self.title_of(&video_id);
                self.console.line(&format!("Video already paused: {}", title));
            }
            PlaybackState::Playing { video_id } => {
                let title = self.title_of(&video_id);
                self.console.line(&format!("Pausing video: {}", title));
                self.state = PlaybackState::Paused { video_id };
            }
        }
    }

    /// Resume a paused video
    pub fn continue_video(&mut self) {
        match self.state.clone() {
            PlaybackState::Stopped => {
                self.console
                    .line("Cannot continue video: No video is currently playing");
            }
            PlaybackState::Playing { .. } => {
                self.console
                    .line("Cannot continue video: Video is not paused");
            }
            PlaybackState::Paused { video_id } => {
                let title = self.title_of(&video_id);
                self.console.line(&format!("Continuing video: {}", title));
                self.state = PlaybackState::Playing { video_id };
            }
        }
    }

    /// Show what is currently playing, with a PAUSED marker when paused
    pub fn show_playing(&mut self) {
        let library = self.library;
        match self.state.clone() {
            PlaybackState::Stopped => {
                self.console.line("No video is currently playing");
            }
            PlaybackState::Playing { video_id } => {
                if let Some(video) = library.get(&video_id) {
                    self.console
                        .line(&format!("Currently playing: {}", video.describe()));
                }
            }
            PlaybackState::Paused { video_id } => {
                if let Some(video) = library.get(&video_id) {
                    self.console
                        .line(&format!("Currently playing: {} - PAUSED", video.describe()));
                }
            }
        }
    }
}
