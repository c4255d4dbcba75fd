//! The player: playback state, playlists, search and moderation
//!
//! Every operation validates its inputs and reports a specific line per
//! failure condition through the console; nothing here is fatal.

mod playback;
mod playlists;
mod search;
mod moderation;

use crate::console::{Console, IndexPicker};
use crate::model::{Playlist, Video, VideoLibrary};
use std::collections::HashMap;

/// Playback status of the player
///
/// Paused carries the video id just like Playing, so "paused implies
/// playing" holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing { video_id: String },
    Paused { video_id: String },
}

/// Video catalogue player
///
/// Borrows the session library; owns the playback state, the playlist
/// collection (kept sorted by name) and the moderation flags.
pub struct Player<'l, C: Console, P: IndexPicker> {
    library: &'l VideoLibrary,
    console: C,
    picker: P,
    state: PlaybackState,
    playlists: Vec<Playlist>,
    /// Flagged video id -> optional reason
    flags: HashMap<String, Option<String>>,
}

impl<'l, C: Console, P: IndexPicker> Player<'l, C, P> {
    /// Create a player over a loaded library
    pub fn new(library: &'l VideoLibrary, console: C, picker: P) -> Self {
        Self {
            library,
            console,
            picker,
            state: PlaybackState::Stopped,
            playlists: Vec::new(),
            flags: HashMap::new(),
        }
    }

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Access the console (tests read captured output through this)
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Mutable console access, used by the shell for its read loop
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Print the total number of videos in the library
    pub fn number_of_videos(&mut self) {
        let count = self.library.len();
        self.console.line(&format!("{} videos in the library", count));
    }

    /// Print every non-flagged video, sorted lexicographically
    pub fn show_all_videos(&mut self) {
        self.console.line("Here's a list of all available videos:");

        let mut lines: Vec<String> = self
            .visible_videos()
            .iter()
            .map(|video| video.describe())
            .collect();
        lines.sort();

        for line in &lines {
            self.console.line(line);
        }
    }

    /// Non-flagged videos, in load order
    fn visible_videos(&self) -> Vec<&'l Video> {
        let library = self.library;
        library
            .all_videos()
            .iter()
            .filter(|video| !self.flags.contains_key(&video.id))
            .collect()
    }

    /// Resolve a video id to its title; falls back to the id itself
    /// (state only ever holds ids that came from the library)
    fn title_of(&self, video_id: &str) -> String {
        self.library
            .get(video_id)
            .map(|video| video.title.clone())
            .unwrap_or_else(|| video_id.to_string())
    }

    /// Id of the video currently playing or paused
    fn current_video_id(&self) -> Option<&str> {
        match &self.state {
            PlaybackState::Playing { video_id } | PlaybackState::Paused { video_id } => {
                Some(video_id)
            }
            PlaybackState::Stopped => None,
        }
    }

    /// Case-insensitive playlist lookup
    fn find_playlist(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.playlists
            .iter()
            .position(|playlist| playlist.name.to_lowercase() == needle)
    }
}
