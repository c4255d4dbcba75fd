//! Playlist operations
//!
//! Playlist names are matched case-insensitively everywhere; the collection
//! stays sorted by name (byte order) for display.

use super::Player;
use crate::console::{Console, IndexPicker};
use crate::model::Playlist;

impl<'l, C: Console, P: IndexPicker> Player<'l, C, P> {
    /// Create a new empty playlist
    pub fn create_playlist(&mut self, name: &str) {
        if self.find_playlist(name).is_some() {
            self.console
                .line("Cannot create playlist: A playlist with the same name already exists");
            return;
        }

        self.playlists.push(Playlist::new(name.to_string()));
        self.playlists.sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!("Playlist created: {}", name);
        self.console
            .line(&format!("Successfully created new playlist: {}", name));
    }

    /// Append a video to a playlist
    ///
    /// Checks, in order: playlist exists, video exists, video not already
    /// in the playlist.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) {
        let library = self.library;
        let Some(pos) = self.find_playlist(name) else {
            self.console
                .line(&format!("Cannot add video to {}: Playlist does not exist", name));
            return;
        };
        let Some(video) = library.get(video_id) else {
            self.console
                .line(&format!("Cannot add video to {}: Video does not exist", name));
            return;
        };

        if !self.playlists[pos].add(video.id.clone()) {
            self.console
                .line(&format!("Cannot add video to {}: Video already added", name));
            return;
        }
        self.console
            .line(&format!("Added video to {}: {}", name, video.title));
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) {
        let library = self.library;
        let Some(pos) = self.find_playlist(name) else {
            self.console.line(&format!(
                "Cannot remove video from {}: Playlist does not exist",
                name
            ));
            return;
        };
        let Some(video) = library.get(video_id) else {
            self.console.line(&format!(
                "Cannot remove video from {}: Video does not exist",
                name
            ));
            return;
        };

        if !self.playlists[pos].remove(video_id) {
            self.console.line(&format!(
                "Cannot remove video from {}: Video is not in playlist",
                name
            ));
            return;
        }
        self.console
            .line(&format!("Removed video from {}: {}", name, video.title));
    }

    /// Remove every video from a playlist
    pub fn clear_playlist(&mut self, name: &str) {
        match self.find_playlist(name) {
            Some(pos) => {
                self.playlists[pos].clear();
                self.console.line(&format!(
                    "Successfully removed all videos from {}",
                    name
                ));
            }
            None => {
                self.console.line(&format!(
                    "Cannot clear playlist {}: Playlist does not exist",
                    name
                ));
            }
        }
    }

    /// Delete a playlist entirely
    pub fn delete_playlist(&mut self, name: &str) {
        match self.find_playlist(name) {
            Some(pos) => {
                self.playlists.remove(pos);
                self.console.line(&format!("Deleted playlist: {}", name));
            }
            None => {
                self.console.line(&format!(
                    "Cannot delete playlist {}: Playlist does not exist",
                    name
                ));
            }
        }
    }

    /// List every playlist name, in sorted order
    pub fn show_all_playlists(&mut self) {
        if self.playlists.is_empty() {
            self.console.line("No playlists exist yet");
            return;
        }

        self.console.line("Showing all playlists:");
        let names: Vec<String> = self.playlists.iter().map(|p| p.name.clone()).collect();
        for name in &names {
            self.console.line(name);
        }
    }

    /// List the videos in one playlist, in playlist order
    pub fn show_playlist(&mut self, name: &str) {
        let library = self.library;
        let Some(pos) = self.find_playlist(name) else {
            self.console.line(&format!(
                "Cannot show playlist {}: Playlist does not exist",
                name
            ));
            return;
        };

        self.console.line(&format!("Showing playlist: {}", name));
        if self.playlists[pos].is_empty() {
            self.console.line("No videos here yet");
            return;
        }

        let lines: Vec<String> = self.playlists[pos]
            .video_ids()
            .iter()
            .filter_map(|id| library.get(id))
            .map(|video| video.describe())
            .collect();
        for line in &lines {
            self.console.line(line);
        }
    }
}
