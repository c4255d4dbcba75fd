/// Represents a user-created playlist
///
/// Holds video ids rather than full Video records; the library resolves
/// ids back to videos for display. Name casing is preserved as the user
/// typed it; uniqueness among playlists is enforced case-insensitively
/// by the player.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Playlist name, original casing
    pub name: String,

    /// Member video ids (ordered, no duplicates)
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Check whether a video id is already in this playlist
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video id; false if it is already present
    pub fn add(&mut self, video_id: String) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        true
    }

    /// Remove a video id; false if it was not present
    pub fn remove(&mut self, video_id: &str) -> bool {
        if let Some(pos) = self.video_ids.iter().position(|id| id == video_id) {
            self.video_ids.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove all video ids
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Member video ids in playlist order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}
