use super::Video;
use std::collections::HashMap;

/// Complete video library for the session
///
/// Immutable once loaded: videos are added by the catalogue loader at
/// startup and never mutated or removed afterwards. Enumeration order is
/// the load order.
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    /// Videos in load order
    videos: Vec<Video>,

    /// Id -> position in `videos`
    index: HashMap<String, usize>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a video to the library
    ///
    /// Returns false (and leaves the library unchanged) if a video with
    /// the same id is already present.
    pub fn add(&mut self, video: Video) -> bool {
        if self.index.contains_key(&video.id) {
            return false;
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        true
    }

    /// Get a video by id
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&pos| &self.videos[pos])
    }

    /// All videos, in load order
    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for VideoLibrary {
    fn default() -> Self {
        Self::new()
    }
}
