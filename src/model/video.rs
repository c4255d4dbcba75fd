use serde::{Deserialize, Serialize};

/// Represents a single catalogue video with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags, in catalogue order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    /// Display line used everywhere a video is shown:
    /// `<title> (<id>) [<tag1> <tag2> ...]`, empty brackets when untagged.
    pub fn describe(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}
