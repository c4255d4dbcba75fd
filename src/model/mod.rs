//! Data model for the video catalogue
//!
//! This module defines data structures that are independent of
//! both the catalogue file format and the command shell that drives them.

mod video;
mod library;
mod playlist;

pub use video::Video;
pub use library::VideoLibrary;
pub use playlist::Playlist;
