//! vidshell - interactive in-memory video catalogue player
//!
//! Tracks playback state, a library of tagged videos and user-created
//! playlists behind a small command shell.

pub mod catalogue;
pub mod console;
pub mod model;
pub mod player;
pub mod shell;

pub use model::{Playlist, Video, VideoLibrary};
pub use player::{PlaybackState, Player};
