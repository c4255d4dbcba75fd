//! Catalogue file loading
//!
//! The catalogue is a JSON array of `{id, title, tags}` records. A small
//! built-in sample ships with the binary for running without a file.

use crate::model::{Video, VideoLibrary};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Built-in demo catalogue used when no file is supplied
const SAMPLE_CATALOGUE: &str = include_str!("sample.json");

/// Catalogue parse failure modes
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("malformed catalogue JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate video id in catalogue: {0}")]
    DuplicateId(String),
}

/// Parse catalogue JSON into a library
pub fn parse(json: &str) -> Result<VideoLibrary, CatalogueError> {
    let videos: Vec<Video> = serde_json::from_str(json)?;

    let mut library = VideoLibrary::new();
    for video in videos {
        let id = video.id.clone();
        if !library.add(video) {
            return Err(CatalogueError::DuplicateId(id));
        }
    }
    Ok(library)
}

/// Load a catalogue file into a library
pub fn load(path: &Path) -> Result<VideoLibrary> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalogue file: {:?}", path))?;

    let library =
        parse(&json).with_context(|| format!("Failed to parse catalogue file: {:?}", path))?;

    log::debug!("Parsed {} videos from {:?}", library.len(), path);
    Ok(library)
}

/// Load the built-in sample catalogue
pub fn load_sample() -> Result<VideoLibrary, CatalogueError> {
    parse(SAMPLE_CATALOGUE)
}
