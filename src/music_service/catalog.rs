use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::models::Song;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Read-only song list backing the music service
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Load a catalog from a JSON array of songs
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let songs: Vec<Song> = serde_json::from_str(&contents)?;
        info!("Loaded {} songs from {}", songs.len(), path.display());
        Ok(Self::new(songs))
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// First song for each artist, ordered by artist name ignoring case
    pub fn artists(&self) -> Vec<Song> {
        let mut artists: Vec<Song> = Vec::new();
        for song in &self.songs {
            if !artists
                .iter()
                .any(|seen| seen.metadata.artist == song.metadata.artist)
            {
                artists.push(song.clone());
            }
        }
        artists.sort_by_key(|song| song.metadata.artist.to_lowercase());
        artists
    }

    /// Songs sharing the artist of the song at `file_path`, by album then track.
    /// `None` when no song has that path.
    pub fn artist_of(&self, file_path: &str) -> Option<Vec<Song>> {
        let artist = &self
            .songs
            .iter()
            .find(|song| song.name == file_path)?
            .metadata
            .artist;

        let mut songs: Vec<Song> = self
            .songs
            .iter()
            .filter(|song| &song.metadata.artist == artist)
            .cloned()
            .collect();
        songs.sort_by(|a, b| {
            a.metadata
                .album
                .cmp(&b.metadata.album)
                .then(a.metadata.track.cmp(&b.metadata.track))
        });
        Some(songs)
    }
}
