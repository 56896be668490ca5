use serde::{Deserialize, Serialize};

/// Song record as exchanged with the music service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// File path of the song, e.g. `/music/artist/track.mp3`
    pub name: String,
    pub metadata: SongMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongMetadata {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<u32>,
}
