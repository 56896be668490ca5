use async_trait::async_trait;
use serde_json::Value;

use crate::bridge::Service;

pub use catalog::Catalog;

mod catalog;

/// Development host for the `music-service` methods, backed by a [`Catalog`].
pub struct MusicService {
    catalog: Catalog,
}

impl MusicService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Service for MusicService {
    async fn call(&self, method: &str, args: Vec<Value>) -> anyhow::Result<Value> {
        match method {
            "getArtists" => Ok(serde_json::to_value(self.catalog.artists())?),
            "getArtist" => {
                let file_path = args
                    .first()
                    .and_then(Value::as_str)
                    .ok_or_else(|| anyhow::anyhow!("getArtist expects a file path"))?;
                let songs = self
                    .catalog
                    .artist_of(file_path)
                    .ok_or_else(|| anyhow::anyhow!("No song at {}", file_path))?;
                Ok(serde_json::to_value(songs)?)
            }
            other => anyhow::bail!("Unknown method: {}", other),
        }
    }
}
