use async_trait::async_trait;
use serde_json::{json, Value};

use crate::bridge::{BridgeClient, BridgeError};

/// Artist lookups served by the remote music service.
/// Implementations: BridgeClient (production), MockArtistService (testing)
#[async_trait]
pub trait RemoteArtistService: Send + Sync {
    /// All artists known to the music service.
    async fn list_artists(&self) -> Result<Value, BridgeError>;

    /// Songs by the artist of the song stored at `file_path`.
    async fn get_artist(&self, file_path: &str) -> Result<Value, BridgeError>;
}

#[async_trait]
impl RemoteArtistService for BridgeClient {
    async fn list_artists(&self) -> Result<Value, BridgeError> {
        self.method("getArtists", vec![]).await
    }

    async fn get_artist(&self, file_path: &str) -> Result<Value, BridgeError> {
        self.method("getArtist", vec![json!(file_path)]).await
    }
}
