use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::RemoteArtistService;
use crate::bridge::BridgeError;

/// Mock remote service for testing.
/// Configure results per method, then inspect the calls that were made.
#[derive(Clone, Default)]
pub struct MockArtistService {
    artists: Arc<Mutex<Option<Result<Value, String>>>>,
    artist: Arc<Mutex<Option<Result<Value, String>>>>,
    list_calls: Arc<Mutex<usize>>,
    artist_calls: Arc<Mutex<Vec<String>>>,
}

impl MockArtistService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve_artists(&self, value: Value) {
        *self.artists.lock().unwrap() = Some(Ok(value));
    }

    pub fn reject_artists(&self, reason: &str) {
        *self.artists.lock().unwrap() = Some(Err(reason.to_string()));
    }

    pub fn resolve_artist(&self, value: Value) {
        *self.artist.lock().unwrap() = Some(Ok(value));
    }

    pub fn reject_artist(&self, reason: &str) {
        *self.artist.lock().unwrap() = Some(Err(reason.to_string()));
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    /// File paths passed to `getArtist`, in call order.
    pub fn artist_calls(&self) -> Vec<String> {
        self.artist_calls.lock().unwrap().clone()
    }

    fn outcome(
        slot: &Mutex<Option<Result<Value, String>>>,
        method: &str,
    ) -> Result<Value, BridgeError> {
        match slot.lock().unwrap().clone() {
            Some(Ok(value)) => Ok(value),
            Some(Err(reason)) => Err(BridgeError::Rejected {
                method: method.to_string(),
                reason,
            }),
            None => Err(BridgeError::Rejected {
                method: method.to_string(),
                reason: format!("No mock result for {}", method),
            }),
        }
    }
}

#[async_trait]
impl RemoteArtistService for MockArtistService {
    async fn list_artists(&self) -> Result<Value, BridgeError> {
        *self.list_calls.lock().unwrap() += 1;
        Self::outcome(&self.artists, "getArtists")
    }

    async fn get_artist(&self, file_path: &str) -> Result<Value, BridgeError> {
        self.artist_calls
            .lock()
            .unwrap()
            .push(file_path.to_string());
        Self::outcome(&self.artist, "getArtist")
    }
}
