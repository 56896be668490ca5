use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::worker::{stop_after, Worker, WorkerError};
use crate::AppState;

pub use remote::RemoteArtistService;

#[cfg(test)]
mod mock;
mod remote;

pub const LIST_PATH: &str = "/api/artists/list";
pub const INFO_PATH: &str = "/api/artists/info/:filePath";

/// Register the artist routes on `worker`.
pub fn register(worker: &mut Worker<AppState>) -> Result<(), WorkerError> {
    worker
        .get(LIST_PATH, stop_after(list_artists))?
        .get(INFO_PATH, stop_after(artist_info))?;
    Ok(())
}

/// GET /api/artists/list
/// All artists, as returned by the music service
async fn list_artists(State(state): State<AppState>) -> Response {
    match state.artists.list_artists().await {
        Ok(artists) => Json(artists).into_response(),
        Err(e) => {
            warn!("getArtists failed: {}", e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// GET /api/artists/info/:filePath
/// Songs by the artist of the given file; any failure is a bare 404
async fn artist_info(
    State(state): State<AppState>,
    file_path: Result<Path<String>, PathRejection>,
) -> Response {
    // The router percent-decodes the segment, so `a%2Fb.mp3` arrives as `a/b.mp3`
    let file_path = match file_path {
        Ok(Path(file_path)) => absolute_path(&file_path),
        Err(e) => {
            warn!("Rejected file path: {}", e);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    match state.artists.get_artist(&file_path).await {
        Ok(songs) => Json(songs).into_response(),
        Err(e) => {
            warn!("getArtist failed for {}: {}", file_path, e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn absolute_path(relative: &str) -> String {
    format!("/{}", relative)
}
