//! Request handlers for `/api/songs`.
//!
//! Each handler decodes and validates its input, runs the existence
//! pre-check where the route needs one, then calls the song service.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use tracing::{debug, error, info, warn};

use super::error::ApiError;
use super::payload::{
    CreateSongRequest, FilterParams, MessageResponse, SongTextResponse, UpdateSongRequest,
};
use crate::model::{Song, SongFilter};
use crate::service::SongService;

type ApiResult<T> = Result<Json<T>, ApiError>;

fn parse_id(raw: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = raw.map_err(|e| {
        warn!(error = %e, "Invalid song path");
        ApiError::BadRequest("invalid song id")
    })?;
    raw.parse().map_err(|e| {
        warn!(input = %raw, error = %e, "Invalid song ID");
        ApiError::BadRequest("invalid song id")
    })
}

/// Parse an optional non-negative bound; absent or empty means 0.
fn parse_bound(raw: Option<&str>, message: &'static str) -> Result<u64, ApiError> {
    match raw {
        None | Some("") => Ok(0),
        Some(value) => value.parse().map_err(|e| {
            warn!(value, error = %e, "{message}");
            ApiError::BadRequest(message)
        }),
    }
}

/// 404 unless the song exists. Storage failures are 500, not 404.
async fn ensure_exists(
    service: &SongService,
    id: i64,
    failure: &'static str,
) -> Result<(), ApiError> {
    match service.exists(id).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            warn!(song_id = id, "Song not found");
            Err(ApiError::NotFound)
        }
        Err(e) => {
            error!(song_id = id, error = %e, "Existence check failed");
            Err(ApiError::Internal(failure))
        }
    }
}

/// `POST /api/songs`
///
/// Blank `group` or `song` is rejected with 400 before the details lookup,
/// so an empty artist or title never reaches the song info API or storage.
pub async fn create_song(
    State(service): State<SongService>,
    body: Result<Json<CreateSongRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(request) = body.map_err(|e| {
        warn!(error = %e, "Invalid request body");
        ApiError::BadRequest("invalid request body")
    })?;
    if !request.is_valid() {
        warn!(group = %request.group, song = %request.song, "Blank group or song");
        return Err(ApiError::BadRequest("invalid request body"));
    }

    let song = service
        .create(&request.group, &request.song)
        .await
        .map_err(|e| {
            error!(error = %e, enrichment = e.is_enrichment(), "Failed to create song");
            ApiError::Internal("failed to create song")
        })?;

    info!(song_id = song.id, group = %request.group, song = %request.song, "Song created");
    Ok(Json(MessageResponse::ok("song was created successfully")))
}

/// `GET /api/songs/{id}`
pub async fn get_song_text(
    State(service): State<SongService>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<SongTextResponse> {
    let id = parse_id(id)?;
    ensure_exists(&service, id, "failed to fetch song").await?;

    let text_parts = service.text_parts(id).await.map_err(|e| {
        error!(song_id = id, error = %e, "Failed to fetch song text");
        ApiError::Internal("failed to fetch song")
    })?;

    Ok(Json(SongTextResponse { text_parts }))
}

/// `GET /api/songs/filter`
pub async fn list_songs(
    State(service): State<SongService>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> ApiResult<Vec<Song>> {
    let Query(params) = params.map_err(|e| {
        warn!(error = %e, "Invalid query string");
        ApiError::BadRequest("invalid query parameters")
    })?;

    let filter = SongFilter {
        limit: parse_bound(params.limit.as_deref(), "invalid limit value")?,
        offset: parse_bound(params.offset.as_deref(), "invalid offset value")?,
        artist: params.artist,
        title: params.title,
        release_date: params.release_date,
        text: params.text,
        source_link: params.source_link,
    };
    debug!(?filter, "Fetching songs with filter");

    let songs = service.list(&filter).await.map_err(|e| {
        error!(error = %e, "Failed to fetch songs");
        ApiError::Internal("failed to fetch songs")
    })?;

    Ok(Json(songs))
}

/// `PUT /api/songs/{id}`
///
/// The body must carry all five fields. A missing field is a 400 rather
/// than an overwrite with an empty string; send `""` to clear a value.
pub async fn update_song(
    State(service): State<SongService>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateSongRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let id = parse_id(id)?;
    ensure_exists(&service, id, "failed to update song").await?;

    let Json(request) = body.map_err(|e| {
        warn!(song_id = id, error = %e, "Invalid request body");
        ApiError::BadRequest("invalid request body")
    })?;

    service.update(&request.into_song(id)).await.map_err(|e| {
        error!(song_id = id, error = %e, "Failed to update song");
        ApiError::Internal("failed to update song")
    })?;

    info!(song_id = id, "Song updated");
    Ok(Json(MessageResponse::ok("song was updated successfully")))
}

/// `DELETE /api/songs/{id}`
pub async fn delete_song(
    State(service): State<SongService>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let id = parse_id(id)?;
    ensure_exists(&service, id, "failed to delete song").await?;

    service.delete(id).await.map_err(|e| {
        error!(song_id = id, error = %e, "Failed to delete song");
        ApiError::Internal("failed to delete song")
    })?;

    info!(song_id = id, "Song deleted");
    Ok(Json(MessageResponse::ok("song was deleted successfully")))
}
