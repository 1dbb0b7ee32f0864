//! JSON listings and streaming endpoints

use super::{AppContext, parse_id, range_header};
use crate::{
    catalog::{self, Library, MediaDescriptor, list_catalog},
    config::{ALL_CATEGORIES, MUSIC_CONTENT_TYPE, NO_AD_CONTENT_MSG, VIDEO_CONTENT_TYPE},
    error::{Error, Result},
    media::{pick_random, stream_media},
    utils::content_type_for_path,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

pub async fn list_movies(
    State(ctx): State<AppContext>,
    Path(category): Path<String>,
) -> Json<Vec<MediaDescriptor>> {
    Json(list_catalog(Library::Movies, &ctx.config, &category).await)
}

pub async fn list_music(State(ctx): State<AppContext>) -> Json<Vec<MediaDescriptor>> {
    Json(list_catalog(Library::Music, &ctx.config, ALL_CATEGORIES).await)
}

pub async fn list_videos(State(ctx): State<AppContext>) -> Json<Vec<MediaDescriptor>> {
    Json(list_catalog(Library::Videos, &ctx.config, ALL_CATEGORIES).await)
}

pub async fn list_themes(State(ctx): State<AppContext>) -> Json<Vec<MediaDescriptor>> {
    Json(list_catalog(Library::Themes, &ctx.config, ALL_CATEGORIES).await)
}

pub async fn stream_movie(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let id = parse_id(&id, "Movie")?;
    let movie = catalog::find_by_id(&ctx.config.movies_dir(), id)
        .await
        .ok_or_else(|| Error::not_found("Movie", format!("no movie with id {id}")))?;
    stream_media(movie.path(), range_header(&headers), VIDEO_CONTENT_TYPE).await
}

pub async fn stream_music(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let id = parse_id(&id, "Music")?;
    let track = catalog::find_by_id(&ctx.config.music_dir(), id)
        .await
        .ok_or_else(|| Error::not_found("Music", format!("no track with id {id}")))?;
    stream_media(track.path(), range_header(&headers), MUSIC_CONTENT_TYPE).await
}

pub async fn stream_video(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let id = parse_id(&id, "Video")?;
    let video = catalog::find_flat_by_id(&ctx.config.videos_dir(), id)
        .await
        .ok_or_else(|| Error::not_found("Video", format!("no video with id {id}")))?;
    stream_media(video.path(), range_header(&headers), VIDEO_CONTENT_TYPE).await
}

pub async fn serve_theme(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let id = parse_id(&id, "Theme")?;
    let theme = catalog::find_typed_by_id(&ctx.config.theme_dir(), id)
        .await
        .ok_or_else(|| Error::not_found("Theme", format!("no theme with id {id}")))?;
    let content_type = content_type_for_path(theme.path());
    stream_media(theme.path(), range_header(&headers), content_type).await
}

pub async fn random_ad(State(ctx): State<AppContext>) -> Response {
    match pick_random(&ctx.config.ads_dir()).await {
        Some(content) => ([(header::CONTENT_TYPE, VIDEO_CONTENT_TYPE)], content).into_response(),
        None => (StatusCode::NOT_FOUND, NO_AD_CONTENT_MSG).into_response(),
    }
}
