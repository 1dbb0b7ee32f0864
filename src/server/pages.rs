//! Server-rendered pages

use super::AppContext;
use crate::{
    catalog::{Library, MediaDescriptor, list_catalog},
    config::ALL_CATEGORIES,
    error::{Error, Result},
};
use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};

/// Home page with the theme backdrop
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    themes: Vec<MediaDescriptor>,
}

/// Music player page
#[derive(Template)]
#[template(path = "music.html")]
struct MusicTemplate {
    musics: Vec<MediaDescriptor>,
}

/// Movie landing page
#[derive(Template)]
#[template(path = "movie.html")]
struct MovieTemplate;

/// About page with the general videos
#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    videos: Vec<MediaDescriptor>,
}

/// Movies of one category
#[derive(Template)]
#[template(path = "category.html")]
struct CategoryTemplate {
    category: String,
    movies: Vec<MediaDescriptor>,
}

/// Movie player page
#[derive(Template)]
#[template(path = "play.html")]
struct PlayTemplate {
    id: String,
}

fn render<T: Template>(template: &T, template_name: &str) -> Result<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|source| Error::TemplateRenderError {
            template_name: template_name.to_string(),
            source,
        })
}

pub async fn index(State(ctx): State<AppContext>) -> Result<Html<String>> {
    let themes = list_catalog(Library::Themes, &ctx.config, ALL_CATEGORIES).await;
    render(&IndexTemplate { themes }, "index.html")
}

pub async fn song(State(ctx): State<AppContext>) -> Result<Html<String>> {
    let musics = list_catalog(Library::Music, &ctx.config, ALL_CATEGORIES).await;
    render(&MusicTemplate { musics }, "music.html")
}

pub async fn movie() -> Result<Html<String>> {
    render(&MovieTemplate, "movie.html")
}

pub async fn about(State(ctx): State<AppContext>) -> Result<Html<String>> {
    let videos = list_catalog(Library::Videos, &ctx.config, ALL_CATEGORIES).await;
    render(&AboutTemplate { videos }, "about.html")
}

pub async fn category(
    State(ctx): State<AppContext>,
    Path(category): Path<String>,
) -> Result<Html<String>> {
    let movies = list_catalog(Library::Movies, &ctx.config, &category).await;
    render(&CategoryTemplate { category, movies }, "category.html")
}

pub async fn play(Path(id): Path<String>) -> Result<Html<String>> {
    render(&PlayTemplate { id }, "play.html")
}
