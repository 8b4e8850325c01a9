pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::artifacts;
use crate::flows::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content flows
        .route(
            "/api/v1/flows/youtube-script",
            post(handlers::handle_youtube_script),
        )
        .route(
            "/api/v1/flows/reel-script",
            post(handlers::handle_reel_script),
        )
        .route(
            "/api/v1/flows/improve-script",
            post(handlers::handle_improve_script),
        )
        .route("/api/v1/flows/caption", post(handlers::handle_caption))
        .route("/api/v1/flows/hashtags", post(handlers::handle_hashtags))
        .route(
            "/api/v1/flows/youtube-title",
            post(handlers::handle_youtube_title),
        )
        .route(
            "/api/v1/flows/youtube-description",
            post(handlers::handle_youtube_description),
        )
        .route("/api/v1/flows/chapters", post(handlers::handle_chapters))
        .route(
            "/api/v1/flows/video-ideas",
            post(handlers::handle_video_ideas),
        )
        .route(
            "/api/v1/flows/thumbnail-ideas",
            post(handlers::handle_thumbnail_ideas),
        )
        .route(
            "/api/v1/flows/content-strategy",
            post(handlers::handle_content_strategy),
        )
        .route(
            "/api/v1/flows/trending-reels",
            post(handlers::handle_trending_reels),
        )
        .route("/api/v1/flows/voiceover", post(handlers::handle_voiceover))
        // Saved artifacts ("My Content")
        .route(
            "/api/v1/artifacts",
            post(artifacts::handle_save_artifact).get(artifacts::handle_list_artifacts),
        )
        .route(
            "/api/v1/artifacts/:id",
            get(artifacts::handle_get_artifact).delete(artifacts::handle_delete_artifact),
        )
        .with_state(state)
}
