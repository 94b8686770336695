pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::panels::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions and tab container
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/tab", put(handlers::handle_select_tab))
        // Profile analysis
        .route(
            "/api/v1/sessions/:id/profile/analyze",
            post(handlers::handle_analyze_profile),
        )
        .route(
            "/api/v1/sessions/:id/profile/demo",
            post(handlers::handle_demo_profile),
        )
        // Job fit
        .route(
            "/api/v1/sessions/:id/job-fit/analyze",
            post(handlers::handle_analyze_job_fit),
        )
        .route(
            "/api/v1/sessions/:id/job-fit/sample",
            post(handlers::handle_job_fit_sample),
        )
        // Content optimization
        .route(
            "/api/v1/content/sections",
            get(handlers::handle_content_sections),
        )
        .route(
            "/api/v1/sessions/:id/content/optimize",
            post(handlers::handle_optimize_content),
        )
        .route(
            "/api/v1/sessions/:id/content/sample",
            post(handlers::handle_content_sample),
        )
        .route(
            "/api/v1/sessions/:id/content/copy",
            post(handlers::handle_copy_content),
        )
        .route(
            "/api/v1/sessions/:id/content/clipboard",
            get(handlers::handle_read_clipboard),
        )
        // Career guidance
        .route(
            "/api/v1/sessions/:id/career/generate",
            post(handlers::handle_generate_career),
        )
        .route(
            "/api/v1/sessions/:id/career/sample",
            post(handlers::handle_career_sample),
        )
        // Chat
        .route("/api/v1/sessions/:id/chat", get(handlers::handle_get_chat))
        .route(
            "/api/v1/sessions/:id/chat/messages",
            post(handlers::handle_send_message),
        )
        .route(
            "/api/v1/sessions/:id/chat/suggested/:index",
            post(handlers::handle_suggested_question),
        )
        .with_state(state)
}
