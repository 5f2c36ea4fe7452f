pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advice::handlers as advice;
use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/resume/upload",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/career/recommend", post(advice::handle_recommend))
        .route("/resume_feedback/feedback", post(advice::handle_feedback))
        .route("/interview/question", get(interview::handle_question))
        .route("/interview/critique", post(interview::handle_critique))
        .with_state(state)
}
