//! Axum route handlers for the advice endpoints.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::advice::prompts::{CAREER_SYSTEM, FEEDBACK_SYSTEM, RESUME_TEXT_MARKER};
use crate::errors::AppError;
use crate::llm_client::{CompletionOptions, Message};
use crate::models::user::AuthUser;
use crate::state::AppState;
use crate::templates::{render, PromptTemplate};

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// POST /career/recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<RecommendationResponse>, AppError> {
    let recommendations = advise_on_latest_resume(
        &state,
        &user,
        PromptTemplate::CareerRecommendation,
        CAREER_SYSTEM,
    )
    .await?;
    Ok(Json(RecommendationResponse { recommendations }))
}

/// POST /resume_feedback/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<FeedbackResponse>, AppError> {
    let feedback = advise_on_latest_resume(
        &state,
        &user,
        PromptTemplate::ResumeFeedback,
        FEEDBACK_SYSTEM,
    )
    .await?;
    Ok(Json(FeedbackResponse { feedback }))
}

/// Latest resume → template → two-message completion.
async fn advise_on_latest_resume(
    state: &AppState,
    user: &AuthUser,
    template: PromptTemplate,
    system: &str,
) -> Result<String, AppError> {
    let resume = state
        .storage
        .latest_resume(user.id)
        .await?
        .filter(|r| r.has_content())
        .ok_or(AppError::ResumeRequired)?;

    let template_text = state.prompts.load(template).await?;
    let prompt = render(&template_text, &[(RESUME_TEXT_MARKER, resume.content.as_str())]);

    let messages = [Message::system(system), Message::user(prompt)];
    let text = state
        .llm
        .complete(&messages, &CompletionOptions::default())
        .await?;

    info!(
        "Generated {} for user {} from resume {}",
        template.file_name(),
        user.id,
        resume.id
    );
    Ok(text)
}
