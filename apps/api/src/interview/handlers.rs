//! Axum route handlers for mock interview practice.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extractors::{AppJson, AppQuery};
use crate::interview::prompts::{COACH_SYSTEM, INTERVIEWER_SYSTEM};
use crate::interview::scoring::extract_score;
use crate::llm_client::{CompletionOptions, Message};
use crate::models::interview::NewInterviewLog;
use crate::models::user::AuthUser;
use crate::state::AppState;
use crate::templates::{render, PromptTemplate};

#[derive(Debug, Deserialize)]
pub struct QuestionQuery {
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct CritiqueRequest {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct CritiqueResponse {
    pub critique: String,
    pub score: Option<u8>,
}

/// GET /interview/question?job_title=...
///
/// Public. Returns a single generated question for the role.
pub async fn handle_question(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<QuestionQuery>,
) -> Result<Json<QuestionResponse>, AppError> {
    let job_title = params.job_title.trim();
    if job_title.is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let template = state.prompts.load(PromptTemplate::MockQuestion).await?;
    let prompt = render(&template, &[("job_title", job_title)]);

    let messages = [Message::system(INTERVIEWER_SYSTEM), Message::user(prompt)];
    let question = state
        .llm
        .complete(&messages, &CompletionOptions::default())
        .await?;

    Ok(Json(QuestionResponse {
        question: question.trim().to_string(),
    }))
}

/// POST /interview/critique
///
/// Critiques the caller's answer, extracts the score and appends the
/// exchange to the caller's interview log.
pub async fn handle_critique(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<CritiqueRequest>,
) -> Result<Json<CritiqueResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let template = state.prompts.load(PromptTemplate::MockCritique).await?;
    let prompt = render(
        &template,
        &[
            ("question", request.question.as_str()),
            ("answer", request.answer.as_str()),
        ],
    );

    let messages = [Message::system(COACH_SYSTEM), Message::user(prompt)];
    let critique = state
        .llm
        .complete(&messages, &CompletionOptions::default())
        .await?;

    let score = extract_score(&critique);
    if score.is_none() {
        info!("Critique for user {} carried no usable score", user.id);
    }

    // The critique is still returned if the log write fails.
    if let Err(e) = state
        .storage
        .log_interview(NewInterviewLog {
            user_id: user.id,
            question: &request.question,
            answer: &request.answer,
            critique: &critique,
            score,
        })
        .await
    {
        warn!("Failed to log mock interview for user {}: {e}", user.id);
    }

    Ok(Json(CritiqueResponse { critique, score }))
}
