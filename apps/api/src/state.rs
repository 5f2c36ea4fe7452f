use std::sync::Arc;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::llm_client::ChatCompletion;
use crate::resume::extract::TextExtractor;
use crate::storage::{ResumeArchive, Storage};
use crate::templates::PromptLoader;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator is constructed once at startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub auth: Arc<dyn Authenticator>,
    pub llm: Arc<dyn ChatCompletion>,
    pub extractor: Arc<dyn TextExtractor>,
    pub prompts: PromptLoader,
    /// Present only when `S3_BUCKET` is configured.
    pub archive: Option<ResumeArchive>,
    pub config: Config,
}
