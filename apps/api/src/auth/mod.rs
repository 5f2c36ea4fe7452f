//! Bearer-token authentication against the external auth provider.
//!
//! Tokens are never inspected locally: each request forwards its token to
//! the provider's user-info endpoint and trusts the answer.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;
use crate::models::user::AuthUser;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth provider request failed: {0}")]
    Provider(#[from] reqwest::Error),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::AuthProvider(e.to_string())
    }
}

/// Resolves a bearer token to a user. `Ok(None)` means the token was rejected.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<Option<AuthUser>, AuthError>;
}

/// Validates tokens via `GET {base_url}/auth/v1/user`.
#[derive(Clone)]
pub struct ProviderAuth {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ProviderAuth {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl Authenticator for ProviderAuth {
    async fn authenticate(&self, token: &str) -> Result<Option<AuthUser>, AuthError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            debug!("Auth provider rejected token with {}", response.status());
            return Ok(None);
        }

        match response.json::<AuthUser>().await {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                debug!("Auth provider returned an unreadable user: {e}");
                Ok(None)
            }
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        state
            .auth
            .authenticate(token)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}
