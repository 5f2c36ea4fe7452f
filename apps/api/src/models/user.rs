use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The caller as reported by the auth provider's user-info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}
