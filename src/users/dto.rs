use serde::Deserialize;

use crate::users::repo_types::{ApiKeyEntry, CompanyProfile, Subscription};

/// Body for `PUT /api/users/profile`.
///
/// `password` and `role` are accepted but never applied: generic profile
/// updates drop them silently instead of erroring, and existing clients
/// rely on that. Everything else unknown is rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub profile: Option<CompanyProfile>,
    #[serde(default)]
    pub api_keys: Option<Vec<ApiKeyEntry>>,
    #[serde(default)]
    pub password: Option<serde_json::Value>,
    #[serde(default)]
    pub role: Option<serde_json::Value>,
}

/// Body for `PUT /api/users/password`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
