use idbridge_domain::{ProfileMap, Timestamp};
use serde::{Deserialize, Serialize};

mod conversions;

/// Incoming payload for user creation. No `Debug` so the password never
/// reaches a log line.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub login: String,
    pub password: Option<String>,
    pub profile: ProfileMap,
    pub activate: bool,
}

/// Incoming payload for a partial user update.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile: Option<ProfileMap>,
}

/// API representation of a user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub login: String,
    pub status: &'static str,
    pub created: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
    #[serde(skip_serializing_if = "ProfileMap::is_empty")]
    pub profile: ProfileMap,
}
