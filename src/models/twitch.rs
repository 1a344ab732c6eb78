use serde::{Deserialize, Serialize};

/// Response body of the client-credentials token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Envelope shared by all Helix list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct HelixResponse<T> {
    pub data: Vec<T>,
}

impl<T> HelixResponse<T> {
    /// Consume the envelope, keeping only the first entry.
    pub fn into_first(self) -> Option<T> {
        self.data.into_iter().next()
    }
}

/// A Twitch user as returned by `GET /helix/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelixUser {
    pub id: String,
    pub display_name: String,
}

/// A live stream as returned by `GET /helix/streams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HelixStream {
    pub title: String,
    pub game_name: String,
    pub viewer_count: u64,
    /// RFC 3339 timestamp, passed through untouched.
    pub started_at: String,
}
