use serde::{Deserialize, Serialize};

/// Parameters accepted by the /api/check-stream endpoint.
///
/// Both fields are required by the checker. They stay optional here so a
/// partially filled query string can be merged with a POST body before the
/// presence check runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamCheckParams {
    /// Twitch application (client) identifier.
    pub client_id: Option<String>,
    /// Login name of the channel to look up.
    pub streamer_username: Option<String>,
}

impl StreamCheckParams {
    /// Fill any missing field from `other`. Fields already set win.
    pub fn or(self, other: StreamCheckParams) -> StreamCheckParams {
        StreamCheckParams {
            client_id: non_empty(self.client_id).or_else(|| non_empty(other.client_id)),
            streamer_username: non_empty(self.streamer_username)
                .or_else(|| non_empty(other.streamer_username)),
        }
    }

    /// Returns a complete request, or None when either parameter is missing or empty.
    pub fn into_request(self) -> Option<StreamCheckRequest> {
        Some(StreamCheckRequest {
            client_id: non_empty(self.client_id)?,
            streamer_username: non_empty(self.streamer_username)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A validated stream status request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamCheckRequest {
    /// Twitch application (client) identifier.
    pub client_id: String,
    /// Login name of the channel to look up.
    pub streamer_username: String,
}

impl StreamCheckRequest {
    pub fn new(client_id: impl Into<String>, streamer_username: impl Into<String>) -> Self {
        StreamCheckRequest {
            client_id: client_id.into(),
            streamer_username: streamer_username.into(),
        }
    }
}
