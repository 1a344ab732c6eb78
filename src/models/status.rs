use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::twitch::HelixStream;

/// Metadata of a live broadcast, copied verbatim from Helix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfo {
    pub title: String,
    pub game: String,
    pub viewers: u64,
    pub started_at: String,
}

impl From<HelixStream> for StreamInfo {
    fn from(stream: HelixStream) -> Self {
        StreamInfo {
            title: stream.title,
            game: stream.game_name,
            viewers: stream.viewer_count,
            started_at: stream.started_at,
        }
    }
}

/// Successful check result. Serialized as the 200 response body.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamStatus {
    pub success: bool,
    pub is_live: bool,
    /// Display name as reported by Twitch, not the requested login.
    pub streamer: String,
    pub stream_info: Option<StreamInfo>,
    #[serde(serialize_with = "serialize_iso8601")]
    pub checked_at: DateTime<Utc>,
}

impl StreamStatus {
    /// Build a status from the resolved display name and optional live stream.
    pub fn new(streamer: String, stream: Option<HelixStream>, checked_at: DateTime<Utc>) -> Self {
        StreamStatus {
            success: true,
            is_live: stream.is_some(),
            streamer,
            stream_info: stream.map(StreamInfo::from),
            checked_at,
        }
    }
}

/// Result of a check that reached Twitch without a transport or status failure.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamCheckOutcome {
    /// The user exists; carries live or offline status.
    Found(StreamStatus),
    /// No Twitch account matches the requested login.
    NotFound { streamer: String },
}

/// Error body returned for every non-200 outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    pub is_live: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streamer: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody { error: error.into(), is_live: false, streamer: None }
    }

    pub fn with_streamer(mut self, streamer: impl Into<String>) -> Self {
        self.streamer = Some(streamer.into());
        self
    }
}

/// Millisecond precision with a `Z` suffix, e.g. `2025-01-15T08:00:00.000Z`.
pub fn serialize_iso8601<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_offline_status_serializes_null_stream_info() {
        let status = StreamStatus::new("Shroud".to_string(), None, fixed_time());
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "isLive": false,
                "streamer": "Shroud",
                "streamInfo": null,
                "checkedAt": "2025-01-15T08:30:00.000Z",
            })
        );
    }

    #[test]
    fn test_live_status_copies_stream_fields() {
        let stream = HelixStream {
            title: "ranked grind".to_string(),
            game_name: "VALORANT".to_string(),
            viewer_count: 12345,
            started_at: "2025-01-15T06:00:00Z".to_string(),
        };
        let status = StreamStatus::new("Shroud".to_string(), Some(stream), fixed_time());
        assert!(status.is_live);

        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(
            value["streamInfo"],
            json!({
                "title": "ranked grind",
                "game": "VALORANT",
                "viewers": 12345,
                "startedAt": "2025-01-15T06:00:00Z",
            })
        );
    }

    #[test]
    fn test_error_body_omits_streamer_unless_set() {
        let value = serde_json::to_value(ErrorBody::new("boom")).unwrap();
        assert_eq!(value, json!({ "error": "boom", "isLive": false }));

        let value =
            serde_json::to_value(ErrorBody::new("Streamer not found").with_streamer("nobody"))
                .unwrap();
        assert_eq!(value["streamer"], "nobody");
    }
}
