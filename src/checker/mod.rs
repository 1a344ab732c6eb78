//! Stream status checker: token, user, then stream, strictly in order.
//!
//! Each step needs the previous step's output, so the first failure ends
//! the check. A missing user is an outcome, not an error.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::config::TwitchConfig;
use crate::error::CheckError;
use crate::models::request::StreamCheckRequest;
use crate::models::status::{StreamCheckOutcome, StreamStatus};
use crate::twitch::TwitchClient;

/// Orchestrates the upstream calls for a single check.
pub struct StreamStatusChecker {
    client: TwitchClient,
}

impl StreamStatusChecker {
    /// Creates a checker over the given Twitch client.
    pub fn new(client: TwitchClient) -> Self {
        StreamStatusChecker { client }
    }

    pub fn from_config(config: TwitchConfig) -> Self {
        StreamStatusChecker::new(TwitchClient::new(config))
    }

    /// Run one check. The token is used for this call only and then dropped.
    #[instrument(skip_all, fields(streamer = %request.streamer_username))]
    pub async fn check(&self, request: &StreamCheckRequest) -> Result<StreamCheckOutcome, CheckError> {
        info!("checking stream status");

        let token = self.client.fetch_app_token(&request.client_id).await?;

        let user = self
            .client
            .find_user(&request.client_id, &token, &request.streamer_username)
            .await?;
        let Some(user) = user else {
            warn!("streamer not found");
            return Ok(StreamCheckOutcome::NotFound {
                streamer: request.streamer_username.clone(),
            });
        };

        let stream = self
            .client
            .find_stream(&request.client_id, &token, &user.id)
            .await?;

        let status = StreamStatus::new(user.display_name, stream, Utc::now());
        info!(is_live = status.is_live, "stream status resolved");
        Ok(StreamCheckOutcome::Found(status))
    }
}
