//! Twitch client: the three upstream calls behind a stream status check.
//!
//! Each call maps a non-2xx status to its own `CheckError` variant and leaves
//! transport and decoding failures to `reqwest`.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::TwitchConfig;
use crate::error::CheckError;
use crate::models::twitch::{HelixResponse, HelixStream, HelixUser, TokenResponse};

/// Thin wrapper over `reqwest` for the OAuth and Helix endpoints.
pub struct TwitchClient {
    http: Client,
    config: TwitchConfig,
}

impl TwitchClient {
    /// Creates a client with a fresh connection pool.
    pub fn new(config: TwitchConfig) -> Self {
        TwitchClient::with_http(Client::new(), config)
    }

    pub fn with_http(http: Client, config: TwitchConfig) -> Self {
        TwitchClient { http, config }
    }

    /// Request an app access token via the client-credentials grant.
    pub async fn fetch_app_token(&self, client_id: &str) -> Result<String, CheckError> {
        let params = [
            ("client_id", client_id),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];

        debug!("requesting app access token");
        let response = self
            .http
            .post(self.config.token_url())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CheckError::UpstreamAuth(response.status()));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Look up a user by login. `Ok(None)` means no such account.
    pub async fn find_user(
        &self,
        client_id: &str,
        token: &str,
        login: &str,
    ) -> Result<Option<HelixUser>, CheckError> {
        debug!(login, "looking up user");
        let request = self.helix(self.config.users_url(), client_id, token);
        let response = request.query(&[("login", login)]).send().await?;

        if !response.status().is_success() {
            return Err(CheckError::UpstreamLookup(response.status()));
        }

        Ok(decode::<HelixUser>(response).await?.into_first())
    }

    /// Fetch the live stream of a user. `Ok(None)` means offline.
    pub async fn find_stream(
        &self,
        client_id: &str,
        token: &str,
        user_id: &str,
    ) -> Result<Option<HelixStream>, CheckError> {
        debug!(user_id, "checking live stream");
        let request = self.helix(self.config.streams_url(), client_id, token);
        let response = request.query(&[("user_id", user_id)]).send().await?;

        if !response.status().is_success() {
            return Err(CheckError::UpstreamStream(response.status()));
        }

        Ok(decode::<HelixStream>(response).await?.into_first())
    }

    fn helix(&self, url: String, client_id: &str, token: &str) -> RequestBuilder {
        self.http
            .get(url)
            .header("Client-ID", client_id)
            .header(AUTHORIZATION, format!("Bearer {token}"))
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<HelixResponse<T>, reqwest::Error> {
    response.json::<HelixResponse<T>>().await
}
