//! Environment-driven configuration.
//!
//! Every variable is optional; the defaults talk to the public Twitch API.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_AUTH_URL: &str = "https://id.twitch.tv";
pub const DEFAULT_API_URL: &str = "https://api.twitch.tv/helix";

/// Upstream endpoints and credentials, read from `TWITCH_*` variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TwitchConfig {
    /// Base of the OAuth service (`TWITCH_AUTH_URL`).
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Base of the Helix API (`TWITCH_API_URL`).
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Sent as `client_secret` on token requests (`TWITCH_CLIENT_SECRET`).
    /// Empty unless configured.
    #[serde(default)]
    pub client_secret: String,
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for TwitchConfig {
    fn default() -> Self {
        TwitchConfig {
            auth_url: default_auth_url(),
            api_url: default_api_url(),
            client_secret: String::new(),
        }
    }
}

impl TwitchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed("TWITCH_").from_env::<TwitchConfig>()?)
    }

    /// Load from an explicit set of variables instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed("TWITCH_").from_iter::<_, TwitchConfig>(vars)?)
    }

    /// Point both upstreams at one origin, with Helix under `/helix`.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        TwitchConfig {
            auth_url: base.to_string(),
            api_url: format!("{base}/helix"),
            client_secret: String::new(),
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.auth_url.trim_end_matches('/'))
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_url.trim_end_matches('/'))
    }

    pub fn streams_url(&self) -> String {
        format!("{}/streams", self.api_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_target_public_twitch() {
        let config = TwitchConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, TwitchConfig::default());
        assert_eq!(config.token_url(), "https://id.twitch.tv/oauth2/token");
        assert_eq!(config.users_url(), "https://api.twitch.tv/helix/users");
        assert_eq!(config.streams_url(), "https://api.twitch.tv/helix/streams");
        assert!(config.client_secret.is_empty());
    }

    #[test]
    fn test_overrides_are_read_from_prefixed_vars() {
        let config = TwitchConfig::from_vars(vars(&[
            ("TWITCH_AUTH_URL", "http://localhost:9000/"),
            ("TWITCH_API_URL", "http://localhost:9001/helix/"),
            ("TWITCH_CLIENT_SECRET", "s3cret"),
            ("UNRELATED", "x"),
        ]))
        .unwrap();

        assert_eq!(config.token_url(), "http://localhost:9000/oauth2/token");
        assert_eq!(config.users_url(), "http://localhost:9001/helix/users");
        assert_eq!(config.client_secret, "s3cret");
    }

    #[test]
    fn test_with_base_url_nests_helix() {
        let config = TwitchConfig::with_base_url("http://127.0.0.1:4000/");
        assert_eq!(config.token_url(), "http://127.0.0.1:4000/oauth2/token");
        assert_eq!(config.streams_url(), "http://127.0.0.1:4000/helix/streams");
    }
}
