use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the upstream call chain.
///
/// All variants surface to clients as the same 500 response; the variant
/// only matters for logs.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Token request failed: {}", .0.as_u16())]
    UpstreamAuth(StatusCode),
    #[error("User lookup failed: {}", .0.as_u16())]
    UpstreamLookup(StatusCode),
    #[error("Stream check failed: {}", .0.as_u16())]
    UpstreamStream(StatusCode),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Env(#[from] envy::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_carry_the_upstream_status() {
        let err = CheckError::UpstreamAuth(StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Token request failed: 400");

        let err = CheckError::UpstreamLookup(StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "User lookup failed: 401");

        let err = CheckError::UpstreamStream(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Stream check failed: 503");
    }
}
