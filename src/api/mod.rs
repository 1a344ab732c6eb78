//! HTTP translation for the serverless functions.
//!
//! Handlers in `api/` stay thin and call into here, which maps requests to
//! checker calls and checker outcomes to status codes.

pub mod params;
pub mod response;

use http::Method;
use tracing::error;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::checker::StreamStatusChecker;
use crate::config::TwitchConfig;
use crate::models::status::{ErrorBody, StreamCheckOutcome};

pub const MISSING_PARAMS: &str = "Missing clientId or streamerUsername parameters";
pub const NOT_FOUND: &str = "Streamer not found";

/// GET|POST|OPTIONS /api/check-stream with configuration from the environment.
pub async fn check_stream(req: Request) -> Result<Response<Body>, Error> {
    match TwitchConfig::from_env() {
        Ok(config) => handle_check_stream(req, &StreamStatusChecker::from_config(config)).await,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            response::json(StatusCode::INTERNAL_SERVER_ERROR, &ErrorBody::new(err.to_string()))
        }
    }
}

/// Serve one request with the given checker.
pub async fn handle_check_stream(
    req: Request,
    checker: &StreamStatusChecker,
) -> Result<Response<Body>, Error> {
    match *req.method() {
        Method::OPTIONS => return response::preflight(),
        Method::GET | Method::POST => {}
        _ => {
            return response::json(
                StatusCode::METHOD_NOT_ALLOWED,
                &ErrorBody::new("Method not allowed"),
            )
        }
    }

    let Some(request) = params::extract(&req).into_request() else {
        return response::json(StatusCode::BAD_REQUEST, &ErrorBody::new(MISSING_PARAMS));
    };

    match checker.check(&request).await {
        Ok(StreamCheckOutcome::Found(status)) => response::json(StatusCode::OK, &status),
        Ok(StreamCheckOutcome::NotFound { streamer }) => response::json(
            StatusCode::NOT_FOUND,
            &ErrorBody::new(NOT_FOUND).with_streamer(streamer),
        ),
        Err(err) => {
            error!(error = %err, "error checking stream");
            response::json(StatusCode::INTERNAL_SERVER_ERROR, &ErrorBody::new(err.to_string()))
        }
    }
}
