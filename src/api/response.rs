//! Response builders. Every response leaves here with the CORS headers set.

use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use http::response::Builder;
use serde::Serialize;
use vercel_runtime::{Body, Error, Response, StatusCode};

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

fn with_cors(builder: Builder) -> Builder {
    builder
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)
        .header(ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
}

/// JSON response with the given status.
pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, Error> {
    Ok(with_cors(Response::builder())
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(serde_json::to_string(payload)?))?)
}

/// Empty 200 for CORS preflight.
pub fn preflight() -> Result<Response<Body>, Error> {
    Ok(with_cors(Response::builder())
        .status(StatusCode::OK)
        .body(Body::Empty)?)
}
