//! Parameter extraction from the query string and, for POST, the body.

use http::header::CONTENT_TYPE;
use http::Method;
use url::form_urlencoded;
use vercel_runtime::{Body, Request};

use crate::models::request::StreamCheckParams;

/// Collect `clientId` and `streamerUsername`. Query values take precedence
/// over body values; unparseable bodies contribute nothing.
pub fn extract(req: &Request) -> StreamCheckParams {
    let from_query = req
        .uri()
        .query()
        .map(|query| from_form(query.as_bytes()))
        .unwrap_or_default();

    if *req.method() != Method::POST {
        return from_query;
    }
    from_query.or(from_body(req))
}

fn from_body(req: &Request) -> StreamCheckParams {
    let bytes = body_bytes(req.body());
    if bytes.is_empty() {
        return StreamCheckParams::default();
    }

    let is_json = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or_else(|| bytes.first() == Some(&b'{'));

    if is_json {
        serde_json::from_slice(bytes).unwrap_or_default()
    } else {
        from_form(bytes)
    }
}

fn from_form(input: &[u8]) -> StreamCheckParams {
    let mut params = StreamCheckParams::default();
    for (key, value) in form_urlencoded::parse(input) {
        match key.as_ref() {
            "clientId" if params.client_id.is_none() => {
                params.client_id = Some(value.into_owned());
            }
            "streamerUsername" if params.streamer_username.is_none() => {
                params.streamer_username = Some(value.into_owned());
            }
            _ => {}
        }
    }
    params
}

fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    }
}
