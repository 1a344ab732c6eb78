use twitch_stream_status::{api, telemetry};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_json();
    run(handler).await
}

/// GET|POST /api/check-stream: report whether a Twitch channel is live.
///
/// Query (or POST body) parameters: `clientId`, `streamerUsername`.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    api::check_stream(req).await
}
