//! CLI tool to run a single stream status check from a terminal.
//!
//! Prints the JSON body `/api/check-stream` would return and exits non-zero
//! unless the endpoint would have answered 200.

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::error;
use twitch_stream_status::api::NOT_FOUND;
use twitch_stream_status::checker::StreamStatusChecker;
use twitch_stream_status::config::TwitchConfig;
use twitch_stream_status::models::request::StreamCheckRequest;
use twitch_stream_status::models::status::{ErrorBody, StreamCheckOutcome};
use twitch_stream_status::telemetry;

#[derive(Debug, Parser)]
#[command(name = "stream_status", version, about = "Check whether a Twitch channel is live")]
struct Args {
    /// Twitch application client id
    #[arg(long, env = "TWITCH_CLIENT_ID")]
    client_id: String,

    /// Login name of the channel
    #[arg(long)]
    streamer: String,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_pretty(args.verbose);

    let config = match TwitchConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let checker = StreamStatusChecker::from_config(config);
    let request = StreamCheckRequest::new(args.client_id, args.streamer);

    let (status, printed) = match checker.check(&request).await {
        Ok(StreamCheckOutcome::Found(status)) => (200, render(&status, args.compact)),
        Ok(StreamCheckOutcome::NotFound { streamer }) => (
            404,
            render(&ErrorBody::new(NOT_FOUND).with_streamer(streamer), args.compact),
        ),
        Err(err) => (500, render(&ErrorBody::new(err.to_string()), args.compact)),
    };

    match printed {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(error = %err, "failed to serialize result");
            return ExitCode::FAILURE;
        }
    }
    eprintln!("status: {status}");

    if status == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn render<T: Serialize>(payload: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(payload)
    } else {
        serde_json::to_string_pretty(payload)
    }
}
