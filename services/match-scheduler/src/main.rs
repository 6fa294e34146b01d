//! Match scheduler
//!
//! Registers a fresh contest with the matching engine every 60 seconds.
//! Registration calls carry a 5 second timeout; a failed call is logged
//! and the next tick tries again with a new match id.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};
use uuid::Uuid;

const TEAM_A: &str = "CSK";
const TEAM_B: &str = "MI";
const CREATE_INTERVAL: Duration = Duration::from_secs(60);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct RegisterMatchRequest {
    match_id: String,
    team_a: &'static str,
    team_b: &'static str,
}

#[derive(Debug, Deserialize)]
struct RegisterMatchResponse {
    status: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let registration_url = env::var("REGISTRATION_URL")
        .unwrap_or_else(|_| "http://localhost:50051/register-match".to_string());
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    info!(%registration_url, "match scheduler started; creating matches every 60s");

    let start = time::Instant::now() + CREATE_INTERVAL;
    let mut ticker = time::interval_at(start, CREATE_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if let Err(err) = create_and_register(&client, &registration_url).await {
            error!(error = %err, "failed to register match");
        }
    }
}

async fn create_and_register(
    client: &reqwest::Client,
    registration_url: &str,
) -> Result<(), anyhow::Error> {
    let request = RegisterMatchRequest {
        match_id: Uuid::new_v4().to_string(),
        team_a: TEAM_A,
        team_b: TEAM_B,
    };
    info!(
        match_id = %request.match_id,
        team_a = request.team_a,
        team_b = request.team_b,
        "creating match"
    );

    let response = client
        .post(registration_url)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;
    let body: RegisterMatchResponse = response.json().await?;

    info!(status = %body.status, "match registered");
    Ok(())
}
