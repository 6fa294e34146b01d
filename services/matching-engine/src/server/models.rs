use serde::{Deserialize, Serialize};
use types::ids::{MatchId, TeamId};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterMatchRequest {
    pub match_id: MatchId,
    pub team_a: TeamId,
    pub team_b: TeamId,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterMatchResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// "connected" or "inert"; inert means events are being dropped.
    pub publisher: String,
}
