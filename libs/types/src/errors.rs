//! Error taxonomy shared across services

use crate::ids::{MatchId, TeamId};
use thiserror::Error;

/// Errors from match registry lookups and registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown match: {match_id}")]
    UnknownMatch { match_id: MatchId },

    #[error("unknown team {team_id} for match {match_id}")]
    UnknownTeam { match_id: MatchId, team_id: TeamId },

    #[error("match {match_id} already registered with different teams")]
    MatchAlreadyRegistered { match_id: MatchId },

    #[error("match {match_id} must have two distinct teams")]
    IdenticalTeams { match_id: MatchId },
}
