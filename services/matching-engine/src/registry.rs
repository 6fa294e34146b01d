//! Match registry
//!
//! Process-wide mapping of contests to their two outcomes and to the
//! per-outcome order books. One reader/writer lock guards the whole
//! registry; it is held only for the lookup or insert itself and never
//! while a book lock is taken, keeping it out of the matching hot path.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;
use types::errors::RegistryError;
use types::ids::{MatchId, TeamId};
use types::order::Order;

use crate::book::OrderBook;

#[derive(Default)]
struct RegistryInner {
    /// Frozen at registration.
    teams: HashMap<MatchId, (TeamId, TeamId)>,
    /// Lazily populated on the first order touching a `(match, team)` pair.
    books: HashMap<MatchId, HashMap<TeamId, Arc<OrderBook>>>,
}

/// Both books of a contest, resolved for one submitted order.
pub struct BookPair {
    pub team: TeamId,
    pub book: Arc<OrderBook>,
    pub opposing_team: TeamId,
    pub opposing_book: Arc<OrderBook>,
}

/// Registry of contests and their order books.
pub struct MatchRegistry {
    inner: RwLock<RegistryInner>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
        }
    }

    /// Register a contest with its two outcomes.
    ///
    /// Registering the same match id again with the identical team pair
    /// is idempotent; a different pair is rejected.
    pub fn register_match(
        &self,
        match_id: MatchId,
        team_a: TeamId,
        team_b: TeamId,
    ) -> Result<(), RegistryError> {
        if team_a == team_b {
            return Err(RegistryError::IdenticalTeams { match_id });
        }

        let mut inner = self.inner.write();
        if let Some(existing) = inner.teams.get(&match_id) {
            if *existing == (team_a.clone(), team_b.clone()) {
                return Ok(());
            }
            return Err(RegistryError::MatchAlreadyRegistered { match_id });
        }

        info!(%match_id, %team_a, %team_b, "match registered");
        inner
            .teams
            .insert(match_id.clone(), (team_a.clone(), team_b));
        inner.books.insert(match_id, HashMap::new());
        Ok(())
    }

    /// The two outcomes of a contest.
    pub fn teams(&self, match_id: &MatchId) -> Result<(TeamId, TeamId), RegistryError> {
        let inner = self.inner.read();
        inner
            .teams
            .get(match_id)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownMatch {
                match_id: match_id.clone(),
            })
    }

    /// The other outcome of a contest.
    pub fn opposing_team(
        &self,
        match_id: &MatchId,
        team_id: &TeamId,
    ) -> Result<TeamId, RegistryError> {
        let (team_a, team_b) = self.teams(match_id)?;
        if *team_id == team_a {
            Ok(team_b)
        } else if *team_id == team_b {
            Ok(team_a)
        } else {
            Err(RegistryError::UnknownTeam {
                match_id: match_id.clone(),
                team_id: team_id.clone(),
            })
        }
    }

    /// Ingress validation: the order must reference a registered contest
    /// and one of its two outcomes.
    pub fn validate_order(&self, order: &Order) -> Result<(), RegistryError> {
        self.opposing_team(&order.match_id, &order.team_id)
            .map(|_| ())
    }

    /// The book for one `(match, team)` pair, created on first touch.
    pub fn book(
        &self,
        match_id: &MatchId,
        team_id: &TeamId,
    ) -> Result<Arc<OrderBook>, RegistryError> {
        self.opposing_team(match_id, team_id)?;

        let mut inner = self.inner.write();
        let books = inner.books.entry(match_id.clone()).or_default();
        Ok(Arc::clone(
            books.entry(team_id.clone()).or_insert_with(|| {
                Arc::new(OrderBook::new())
            }),
        ))
    }

    /// Resolve both books of a contest for an order on `team_id`,
    /// creating either on first touch. Single registry acquisition.
    pub fn book_pair(
        &self,
        match_id: &MatchId,
        team_id: &TeamId,
    ) -> Result<BookPair, RegistryError> {
        let opposing_team = self.opposing_team(match_id, team_id)?;

        let mut inner = self.inner.write();
        let books = inner.books.entry(match_id.clone()).or_default();
        let book = Arc::clone(
            books
                .entry(team_id.clone())
                .or_insert_with(|| Arc::new(OrderBook::new())),
        );
        let opposing_book = Arc::clone(
            books
                .entry(opposing_team.clone())
                .or_insert_with(|| Arc::new(OrderBook::new())),
        );

        Ok(BookPair {
            team: team_id.clone(),
            book,
            opposing_team,
            opposing_book,
        })
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
