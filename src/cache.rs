use crate::analysis::aggregate::{derive_aggregates, PlayerAggregate};
use crate::api::models::{ChampionStats, MatchRecord, PersonStats};
use crate::error::AppError;

/// Where the dashboard gets its data from. Implemented by the HTTP client;
/// tests plug in fixtures.
pub trait StatsSource {
    fn get_matches(&self) -> Result<Vec<MatchRecord>, AppError>;
    fn get_player_stats(&self) -> Result<Vec<PersonStats>, AppError>;
    fn get_person_stats(&self) -> Result<Vec<PersonStats>, AppError>;
    fn get_champion_stats(&self) -> Result<Vec<ChampionStats>, AppError>;
}

/// Matches together with the player pools derived from them.
#[derive(Debug, Clone, Copy)]
pub struct MatchSnapshot<'a> {
    pub matches: &'a [MatchRecord],
    pub players: &'a [PlayerAggregate],
}

/// Fetch-once cache for one process. Nothing is ever invalidated; a failed
/// fetch leaves the slot empty so a later call can try again.
pub struct DashboardCache<S> {
    source: S,
    matches: Option<Vec<MatchRecord>>,
    players: Option<Vec<PlayerAggregate>>,
    player_stats: Option<Vec<PersonStats>>,
    person_stats: Option<Vec<PersonStats>>,
    champion_stats: Option<Vec<ChampionStats>>,
}

impl<S: StatsSource> DashboardCache<S> {
    pub fn new(source: S) -> Self {
        DashboardCache {
            source,
            matches: None,
            players: None,
            player_stats: None,
            person_stats: None,
            champion_stats: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.matches.is_some()
    }

    pub fn matches(&mut self) -> Result<&[MatchRecord], AppError> {
        if self.matches.is_none() {
            let matches = self.source.get_matches()?;
            log::info!("loaded {} matches", matches.len());
            self.matches = Some(matches);
        }
        Ok(self.matches.as_deref().unwrap_or_default())
    }

    pub fn players(&mut self) -> Result<&[PlayerAggregate], AppError> {
        if self.players.is_none() {
            let players = derive_aggregates(self.matches()?);
            log::debug!("derived {} player pools", players.len());
            self.players = Some(players);
        }
        Ok(self.players.as_deref().unwrap_or_default())
    }

    pub fn snapshot(&mut self) -> Result<MatchSnapshot<'_>, AppError> {
        self.players()?;
        Ok(MatchSnapshot {
            matches: self.matches.as_deref().unwrap_or_default(),
            players: self.players.as_deref().unwrap_or_default(),
        })
    }

    pub fn player_stats(&mut self) -> Result<&[PersonStats], AppError> {
        if self.player_stats.is_none() {
            self.player_stats = Some(self.source.get_player_stats()?);
        }
        Ok(self.player_stats.as_deref().unwrap_or_default())
    }

    pub fn person_stats(&mut self) -> Result<&[PersonStats], AppError> {
        if self.person_stats.is_none() {
            self.person_stats = Some(self.source.get_person_stats()?);
        }
        Ok(self.person_stats.as_deref().unwrap_or_default())
    }

    pub fn champion_stats(&mut self) -> Result<&[ChampionStats], AppError> {
        if self.champion_stats.is_none() {
            self.champion_stats = Some(self.source.get_champion_stats()?);
        }
        Ok(self.champion_stats.as_deref().unwrap_or_default())
    }
}
