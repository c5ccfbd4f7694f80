//! Player and champion filter for the match list.
//!
//! The champion filter depends on the player filter: its choices are the
//! selected player's champion pool, and it is cleared whenever the player
//! changes. Every transition goes through [`FilterState::reduce`].

use super::aggregate::{find_player, PlayerAggregate};
use super::predicate::match_contains;
use crate::api::models::MatchRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSlot<T> {
    pub expanded: bool,
    pub value: Option<T>,
}

impl<T> Default for FilterSlot<T> {
    fn default() -> Self {
        FilterSlot {
            expanded: false,
            value: None,
        }
    }
}

impl<T> FilterSlot<T> {
    fn collapsed(value: Option<T>) -> Self {
        FilterSlot {
            expanded: false,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetPlayerAndChampionFilter(Option<PlayerAggregate>, Option<String>),
    SetPlayerFilter(Option<PlayerAggregate>),
    TogglePlayerFilter,
    SetChampionFilter(Option<String>),
    ToggleChampionFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub player_filter: FilterSlot<PlayerAggregate>,
    pub champion_filter: FilterSlot<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the state from route-style parameters. Unknown accounts and
    /// champions outside the player's pool fall back to no filter.
    pub fn from_route(
        players: &[PlayerAggregate],
        account_id: Option<&str>,
        champion: Option<&str>,
    ) -> Self {
        let player = account_id.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(id) => {
                let found = find_player(players, id).cloned();
                if found.is_none() {
                    log::warn!("no player with account id {}, showing all matches", id);
                }
                found
            }
            Err(_) => {
                log::warn!("account id '{}' is not numeric, ignoring player filter", raw);
                None
            }
        });

        let champion = champion.map(str::trim).filter(|c| !c.is_empty());
        if let (None, Some(champion)) = (&player, champion) {
            log::warn!("champion '{}' ignored without a player filter", champion);
        }

        Self::new().reduce(FilterAction::SetPlayerAndChampionFilter(
            player,
            champion.map(str::to_string),
        ))
    }

    pub fn reduce(self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetPlayerAndChampionFilter(player, champion) => {
                let champion = Self::in_pool(player.as_ref(), champion);
                FilterState {
                    player_filter: FilterSlot::collapsed(player),
                    champion_filter: FilterSlot::collapsed(champion),
                }
            }
            FilterAction::SetPlayerFilter(player) => {
                let current = self.player_filter.value.as_ref().map(|p| p.account_id);
                if current == player.as_ref().map(|p| p.account_id) {
                    return self;
                }
                FilterState {
                    player_filter: FilterSlot::collapsed(player),
                    champion_filter: FilterSlot::collapsed(None),
                }
            }
            FilterAction::TogglePlayerFilter => FilterState {
                player_filter: FilterSlot {
                    expanded: !self.player_filter.expanded,
                    value: self.player_filter.value,
                },
                champion_filter: FilterSlot {
                    expanded: false,
                    value: self.champion_filter.value,
                },
            },
            FilterAction::SetChampionFilter(champion) => {
                let champion = Self::in_pool(self.player_filter.value.as_ref(), champion);
                FilterState {
                    player_filter: FilterSlot::collapsed(self.player_filter.value),
                    champion_filter: FilterSlot::collapsed(champion),
                }
            }
            FilterAction::ToggleChampionFilter => FilterState {
                player_filter: FilterSlot {
                    expanded: false,
                    value: self.player_filter.value,
                },
                champion_filter: FilterSlot {
                    expanded: !self.champion_filter.expanded,
                    value: self.champion_filter.value,
                },
            },
        }
    }

    fn in_pool(player: Option<&PlayerAggregate>, champion: Option<String>) -> Option<String> {
        let champion = champion?;
        if player?.has_champion(&champion) {
            Some(champion)
        } else {
            log::warn!("champion '{}' is not in the selected player's pool", champion);
            None
        }
    }

    pub fn account_id(&self) -> Option<u64> {
        self.player_filter.value.as_ref().map(|p| p.account_id)
    }

    pub fn champion(&self) -> Option<&str> {
        self.champion_filter.value.as_deref()
    }

    /// Choices a champion dropdown would offer.
    pub fn champion_choices(&self) -> &[String] {
        self.player_filter
            .value
            .as_ref()
            .map(|p| p.champions.as_slice())
            .unwrap_or_default()
    }

    pub fn matches(&self, game: &MatchRecord) -> bool {
        match_contains(game, self.account_id(), self.champion())
    }

    pub fn apply<'a>(&self, matches: &'a [MatchRecord]) -> Vec<&'a MatchRecord> {
        matches.iter().filter(|game| self.matches(game)).collect()
    }
}
