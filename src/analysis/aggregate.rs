use crate::api::models::{MatchRecord, ParticipantRecord};
use std::collections::{BTreeSet, HashMap};

/// Champion pool of one account, derived from raw matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAggregate {
    pub account_id: u64,
    pub name: String,
    /// Deduplicated and sorted when built by `derive_aggregates`.
    pub champions: Vec<String>,
}

impl PlayerAggregate {
    pub fn has_champion(&self, champion: &str) -> bool {
        self.champions.iter().any(|c| c == champion)
    }
}

/// Groups every participant by account id. Output keeps first-appearance order.
pub fn derive_aggregates(matches: &[MatchRecord]) -> Vec<PlayerAggregate> {
    let mut order: Vec<u64> = Vec::new();
    let mut groups: HashMap<u64, Vec<&ParticipantRecord>> = HashMap::new();

    for participant in matches.iter().flat_map(MatchRecord::participants) {
        groups
            .entry(participant.account_id)
            .or_insert_with(|| {
                order.push(participant.account_id);
                Vec::new()
            })
            .push(participant);
    }

    order
        .into_iter()
        .filter_map(|account_id| {
            let records = groups.remove(&account_id)?;
            let first = records.first()?;
            // TODO: prefer the name from the most recent match once the API exposes renames.
            let name = first.name.clone();
            let champions: BTreeSet<&str> = records.iter().map(|p| p.champion.as_str()).collect();

            Some(PlayerAggregate {
                account_id,
                name,
                champions: champions.into_iter().map(str::to_string).collect(),
            })
        })
        .collect()
}

pub fn find_player(players: &[PlayerAggregate], account_id: u64) -> Option<&PlayerAggregate> {
    players.iter().find(|p| p.account_id == account_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::TeamRecord;
    use pretty_assertions::assert_eq;

    fn participant(account_id: u64, name: &str, champion: &str) -> ParticipantRecord {
        ParticipantRecord {
            account_id,
            name: name.to_string(),
            champion: champion.to_string(),
            ..Default::default()
        }
    }

    fn game(match_id: u64, blue: Vec<ParticipantRecord>, red: Vec<ParticipantRecord>) -> MatchRecord {
        MatchRecord {
            match_id,
            blue_side: TeamRecord {
                players: blue,
                ..Default::default()
            },
            red_side: TeamRecord {
                is_red_side: true,
                players: red,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn groups_champions_across_matches_and_sides() {
        let matches = vec![
            game(1, vec![participant(1, "A", "Zed")], vec![participant(2, "B", "Lux")]),
            game(2, vec![participant(2, "B", "Ahri")], vec![participant(1, "A", "Ahri")]),
            game(3, vec![participant(1, "A", "Zed")], vec![]),
        ];

        let aggregates = derive_aggregates(&matches);
        assert_eq!(
            aggregates,
            vec![
                PlayerAggregate {
                    account_id: 1,
                    name: "A".to_string(),
                    champions: vec!["Ahri".to_string(), "Zed".to_string()],
                },
                PlayerAggregate {
                    account_id: 2,
                    name: "B".to_string(),
                    champions: vec!["Ahri".to_string(), "Lux".to_string()],
                },
            ]
        );
    }

    #[test]
    fn first_seen_name_is_kept() {
        let matches = vec![
            game(1, vec![participant(9, "old name", "Vi")], vec![]),
            game(2, vec![participant(9, "new name", "Vi")], vec![]),
        ];
        let aggregates = derive_aggregates(&matches);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].name, "old name");
    }

    #[test]
    fn empty_input_gives_no_players() {
        assert!(derive_aggregates(&[]).is_empty());
    }

    #[test]
    fn champion_lookup() {
        let matches = vec![game(1, vec![participant(4, "D", "Vi"), participant(5, "E", "Viego")], vec![])];
        let aggregates = derive_aggregates(&matches);
        let d = find_player(&aggregates, 4).unwrap();
        assert!(d.has_champion("Vi"));
        assert!(!d.has_champion("Viego"));
        assert!(find_player(&aggregates, 6).is_none());
    }
}
