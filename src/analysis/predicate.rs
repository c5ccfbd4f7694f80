use crate::api::models::MatchRecord;

/// True when no account is given, or when one participant has that account
/// (and, if given, was playing that champion).
pub fn match_contains(game: &MatchRecord, account_id: Option<u64>, champion: Option<&str>) -> bool {
    let Some(account_id) = account_id else {
        return true;
    };

    game.participants().any(|p| {
        p.account_id == account_id && champion.map_or(true, |champion| p.champion == champion)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{ParticipantRecord, TeamRecord};

    fn participant(account_id: u64, champion: &str) -> ParticipantRecord {
        ParticipantRecord {
            account_id,
            champion: champion.to_string(),
            ..Default::default()
        }
    }

    fn game() -> MatchRecord {
        MatchRecord {
            match_id: 1,
            blue_side: TeamRecord {
                players: vec![participant(1, "Ahri"), participant(2, "Zed")],
                ..Default::default()
            },
            red_side: TeamRecord {
                is_red_side: true,
                players: vec![participant(3, "Lux")],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn no_account_matches_everything() {
        assert!(match_contains(&game(), None, None));
        assert!(match_contains(&game(), None, Some("Teemo")));
    }

    #[test]
    fn account_on_either_side() {
        assert!(match_contains(&game(), Some(1), None));
        assert!(match_contains(&game(), Some(3), None));
        assert!(!match_contains(&game(), Some(4), None));
        assert!(!match_contains(&game(), Some(4), Some("Ahri")));
    }

    #[test]
    fn champion_must_belong_to_the_same_participant() {
        assert!(match_contains(&game(), Some(1), Some("Ahri")));
        // Zed was played by a teammate, not by account 1
        assert!(!match_contains(&game(), Some(1), Some("Zed")));
    }
}
