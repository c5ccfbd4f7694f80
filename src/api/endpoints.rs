// Paths relative to the configured API base URL

pub const MATCHES: &str = "/getMatches";
pub const PLAYER_STATS: &str = "/getPlayerStats";
pub const PERSON_STATS: &str = "/getPersonStats";
pub const CHAMPION_STATS: &str = "/getChampionStats";
pub const LEAGUE_VERSION: &str = "/getLeagueVersion";
pub const ADD_MATCH_TEXT: &str = "/addMatchText";

pub fn set_account_person_name(account_id: u64, person_name: &str) -> String {
    format!(
        "/setAccountPersonName/{}/personName/{}",
        account_id,
        person_name.replace(' ', "%20")
    )
}

/// Public match history page for a custom game.
pub fn match_history_link(match_id: u64) -> String {
    format!(
        "https://matchhistory.na.leagueoflegends.com/en/#match-details/NA1/{}/00000?tab=overview",
        match_id
    )
}
