use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Success envelope: every GET answers `{"res": ...}`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub res: T,
}

/// Failure body: `{"error": "..."}` alongside a 4xx/5xx status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitMatchResponse {
    pub date: serde_json::Value,
}

/// SQLite hands booleans back as 0/1, so accept either form.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    Ok(match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => b,
        BoolOrInt::Int(n) => n != 0,
    })
}

/// Match dates come from a Python `timestamp()`, which may serialize as a float.
fn flexible_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrFloat {
        Int(i64),
        Float(f64),
    }

    Ok(match IntOrFloat::deserialize(deserializer)? {
        IntOrFloat::Int(n) => n,
        IntOrFloat::Float(f) => f as i64,
    })
}

// getMatches response

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: u64,
    /// Unix timestamp; the server stores seconds.
    #[serde(default, deserialize_with = "flexible_timestamp")]
    pub date: i64,
    /// Game length in seconds.
    #[serde(default)]
    pub length: i64,
    #[serde(deserialize_with = "flexible_bool")]
    pub red_side_won: bool,
    pub red_side: TeamRecord,
    pub blue_side: TeamRecord,
}

impl MatchRecord {
    pub fn teams(&self) -> [&TeamRecord; 2] {
        [&self.blue_side, &self.red_side]
    }

    pub fn participants(&self) -> impl Iterator<Item = &ParticipantRecord> {
        self.teams().into_iter().flat_map(|team| team.players.iter())
    }

    pub fn winner(&self) -> &TeamRecord {
        if self.red_side_won {
            &self.red_side
        } else {
            &self.blue_side
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    #[serde(deserialize_with = "flexible_bool")]
    pub is_red_side: bool,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub towers: u32,
    #[serde(default)]
    pub dragons: u32,
    #[serde(default)]
    pub barons: u32,
    #[serde(default)]
    pub inhibs: u32,
    #[serde(default)]
    pub ban0: String,
    #[serde(default)]
    pub ban1: String,
    #[serde(default)]
    pub ban2: String,
    #[serde(default)]
    pub ban3: String,
    #[serde(default)]
    pub ban4: String,
    #[serde(default)]
    pub players: Vec<ParticipantRecord>,
}

impl TeamRecord {
    /// Filled ban slots, in pick order.
    pub fn bans(&self) -> Vec<&str> {
        [&self.ban0, &self.ban1, &self.ban2, &self.ban3, &self.ban4]
            .into_iter()
            .map(String::as_str)
            .filter(|ban| !ban.is_empty())
            .collect()
    }

    pub fn side_name(&self) -> &'static str {
        if self.is_red_side {
            "Red"
        } else {
            "Blue"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    #[serde(rename = "summonerName", alias = "name", default)]
    pub name: String,
    pub account_id: u64,
    pub champion: String,
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub icon_id: Option<u32>,

    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub cs: u32,
    #[serde(default)]
    pub kp: u32,
    #[serde(default)]
    pub dmg_dealt: u32,
    #[serde(default)]
    pub dmg_taken: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub healing: u32,
    #[serde(default)]
    pub vision: u32,
    #[serde(default)]
    pub cc_time: u32,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub first_blood: bool,
    #[serde(default)]
    pub turrets: u32,
    #[serde(default)]
    pub inhibs: u32,

    #[serde(default)]
    pub doubles: u32,
    #[serde(default)]
    pub triples: u32,
    #[serde(default)]
    pub quadras: u32,
    #[serde(default)]
    pub pentas: u32,

    #[serde(default)]
    pub spell1: String,
    #[serde(default)]
    pub spell2: String,
    #[serde(default)]
    pub item0: u32,
    #[serde(default)]
    pub item1: u32,
    #[serde(default)]
    pub item2: u32,
    #[serde(default)]
    pub item3: u32,
    #[serde(default)]
    pub item4: u32,
    #[serde(default)]
    pub item5: u32,
    #[serde(default)]
    pub item6: u32,
    #[serde(default)]
    pub key_stone_url: String,
}

impl ParticipantRecord {
    /// Non-empty item slots.
    pub fn items(&self) -> Vec<u32> {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
        .into_iter()
        .filter(|item| *item != 0)
        .collect()
    }

    pub fn kda(&self) -> f64 {
        crate::analysis::compare::kda_ratio(self.kills as f64, self.deaths as f64, self.assists as f64)
    }
}

// getPlayerStats / getPersonStats / getChampionStats responses

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatLine {
    pub wins: u32,
    pub no_games: u32,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    pub avg_cs: f64,
    pub avg_kp: f64,
    pub avg_dmg_dealt: f64,
    pub avg_dmg_taken: f64,
    pub avg_gold: f64,
    pub ban_rate: Option<f64>,

    pub doubles: u32,
    pub triples: u32,
    pub quadras: u32,
    pub pentas: u32,
    pub turrets: u32,
    pub inhibs: u32,
    pub first_blood: u32,
}

impl StatLine {
    pub fn win_rate(&self) -> f64 {
        if self.no_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.no_games as f64
        }
    }

    pub fn losses(&self) -> u32 {
        self.no_games.saturating_sub(self.wins)
    }

    pub fn kda(&self) -> f64 {
        crate::analysis::compare::kda_ratio(self.avg_kills, self.avg_deaths, self.avg_assists)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChampionStatLine {
    pub champion: String,
    #[serde(flatten)]
    pub stats: StatLine,
}

/// One row of `/getPersonStats` (grouped by alias) or `/getPlayerStats`
/// (grouped by account).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStats {
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub icon_id: Option<u32>,
    pub all_avgs: StatLine,
    #[serde(default)]
    pub champion_avgs: Vec<ChampionStatLine>,
    #[serde(default)]
    pub accounts: BTreeMap<u64, String>,
}

impl PersonStats {
    /// Alias if one was assigned, otherwise the summoner name.
    pub fn display_name(&self) -> &str {
        self.person_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.summoner_name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonChampionLine {
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub icon_id: Option<u32>,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl PersonChampionLine {
    pub fn display_name(&self) -> &str {
        self.person_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.summoner_name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStats {
    pub champion: String,
    pub all_avgs: StatLine,
    #[serde(default, alias = "personAvgs")]
    pub player_avgs: Vec<PersonChampionLine>,
}
