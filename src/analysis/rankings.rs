use super::compare::{compare_by, compare_names, sort_with_fallbacks, SortDescriptor};
use super::search::{champion_display_name, starts_with_ignore_case};
use crate::api::models::{ChampionStats, PersonStats};

pub type PersonSort = SortDescriptor<PersonStats>;
pub type ChampionSort = SortDescriptor<ChampionStats>;

pub const PERSON_WIN_RATE: PersonSort =
    PersonSort::new("winrate", |a, b| compare_by(a, b, |p| p.all_avgs.win_rate()), true);
pub const PERSON_KDA: PersonSort =
    PersonSort::new("kda", |a, b| compare_by(a, b, |p| p.all_avgs.kda()), true);

/// Sorts offered for people and accounts, default first.
pub const PERSON_SORTS: &[PersonSort] = &[
    PERSON_WIN_RATE,
    PERSON_KDA,
    PersonSort::new("cs", |a, b| compare_by(a, b, |p| p.all_avgs.avg_cs), true),
    PersonSort::new("kp", |a, b| compare_by(a, b, |p| p.all_avgs.avg_kp), true),
    PersonSort::new("dmg dealt", |a, b| compare_by(a, b, |p| p.all_avgs.avg_dmg_dealt), true),
    PersonSort::new("dmg taken", |a, b| compare_by(a, b, |p| p.all_avgs.avg_dmg_taken), true),
    PersonSort::new("gold", |a, b| compare_by(a, b, |p| p.all_avgs.avg_gold), true),
    PersonSort::new("name", |a, b| compare_names(a.display_name(), b.display_name()), false),
    PersonSort::new("champs played", |a, b| compare_by(a, b, |p| p.champion_avgs.len() as f64), true),
    PersonSort::new("games played", |a, b| compare_by(a, b, |p| p.all_avgs.no_games as f64), true),
];

pub const PERSON_FALLBACKS: &[PersonSort] = &[PERSON_WIN_RATE, PERSON_KDA];

pub const CHAMPION_WIN_RATE: ChampionSort =
    ChampionSort::new("winrate", |a, b| compare_by(a, b, |c| c.all_avgs.win_rate()), true);
pub const CHAMPION_GAMES: ChampionSort =
    ChampionSort::new("games played", |a, b| compare_by(a, b, |c| c.all_avgs.no_games as f64), true);
pub const CHAMPION_KDA: ChampionSort =
    ChampionSort::new("kda", |a, b| compare_by(a, b, |c| c.all_avgs.kda()), true);

pub const CHAMPION_SORTS: &[ChampionSort] = &[
    CHAMPION_WIN_RATE,
    ChampionSort::new("banrate", |a, b| compare_by(a, b, |c| c.all_avgs.ban_rate.unwrap_or(0.0)), true),
    CHAMPION_GAMES,
    ChampionSort::new("wins", |a, b| compare_by(a, b, |c| c.all_avgs.wins as f64), true),
    CHAMPION_KDA,
    ChampionSort::new("cs", |a, b| compare_by(a, b, |c| c.all_avgs.avg_cs), true),
    ChampionSort::new("kp", |a, b| compare_by(a, b, |c| c.all_avgs.avg_kp), true),
    ChampionSort::new("dmg dealt", |a, b| compare_by(a, b, |c| c.all_avgs.avg_dmg_dealt), true),
    ChampionSort::new("dmg taken", |a, b| compare_by(a, b, |c| c.all_avgs.avg_dmg_taken), true),
    ChampionSort::new("gold", |a, b| compare_by(a, b, |c| c.all_avgs.avg_gold), true),
    ChampionSort::new("players", |a, b| compare_by(a, b, |c| c.player_avgs.len() as f64), true),
    ChampionSort::new("name", |a, b| compare_names(&a.champion, &b.champion), false),
];

pub const CHAMPION_FALLBACKS: &[ChampionSort] =
    &[CHAMPION_WIN_RATE, CHAMPION_GAMES, CHAMPION_KDA];

pub fn sort_names<T>(descriptors: &[SortDescriptor<T>]) -> Vec<&'static str> {
    descriptors.iter().map(|d| d.name).collect()
}

/// Filters by name prefix, then orders with the people tie-break chain.
pub fn rank_people(
    people: &[PersonStats],
    sort: &PersonSort,
    search: &str,
) -> Vec<PersonStats> {
    let mut ranked: Vec<PersonStats> = people
        .iter()
        .filter(|p| starts_with_ignore_case(p.display_name(), search))
        .cloned()
        .collect();
    sort_with_fallbacks(&mut ranked, sort, PERSON_FALLBACKS);
    ranked
}

/// Search matches the display name ("Miss Fortune"), not the catalog key.
pub fn rank_champions(
    champions: &[ChampionStats],
    sort: &ChampionSort,
    search: &str,
) -> Vec<ChampionStats> {
    let mut ranked: Vec<ChampionStats> = champions
        .iter()
        .filter(|c| starts_with_ignore_case(&champion_display_name(&c.champion), search))
        .cloned()
        .collect();
    sort_with_fallbacks(&mut ranked, sort, CHAMPION_FALLBACKS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::StatLine;

    fn person(name: &str, wins: u32, games: u32, deaths: f64) -> PersonStats {
        PersonStats {
            person_name: Some(name.to_string()),
            account_id: None,
            summoner_name: format!("{} smurf", name),
            icon_id: None,
            all_avgs: StatLine {
                wins,
                no_games: games,
                avg_kills: 5.0,
                avg_assists: 5.0,
                avg_deaths: deaths,
                ..Default::default()
            },
            champion_avgs: Vec::new(),
            accounts: Default::default(),
        }
    }

    fn champion(key: &str, wins: u32, games: u32) -> ChampionStats {
        ChampionStats {
            champion: key.to_string(),
            all_avgs: StatLine {
                wins,
                no_games: games,
                avg_deaths: 1.0,
                ..Default::default()
            },
            player_avgs: Vec::new(),
        }
    }

    fn names(people: &[PersonStats]) -> Vec<&str> {
        people.iter().map(|p| p.display_name()).collect()
    }

    #[test]
    fn win_rate_ties_break_on_kda() {
        let people = vec![person("low", 1, 2, 5.0), person("high", 1, 2, 1.0), person("top", 3, 3, 2.0)];
        let ranked = rank_people(&people, &PERSON_WIN_RATE, "");
        assert_eq!(names(&ranked), vec!["top", "high", "low"]);
    }

    #[test]
    fn deathless_player_leads_kda_sort() {
        let people = vec![person("a", 1, 2, 0.5), person("b", 0, 2, 0.0), person("c", 2, 2, 3.0)];
        let ranked = rank_people(&people, &PERSON_KDA, "");
        assert_eq!(ranked[0].display_name(), "b");
    }

    #[test]
    fn name_sort_is_ascending_and_searchable() {
        let people = vec![person("Viego main", 0, 1, 1.0), person("Vi", 0, 1, 1.0), person("Ahri", 0, 1, 1.0)];
        let sort = SortDescriptor::find(PERSON_SORTS, "name").unwrap();
        assert_eq!(names(&rank_people(&people, &sort, "")), vec!["Ahri", "Vi", "Viego main"]);
        assert_eq!(names(&rank_people(&people, &sort, "VI")), vec!["Vi", "Viego main"]);
        assert_eq!(names(&rank_people(&people, &sort.reversed(), "v")), vec!["Viego main", "Vi"]);
    }

    #[test]
    fn name_sort_and_search_use_the_shown_alias() {
        let mut unnamed = person("ignored", 0, 1, 1.0);
        unnamed.person_name = None;
        unnamed.summoner_name = "Mid Or Feed".to_string();
        let people = vec![person("Zoe", 0, 1, 1.0), unnamed, person("Bo", 0, 1, 1.0)];
        let sort = SortDescriptor::find(PERSON_SORTS, "name").unwrap();

        assert_eq!(names(&rank_people(&people, &sort, "")), vec!["Bo", "Mid Or Feed", "Zoe"]);
        // "Zoe smurf" is the summoner name behind the alias
        assert!(rank_people(&people, &sort, "zoe s").is_empty());
        assert_eq!(names(&rank_people(&people, &sort, "mid")), vec!["Mid Or Feed"]);
    }

    #[test]
    fn champions_fall_back_to_games_played() {
        let champions = vec![champion("Lux", 1, 2), champion("Zed", 2, 4), champion("MissFortune", 3, 3)];
        let ranked = rank_champions(&champions, &CHAMPION_WIN_RATE, "");
        let keys: Vec<_> = ranked.iter().map(|c| c.champion.as_str()).collect();
        assert_eq!(keys, vec!["MissFortune", "Zed", "Lux"]);

        let searched = rank_champions(&champions, &CHAMPION_WIN_RATE, "miss f");
        assert_eq!(searched.len(), 1);
    }

    #[test]
    fn every_sort_name_is_unique() {
        let mut people = sort_names(PERSON_SORTS);
        people.dedup();
        assert_eq!(people.len(), PERSON_SORTS.len());
        assert_eq!(sort_names(CHAMPION_SORTS).len(), 12);
    }
}
