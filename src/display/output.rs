use crate::analysis::aggregate::PlayerAggregate;
use crate::analysis::filter::FilterState;
use crate::analysis::search::champion_display_name;
use crate::api::endpoints::match_history_link;
use crate::api::models::{ChampionStats, MatchRecord, ParticipantRecord, PersonStats, StatLine, TeamRecord};
use chrono::DateTime;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PersonRow {
    #[tabled(rename = "#")]
    rank: String,
    name: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "W/L")]
    record: String,
    kda: String,
    #[tabled(rename = "k/d/a")]
    breakdown: String,
    cs: String,
    kp: String,
    #[tabled(rename = "dmg/min")]
    dmg_dealt: String,
    #[tabled(rename = "taken/min")]
    dmg_taken: String,
    #[tabled(rename = "gold/min")]
    gold: String,
}

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "W/L")]
    record: String,
    #[tabled(rename = "ban rate")]
    ban_rate: String,
    kda: String,
    cs: String,
    kp: String,
    #[tabled(rename = "gold/min")]
    gold: String,
    players: String,
}

#[derive(Tabled)]
struct BreakdownRow {
    name: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "W/L")]
    record: String,
    kda: String,
    cs: String,
    kp: String,
    medals: String,
}

#[derive(Tabled)]
struct ParticipantRow {
    side: String,
    player: String,
    champion: String,
    kda: String,
    #[tabled(rename = "k/d/a")]
    breakdown: String,
    cs: String,
    kp: String,
    gold: String,
    items: String,
}

#[derive(Tabled)]
struct PoolRow {
    account: String,
    name: String,
    champions: String,
}

pub fn format_kda(kda: f64, precision: usize) -> String {
    if kda.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.*}", precision, kda)
    }
}

pub fn format_win_rate(stats: &StatLine) -> String {
    format!("{:.0}%", stats.win_rate() * 100.0)
}

/// `MM:SS` below an hour, `HH:MM:SS` otherwise.
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Accepts Unix seconds, which the server stores, or milliseconds.
pub fn format_date(timestamp: i64) -> String {
    let millis = if timestamp.abs() < MILLIS_THRESHOLD {
        timestamp.saturating_mul(1000)
    } else {
        timestamp
    };
    DateTime::from_timestamp_millis(millis)
        .map(|date| date.format("%B %-d %Y, %-I:%M %p").to_string())
        .unwrap_or_else(|| "unknown date".to_string())
}

fn record(stats: &StatLine) -> String {
    format!("{}/{}", stats.wins.to_string().green(), stats.losses().to_string().red())
}

/// Non-zero medals only, biggest first.
fn medals(stats: &StatLine) -> String {
    [
        (stats.pentas, "penta"),
        (stats.quadras, "quadra"),
        (stats.triples, "triple"),
        (stats.doubles, "double"),
        (stats.turrets, "tower"),
        (stats.inhibs, "inhib"),
        (stats.first_blood, "first blood"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{} x{}", label, count))
    .collect::<Vec<_>>()
    .join(", ")
}

fn person_row(rank: usize, person: &PersonStats) -> PersonRow {
    let stats = &person.all_avgs;
    PersonRow {
        rank: format!("#{}", rank),
        name: person.display_name().to_string(),
        win_rate: format_win_rate(stats),
        record: record(stats),
        kda: format_kda(stats.kda(), 2),
        breakdown: format!("{:.1}/{:.1}/{:.1}", stats.avg_kills, stats.avg_deaths, stats.avg_assists),
        cs: format!("{:.1}", stats.avg_cs),
        kp: format!("{:.0}%", stats.avg_kp),
        dmg_dealt: format!("{:.0}", stats.avg_dmg_dealt),
        dmg_taken: format!("{:.0}", stats.avg_dmg_taken),
        gold: format!("{:.0}", stats.avg_gold),
    }
}

pub fn display_people(title: &str, people: &[PersonStats], sort_name: &str, desc: bool) {
    println!(
        "\n{}",
        format!("📊 {} (sorted by {} {})", title, sort_name, if desc { "↓" } else { "↑" })
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    if people.is_empty() {
        println!("{}", "Nobody matches that search".yellow());
        return;
    }

    let rows: Vec<PersonRow> = people
        .iter()
        .enumerate()
        .map(|(idx, p)| person_row(idx + 1, p))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

/// Per-champion lines of one person, plus the accounts behind the alias.
pub fn display_person_breakdown(person: &PersonStats) {
    println!("{}", format!("🎮 {}", person.display_name()).bold().cyan());
    if !person.accounts.is_empty() {
        let accounts: Vec<String> = person
            .accounts
            .iter()
            .map(|(id, name)| format!("{} ({})", name, id))
            .collect();
        println!("   accounts: {}", accounts.join(", "));
    }

    let rows: Vec<BreakdownRow> = person
        .champion_avgs
        .iter()
        .map(|c| BreakdownRow {
            name: champion_display_name(&c.champion),
            win_rate: format_win_rate(&c.stats),
            record: record(&c.stats),
            kda: format_kda(c.stats.kda(), 1),
            cs: format!("{:.1}", c.stats.avg_cs),
            kp: format!("{:.0}%", c.stats.avg_kp),
            medals: medals(&c.stats),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champions(champions: &[ChampionStats], sort_name: &str, desc: bool) {
    println!(
        "\n{}",
        format!("🏆 CHAMPIONS (sorted by {} {})", sort_name, if desc { "↓" } else { "↑" })
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    if champions.is_empty() {
        println!("{}", "No champion matches that search".yellow());
        return;
    }

    let rows: Vec<ChampionRow> = champions
        .iter()
        .enumerate()
        .map(|(idx, c)| ChampionRow {
            rank: format!("#{}", idx + 1),
            champion: champion_display_name(&c.champion),
            win_rate: format_win_rate(&c.all_avgs),
            record: record(&c.all_avgs),
            ban_rate: format!("{:.0}%", c.all_avgs.ban_rate.unwrap_or(0.0) * 100.0),
            kda: format_kda(c.all_avgs.kda(), 2),
            cs: format!("{:.1}", c.all_avgs.avg_cs),
            kp: format!("{:.0}%", c.all_avgs.avg_kp),
            gold: format!("{:.0}", c.all_avgs.avg_gold),
            players: c.player_avgs.len().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champion_breakdown(champion: &ChampionStats) {
    println!("{}", format!("🎮 {}", champion_display_name(&champion.champion)).bold().cyan());

    let rows: Vec<BreakdownRow> = champion
        .player_avgs
        .iter()
        .map(|p| BreakdownRow {
            name: p.display_name().to_string(),
            win_rate: format_win_rate(&p.stats),
            record: record(&p.stats),
            kda: format_kda(p.stats.kda(), 1),
            cs: format!("{:.1}", p.stats.avg_cs),
            kp: format!("{:.0}%", p.stats.avg_kp),
            medals: medals(&p.stats),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn participant_row(team: &TeamRecord, player: &ParticipantRecord, highlighted: bool) -> ParticipantRow {
    let name = if highlighted {
        player.name.bold().yellow().to_string()
    } else {
        player.name.clone()
    };
    let items: Vec<String> = player.items().iter().map(u32::to_string).collect();

    ParticipantRow {
        side: team.side_name().to_string(),
        player: name,
        champion: champion_display_name(&player.champion),
        kda: format_kda(player.kda(), 1),
        breakdown: format!("{}/{}/{}", player.kills, player.deaths, player.assists),
        cs: player.cs.to_string(),
        kp: format!("{}%", player.kp),
        gold: player.gold.to_string(),
        items: items.join(" "),
    }
}

fn team_summary(team: &TeamRecord, won: bool) -> String {
    let result = if won { "WIN".green() } else { "LOSS".red() };
    let bans = team.bans();
    format!(
        "{} {}  kills {} · towers {} · dragons {} · barons {} · inhibs {}{}",
        team.side_name().bold(),
        result,
        team.kills,
        team.towers,
        team.dragons,
        team.barons,
        team.inhibs,
        if bans.is_empty() {
            String::new()
        } else {
            format!(" · bans {}", bans.join(", "))
        }
    )
}

pub fn display_matches(matches: &[&MatchRecord], filter: &FilterState) {
    let heading = match (&filter.player_filter.value, filter.champion()) {
        (Some(player), Some(champion)) => format!(
            "⚔️  MATCHES of {} on {} ({})",
            player.name,
            champion_display_name(champion),
            matches.len()
        ),
        (Some(player), None) => format!("⚔️  MATCHES of {} ({})", player.name, matches.len()),
        _ => format!("⚔️  MATCHES ({})", matches.len()),
    };
    println!("\n{}", heading.bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if matches.is_empty() {
        println!("{}", "No matches for this filter".yellow());
        return;
    }

    let highlighted = filter.account_id();
    for game in matches {
        println!(
            "{} {}  {}",
            format_date(game.date).bold(),
            format!("({})", format_duration(game.length)).dimmed(),
            match_history_link(game.match_id).dimmed()
        );

        let mut rows = Vec::new();
        for team in game.teams() {
            println!("  {}", team_summary(team, team.is_red_side == game.red_side_won));
            rows.extend(
                team.players
                    .iter()
                    .map(|p| participant_row(team, p, Some(p.account_id) == highlighted)),
            );
        }

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }
}

pub fn display_pools(players: &[PlayerAggregate]) {
    println!("\n{}", "👥 PLAYER CHAMPION POOLS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<PoolRow> = players
        .iter()
        .map(|p| PoolRow {
            account: p.account_id.to_string(),
            name: p.name.clone(),
            champions: p
                .champions
                .iter()
                .map(|c| champion_display_name(c))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(59), "00:59");
        assert_eq!(format_duration(1834), "30:34");
        assert_eq!(format_duration(3723), "01:02:03");
        assert_eq!(format_duration(-5), "00:00");
    }

    #[test]
    fn kda_formatting() {
        assert_eq!(format_kda(f64::INFINITY, 2), "∞");
        assert_eq!(format_kda(2.3456, 2), "2.35");
        assert_eq!(format_kda(2.3456, 1), "2.3");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date(1_622_505_600_000), "June 1 2021, 12:00 AM");
    }

    #[test]
    fn dates_stored_as_seconds() {
        assert_eq!(format_date(1_622_505_600), "June 1 2021, 12:00 AM");
        assert_eq!(format_date(1_622_505_600), format_date(1_622_505_600_000));
    }

    #[test]
    fn medals_skip_zero_counts() {
        let stats = StatLine {
            pentas: 1,
            turrets: 3,
            ..Default::default()
        };
        assert_eq!(medals(&stats), "penta x1, tower x3");
        assert_eq!(medals(&StatLine::default()), "");
    }
}
