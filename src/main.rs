use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use rchk_stats::analysis::compare::SortDescriptor;
use rchk_stats::analysis::filter::FilterState;
use rchk_stats::analysis::rankings::{
    rank_champions, rank_people, sort_names, CHAMPION_SORTS, PERSON_SORTS,
};
use rchk_stats::analysis::search::{champion_display_name, starts_with_ignore_case};
use rchk_stats::api::client::RchkApiClient;
use rchk_stats::api::upload::{decode_match_file, MatchFileKind};
use rchk_stats::cache::DashboardCache;
use rchk_stats::config::Config;
use rchk_stats::display::output::{
    display_champion_breakdown, display_champions, display_error, display_info, display_matches,
    display_people, display_person_breakdown, display_pools, display_success,
};
use rchk_stats::error::AppError;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "RCHK Championships")]
#[command(about = "Browse RCHK custom-game statistics from the terminal", long_about = None)]
struct Cli {
    /// API base URL (overrides RCHK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct SortArgs {
    /// Sort by one of the named columns (default: winrate)
    #[arg(short, long)]
    sort: Option<String>,

    /// Flip the sort direction
    #[arg(short, long)]
    reverse: bool,

    /// Only show names starting with this text
    #[arg(long, default_value = "")]
    search: String,

    /// Also print the breakdown of the first entry starting with this name
    #[arg(short, long)]
    expand: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stats grouped by person (accounts sharing an alias)
    People(SortArgs),
    /// Stats grouped by account
    Players(SortArgs),
    /// Stats grouped by champion
    Champions(SortArgs),
    /// Match history, optionally for one account and champion
    Matches {
        /// Account id to filter on
        #[arg(short, long)]
        player: Option<String>,

        /// Champion key (requires --player)
        #[arg(short, long)]
        champion: Option<String>,

        /// Show at most this many matches
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Champion pools derived from the match history
    Pools,
    /// Assign a person alias to an account
    Name {
        account_id: u64,
        person_name: String,
    },
    /// Submit a saved match-history page (.html or .mht); reads stdin without a file
    Submit { file: Option<PathBuf> },
    /// Current League patch used by the server
    Version,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        let message = match e.downcast_ref::<AppError>() {
            Some(app_error) => app_error.user_message(),
            None => format!("{:#}", e),
        };
        display_error(&message);
        std::process::exit(1);
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn pick_sort<T>(descriptors: &[SortDescriptor<T>], args: &SortArgs) -> Result<SortDescriptor<T>, AppError> {
    let sort = match &args.sort {
        Some(name) => SortDescriptor::find(descriptors, name).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "unknown sort '{}', expected one of: {}",
                name,
                sort_names(descriptors).join(", ")
            ))
        })?,
        None => descriptors[0],
    };
    Ok(if args.reverse { sort.reversed() } else { sort })
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_url(api_url);
    }
    log::debug!("using API at {}", config.api_url);

    let client = RchkApiClient::new(config);
    let mut cache = DashboardCache::new(client);

    match cli.command {
        Command::People(args) => {
            let sort = pick_sort(PERSON_SORTS, &args)?;
            let pb = spinner("Fetching people");
            let people = cache.person_stats();
            pb.finish_and_clear();

            let ranked = rank_people(people?, &sort, &args.search);
            display_people("PEOPLE", &ranked, sort.name, sort.desc);
            if let Some(name) = &args.expand {
                match ranked.iter().find(|p| starts_with_ignore_case(p.display_name(), name)) {
                    Some(person) => display_person_breakdown(person),
                    None => display_info(&format!("Nobody named '{}' in this list", name)),
                }
            }
        }
        Command::Players(args) => {
            let sort = pick_sort(PERSON_SORTS, &args)?;
            let pb = spinner("Fetching players");
            let players = cache.player_stats();
            pb.finish_and_clear();

            let ranked = rank_people(players?, &sort, &args.search);
            display_people("PLAYERS", &ranked, sort.name, sort.desc);
            if let Some(name) = &args.expand {
                match ranked.iter().find(|p| starts_with_ignore_case(p.display_name(), name)) {
                    Some(player) => display_person_breakdown(player),
                    None => display_info(&format!("No account named '{}' in this list", name)),
                }
            }
        }
        Command::Champions(args) => {
            let sort = pick_sort(CHAMPION_SORTS, &args)?;
            let pb = spinner("Fetching champions");
            let champions = cache.champion_stats();
            pb.finish_and_clear();

            let ranked = rank_champions(champions?, &sort, &args.search);
            display_champions(&ranked, sort.name, sort.desc);
            if let Some(name) = &args.expand {
                match ranked
                    .iter()
                    .find(|c| starts_with_ignore_case(&champion_display_name(&c.champion), name))
                {
                    Some(champion) => display_champion_breakdown(champion),
                    None => display_info(&format!("No champion named '{}' in this list", name)),
                }
            }
        }
        Command::Matches {
            player,
            champion,
            limit,
        } => {
            let pb = spinner("Fetching matches");
            let snapshot = cache.snapshot();
            pb.finish_and_clear();
            let snapshot = snapshot?;

            let filter = FilterState::from_route(snapshot.players, player.as_deref(), champion.as_deref());
            let mut shown = filter.apply(snapshot.matches);
            if let Some(limit) = limit {
                shown.truncate(limit);
            }
            display_matches(&shown, &filter);
        }
        Command::Pools => {
            let pb = spinner("Fetching matches");
            let players = cache.players();
            pb.finish_and_clear();
            display_pools(players?);
        }
        Command::Name {
            account_id,
            person_name,
        } => {
            let res = cache.source().set_account_person_name(account_id, &person_name)?;
            log::debug!("alias response: {}", res);
            display_success(&format!("Account {} now belongs to {}", account_id, person_name.trim()));
        }
        Command::Submit { file } => {
            let html = match &file {
                Some(path) => read_match_file(path)?,
                None => {
                    let mut html = String::new();
                    std::io::stdin()
                        .read_to_string(&mut html)
                        .context("failed to read match HTML from stdin")?;
                    html
                }
            };

            display_info("Submitting match...");
            let submitted = cache.source().add_match_text(&html)?;
            display_success(&format!("Match added (date {})", submitted.date));
        }
        Command::Version => {
            let version = cache.source().get_league_version()?;
            display_info(&format!("League version: {}", version));
        }
    }

    Ok(())
}

fn read_match_file(path: &Path) -> anyhow::Result<String> {
    let kind = MatchFileKind::from_path(path)?;
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    log::debug!("decoding {} as {:?}", path.display(), kind);
    Ok(decode_match_file(kind, &bytes)?)
}
