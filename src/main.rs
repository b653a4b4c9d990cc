use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pick_two::api::{build_router, state::AppState};
use pick_two::calculate::byes::bye_statuses;
use pick_two::calculate::eligibility::{available_teams, validate_submission};
use pick_two::calculate::{evaluate_league, leaderboard, weekly_view, RankingKey};
use pick_two::config::AppConfig;
use pick_two::models::{current_season, LeagueId, PlayerId};
use pick_two::parse_selection;
use pick_two::storage::{LeagueSnapshot, StorageConfig};

#[derive(Parser)]
#[command(name = "pick-two")]
#[command(about = "Scoring and standings for a weekly NFL pick-two league")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./pick-two.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the league leaderboard
    Standings {
        #[arg(long)]
        league: String,

        /// Sort by "total" or "last", or "me" for just your own line
        #[arg(long, default_value = "total")]
        sort: String,

        /// Player viewing the standings
        #[arg(long)]
        me: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print every player's per-team results as JSON
    Grid {
        #[arg(long)]
        league: String,
    },

    /// Show one week's pick table
    Week {
        #[arg(long)]
        league: String,

        /// Week to show (defaults to the latest revealed week)
        #[arg(long)]
        week: Option<u32>,

        /// Player viewing the table
        #[arg(long)]
        me: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show BYE weeks remaining per player
    Byes {
        #[arg(long)]
        league: String,
    },

    /// Report picks that could not be scored
    Check {
        #[arg(long)]
        league: String,
    },

    /// Check whether a pick pair would be accepted
    ValidatePick {
        #[arg(long)]
        league: String,

        #[arg(long)]
        user: String,

        #[arg(long)]
        week: u32,

        /// First team (short name or id) or BYE
        #[arg(long)]
        first: String,

        /// Second team (short name or id) or BYE
        #[arg(long)]
        second: String,
    },

    /// Start the API server
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn load(storage: &StorageConfig, league: &str) -> Result<LeagueSnapshot> {
    LeagueSnapshot::load(storage, &LeagueId::from(league))
        .with_context(|| format!("Failed to load league {}", league))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_tracing(&config.log_level, cli.json_logs);
    tracing::debug!("Starting pick-two v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());
    let rules = &config.scoring;

    match cli.command {
        Commands::Standings {
            league,
            sort,
            me,
            json,
        } => {
            let (key, only_current) = match sort.as_str() {
                "me" => (RankingKey::Total, true),
                other => (other.parse::<RankingKey>().map_err(anyhow::Error::msg)?, false),
            };
            let me = me.map(PlayerId::from);
            if only_current && me.is_none() {
                bail!("--sort me requires --me <user>");
            }

            let snapshot = load(&storage, &league)?;
            let report = evaluate_league(&snapshot.league, &snapshot.games, rules.bye_quota);
            let entries = leaderboard(
                &snapshot.league,
                &report.standings,
                key,
                me.as_ref(),
                only_current,
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!(
                    "{:>4}  {:<24} {:>7} {:>9}",
                    "#",
                    "Player",
                    "Total",
                    format!("Week {}", snapshot.league.scoring_week())
                );
                for entry in &entries {
                    let marker = if entry.is_current_player { "*" } else { " " };
                    println!(
                        "{:>4}{} {:<24} {:>7} {:>9}",
                        entry.rank, marker, entry.display_name, entry.total, entry.last_week
                    );
                }
            }
        }
        Commands::Grid { league } => {
            let snapshot = load(&storage, &league)?;
            let report = evaluate_league(&snapshot.league, &snapshot.games, rules.bye_quota);
            println!("{}", serde_json::to_string_pretty(&report.player_results)?);
        }
        Commands::Week {
            league,
            week,
            me,
            json,
        } => {
            let snapshot = load(&storage, &league)?;
            let week = week.unwrap_or(snapshot.league.revealed_week);
            let me = me.map(PlayerId::from);
            let rows = weekly_view(&snapshot.league, &snapshot.games, week, me.as_ref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("Week {}", week);
                for row in &rows {
                    let marker = if row.is_current_player { "*" } else { " " };
                    let outcome = row
                        .outcome
                        .map(|o| o.display_value())
                        .unwrap_or_default();
                    println!(
                        "{}{:<24} {:<5} {:<5} {:>6}",
                        marker,
                        row.display_name,
                        row.left_pick.as_deref().unwrap_or("-"),
                        row.right_pick.as_deref().unwrap_or("-"),
                        outcome
                    );
                }

                let today = chrono::Local::now().date_naive();
                let archive = snapshot
                    .league
                    .archive_weeks(current_season(today), rules.final_week);
                if let (Some(first), Some(last)) = (archive.first(), archive.last()) {
                    println!("\nArchived weeks: {}-{}", first, last);
                }
            }
        }
        Commands::Byes { league } => {
            let snapshot = load(&storage, &league)?;
            let statuses = bye_statuses(&snapshot.league, rules.bye_quota);
            for player in &snapshot.league.players {
                if let Some(status) = statuses.get(&player.id) {
                    let this_week = if status.bye_this_week { " (BYE this week)" } else { "" };
                    println!(
                        "{:<24} {:>3}  {}{}",
                        player.display_name,
                        status.remaining,
                        status.display_value(),
                        this_week
                    );
                }
            }
        }
        Commands::Check { league } => {
            let snapshot = load(&storage, &league)?;
            let report = evaluate_league(&snapshot.league, &snapshot.games, rules.bye_quota);

            for entry in &report.errors {
                println!("week {:>2}  {:<16} {}", entry.week, entry.player_id, entry.error);
            }
            for (player_id, status) in &report.bye_status {
                if status.violated {
                    println!("          {:<16} used {} BYE weeks", player_id, status.used);
                }
            }

            if !report.errors.is_empty() {
                bail!("{} entries could not be scored", report.errors.len());
            }
            println!("All picks scored");
        }
        Commands::ValidatePick {
            league,
            user,
            week,
            first,
            second,
        } => {
            let snapshot = load(&storage, &league)?;
            let player_id = PlayerId::from(user);
            let first = parse_selection(&first, &snapshot.teams)
                .with_context(|| format!("Unknown team: {}", first))?;
            let second = parse_selection(&second, &snapshot.teams)
                .with_context(|| format!("Unknown team: {}", second))?;

            validate_submission(
                &snapshot.league,
                &player_id,
                week,
                Some(&first),
                Some(&second),
                rules,
            )?;

            println!("OK: {} + {} for week {}", first, second, week);
            let remaining = available_teams(&snapshot.teams, &snapshot.league, &player_id, week);
            println!("{} teams still available", remaining.len());
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let app = build_router(AppState::from_config(&config));
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Serving league API on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
