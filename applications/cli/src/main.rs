//! Tilawa - terminal Quran recitation player

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tilawa_api_client::{ContentApi, QuranApiClient};
use tilawa_cli::commands::{self, Intent, ParseError};
use tilawa_cli::media::ClockMedia;
use tilawa_cli::share::TerminalShare;
use tilawa_cli::{session, view, CliConfig};
use tilawa_core::VerseId;
use tilawa_playback::{Dispatcher, PlayerController, SystemClock};
use tilawa_storage::{bookmarks, LocalStore, SqliteStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tilawa")]
#[command(about = "Quran recitation player for the terminal", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./tilawa.toml when present)
    #[arg(short, long, global = true, env = "TILAWA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive player (default)
    Play,

    /// Print the surah list
    Surahs {
        /// Language for translated names
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Print stored bookmarks
    Bookmarks,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the player output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilawa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_player(config).await,
        Commands::Surahs { language } => {
            let language = language.unwrap_or_else(|| config.player.default_language.clone());
            let api = QuranApiClient::new(config.api_config())?;
            let surahs = api
                .list_surahs(&language)
                .await
                .context("Failed to fetch surahs")?;
            for line in view::render_surah_list(&surahs, None) {
                println!("{}", line);
            }
            Ok(())
        }
        Commands::Bookmarks => {
            let store = open_store(&config).await?;
            let set = bookmarks::load(store.as_ref()).await;
            for line in view::render_bookmarks(&set) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

async fn open_store(config: &CliConfig) -> Result<Arc<dyn LocalStore>> {
    let pool = tilawa_storage::create_pool(&config.storage.database_url)
        .await
        .context("Failed to open local state database")?;
    tilawa_storage::run_migrations(&pool).await?;
    Ok(Arc::new(SqliteStore::new(pool)))
}

async fn run_player(config: CliConfig) -> Result<()> {
    let api: Arc<dyn ContentApi> = Arc::new(QuranApiClient::new(config.api_config())?);
    let store = open_store(&config).await?;

    let (media_tx, mut media_rx) = mpsc::unbounded_channel();
    let (media, driver) = ClockMedia::new(config.track_length(), media_tx);

    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(api, fetch_tx);

    let mut player = PlayerController::new(
        config.player_config(),
        Box::new(media),
        Box::new(TerminalShare::stdout()),
        store,
        Arc::new(SystemClock),
    );
    player.restore_local_state().await;
    dispatcher.dispatch(player.initial_load());

    println!("Tilawa - type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(config.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();
    let mut shown: Option<VerseId> = None;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                match commands::parse(&line) {
                    Ok(Intent::Quit) => break,
                    Ok(intent) => match session::apply(&mut player, intent).await {
                        Ok(effect) => {
                            dispatcher.dispatch_all(effect.requests);
                            for line in effect.output {
                                println!("{}", line);
                            }
                        }
                        Err(e) => println!("{}", e),
                    },
                    Err(ParseError::Empty) => {}
                    Err(e) => println!("{}", e),
                }
            }
            Some(outcome) = fetch_rx.recv() => {
                dispatcher.dispatch_all(player.apply_outcome(outcome));
            }
            Some(event) = media_rx.recv() => {
                dispatcher.dispatch_all(player.handle_media_event(event));
            }
            _ = ticker.tick() => {
                let now = Instant::now();
                driver.tick(now - last_tick);
                last_tick = now;
            }
        }

        for notice in player.drain_notices() {
            println!("{}", view::render_notice(&notice));
        }

        let current = player.current_verse().map(|v| v.id);
        if current != shown {
            shown = current;
            if let Some(verse) = player.current_verse() {
                for line in view::render_verse(verse, player.current_is_bookmarked()) {
                    println!("{}", line);
                }
            }
        }
    }

    if player.is_playing() {
        player.toggle_play();
    }
    tracing::info!("Session ended");
    Ok(())
}
