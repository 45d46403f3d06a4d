use color_eyre::eyre::{eyre, Result};
use crossterm::event::{Event, EventStream};
use emosante::app::App;
use emosante::config::Config;
use emosante::logging;
use emosante::paths::AppPaths;
use emosante::storage::KvStore;
use emosante::ui::UI;
use futures::StreamExt;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let mut config_path: Option<PathBuf> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-V" | "--version" => {
                println!("emosante {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| eyre!("--config needs a path"))?;
                config_path = Some(PathBuf::from(path));
            }
            other => return Err(eyre!("unknown argument `{}` (try --help)", other)),
        }
    }

    let config = match config_path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    logging::init(&config.log_level, &AppPaths::log_file()?)?;

    let store = if config.persist_session {
        KvStore::open(AppPaths::session_file()?)
    } else {
        KvStore::in_memory()
    };
    log::info!("event=session_store persistent={}", store.is_persistent());
    let mut app = App::new(config, store);
    let mut ui = UI::new()?;

    let result = run(&mut ui, &mut app).await;
    log::info!("event=app_exit ok={}", result.is_ok());
    result
}

async fn run(ui: &mut UI, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(app.config().tick_rate());

    while !app.should_quit() {
        ui.draw(app)?;

        tokio::select! {
            _ = ticker.tick() => app.tick(Instant::now()),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key, Instant::now()),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "EmoSante v{} - a calm terminal journal for your moods",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    emosante                    Start the journal");
    println!("    emosante --config <path>    Use a specific config.toml");
    println!("    emosante --version          Print the version");
    println!("    emosante --help             Show this help message");
    println!();
    println!("CONFIG KEYS (config.toml):");
    println!("    seed_entries = true           Start with sample entries");
    println!("    persist_session = true        Remember the signed-in demo user");
    println!("    log_level = \"info\"            off, error, warn, info, debug, trace");
    println!("    tick_rate_ms = 100");
    println!("    toast_duration_ms = 1500");
    println!("    transition_delay_ms = 1500");
    println!("    transcription_delay_ms = 1200");
    println!();
    println!("ENVIRONMENT:");
    println!("    {}               Keep config, log and session in one directory", emosante::paths::HOME_ENV);
    println!();
    println!("Journal entries live in memory and are gone when the program exits.");
}
