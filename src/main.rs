//! Terminal front-end
//!
//! Local hot-seat chess. Typed commands become the same events a graphical
//! board would send and are processed one at a time, interleaved with clock
//! ticks, by a single [`SyncClient`].

use anyhow::{Context, Result};
use clap::Parser;
use duelchess::core::settings::{settings_path, ClientSettings};
use duelchess::game::events::ClientEvent;
use duelchess::networking::SyncClient;
use duelchess::ui::commands::{parse_command, Command, HELP};
use duelchess::ui::view;
use std::io::BufRead;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "duelchess", version, about = "Two-player chess in the terminal")]
struct Args {
    /// Play with a clock
    #[arg(long)]
    timer: bool,

    /// Minutes per player when the clock is on
    #[arg(long)]
    minutes: Option<u32>,

    /// Player name
    #[arg(long)]
    name: Option<String>,

    /// Settings file (defaults to the per-user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.settings.clone().unwrap_or_else(settings_path);
    let mut settings = ClientSettings::load_from(&path);
    if args.timer {
        settings.timer_enabled = true;
    }
    if let Some(minutes) = args.minutes {
        settings.time_per_player_secs = minutes.saturating_mul(60);
    }
    if let Some(name) = args.name {
        settings.player_name = name;
    }
    if args.save_settings {
        settings
            .save_to(&path)
            .with_context(|| format!("saving settings to {}", path.display()))?;
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<ClientEvent>();
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });

    let mut client = SyncClient::new(&settings).with_tick_sink(event_tx);
    info!("Starting local game for {}", settings.player_name);
    println!("{}", HELP);
    print!("{}", view::render_screen(&client));

    loop {
        tokio::select! {
            Some(event) = event_rx.recv() => {
                let was_over = client.game().is_over();
                client.handle_event(event);
                if client.game().is_over() && !was_over {
                    print!("{}", view::render_screen(&client));
                }
            }
            line = line_rx.recv() => {
                let Some(line) = line else { break };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::Events(events)) => {
                        for event in events {
                            client.handle_event(event);
                        }
                        print!("{}", view::render_screen(&client));
                    }
                    Err(message) => println!("{}", message),
                }
            }
        }

        for notice in client.drain_notices() {
            println!("{}", notice);
        }
    }

    info!("Goodbye");
    Ok(())
}
