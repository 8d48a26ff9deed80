//! Piece reserve runner (default binary).
//!
//! Without a subcommand this runs the interactive menu on stdin/stdout.
//! `serve` runs the headless TCP adapter instead.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use piece_reserve::adapter::{serve_blocking, ServerConfig};
use piece_reserve::core::Session;
use piece_reserve::term::{run_menu, TerminalRenderer};

#[derive(Parser)]
#[command(name = "piece-reserve")]
#[command(version)]
#[command(about = "Manage a queue of upcoming pieces and a reserve stack", long_about = None)]
struct Cli {
    /// Seed for piece generation (defaults to the current time)
    #[arg(long, env = "PIECE_RESERVE_SEED")]
    seed: Option<u32>,

    /// Print without colors
    #[arg(long, default_value_t = false, env = "PIECE_RESERVE_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve a session over TCP with the JSON line protocol
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1", env = "PIECE_RESERVE_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 7878, env = "PIECE_RESERVE_PORT")]
        port: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Some(Command::Serve { .. }) => "info",
        // Keep the interactive screen clean unless asked otherwise.
        None => "warn",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let seed = cli.seed.unwrap_or_else(time_seed);
    info!(seed, "starting session");

    match cli.command {
        Some(Command::Serve { host, port }) => serve_blocking(ServerConfig { host, port }, seed),
        None => {
            let mut session = Session::new(seed);
            let mut term = TerminalRenderer::stdout(!cli.no_color);
            run_menu(&mut session, io::stdin().lock(), &mut term)
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
