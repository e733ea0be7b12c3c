//! Pokedex - An interactive PokeAPI browser
//!
//! Reads commands from stdin and answers them through a read-through
//! response cache.

use std::io::BufRead;

use anyhow::Context;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::repl::{Command, Outcome, Session};
use pokecache::{Cache, Config, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache (starts its sweep task)
/// 4. Create the PokeAPI client around the cache
/// 5. Run the REPL until `exit`, end of input, or a shutdown signal
/// 6. Stop the cache sweep
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with REPL output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, base_url={}, http_timeout={}s",
        config.cache_interval, config.base_url, config.http_timeout
    );

    let cache = Cache::from_config(&config);
    let client = PokeApiClient::new(&config, cache.clone()).context("building HTTP client")?;

    tokio::select! {
        result = run_repl(&client) => {
            if let Err(err) = result {
                error!("REPL failed: {:#}", err);
            }
        }
        _ = shutdown_signal() => {}
    }

    cache.stop().await;
    let stats = cache.stats().await;
    info!(
        "Shutdown complete: hits={}, misses={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.hit_rate()
    );

    Ok(())
}

/// Reads commands line by line until `exit` or end of input.
async fn run_repl(client: &PokeApiClient) -> anyhow::Result<()> {
    let mut session = Session::new(client.first_page_url());
    let mut rng = rand::thread_rng();
    let mut lines = spawn_stdin_reader();

    loop {
        prompt();

        let Some(line) = lines.recv().await else {
            return Ok(());
        };
        let line = line.context("reading stdin")?;
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match session.execute(command, client, &mut rng).await {
            Ok(Outcome::Output(output)) => {
                for line in output {
                    println!("{}", line);
                }
            }
            Ok(Outcome::Exit) => return Ok(()),
            Err(err) => println!("Error: {}", err),
        }
    }
}

/// Reads stdin on a plain thread so a pending read never holds up runtime shutdown.
fn spawn_stdin_reader() -> mpsc::Receiver<std::io::Result<String>> {
    let (tx, rx) = mpsc::channel(16);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}

fn prompt() {
    use std::io::Write;

    print!("Pokedex > ");
    // A closed stdout just means nobody sees the prompt
    let _ = std::io::stdout().flush();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
