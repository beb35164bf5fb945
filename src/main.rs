mod cli;

use std::io::Write;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use cli::Cli;
use darts_scoreboard::{GameSession, ScoreboardConfig};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Frames go to stdout, so logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn load_config(cli: &Cli) -> anyhow::Result<ScoreboardConfig> {
    let config = match &cli.config {
        Some(path) => ScoreboardConfig::from_file(path)?,
        None => ScoreboardConfig::default(),
    };
    let config = config.with_env_overrides()?;
    Ok(match cli.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn emit(session: &GameSession) -> anyhow::Result<()> {
    let line = serde_json::to_string(&session.frame()).context("serializing frame")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;
    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut session = GameSession::new(config);

    if let Some(variant) = &cli.variant {
        let options = cli.game_options(session.config().options.clone());
        session
            .create_game(variant, &cli.players, options)
            .with_context(|| format!("starting {variant}"))?;
    } else if !cli.players.is_empty() {
        bail!("--player needs --variant");
    }

    let reader: Box<dyn AsyncBufRead + Unpin> = match &cli.feed {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening feed {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let mut lines = reader.lines();

    info!(game_active = session.is_game_active(), "scoreboard running");
    emit(&session)?;

    loop {
        let deadline = session.next_deadline();
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    session.handle_message(&line, Instant::now());
                    emit(&session)?;
                }
                None => break,
            },
            _ = wait_until(deadline) => {
                if session.fire_due(Instant::now()) {
                    emit(&session)?;
                }
            }
        }
    }

    // Feed closed: let a scheduled turn advance land before exiting.
    if let Some(deadline) = session.next_deadline() {
        wait_until(Some(deadline)).await;
        if session.fire_due(Instant::now()) {
            emit(&session)?;
        }
    }

    debug!("feed closed");
    Ok(())
}
