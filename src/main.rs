use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use userlist::config::Config;
use userlist::logging::init_tracing;
use userlist::repository::{InMemoryUserRepository, Latency};
use userlist::ui::input::{handle_line, LineOutcome, HELP};
use userlist::ui::render::render_effect;
use userlist::ui::users::{
    EffectStream, IntentQueue, QueueOptions, StoreHandle, UserListStore,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Interactive user list driven by intents
struct Args {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable the simulated repository latency
    #[arg(long, default_value_t = false)]
    no_delay: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if args.log_file.is_some() {
        config.logging.file = args.log_file.clone();
    }
    init_tracing(&config.logging);

    let mut repository = InMemoryUserRepository::from_config(&config.repository);
    if args.no_delay {
        repository = InMemoryUserRepository::with_users(Latency::none(), repository.snapshot());
    }
    tracing::info!(
        config = %path.display(),
        latency = ?repository.latency(),
        "Starting user list"
    );

    let (store, effects) = UserListStore::new(Arc::new(repository));
    let (handle, task) = IntentQueue::spawn(
        store,
        QueueOptions {
            load_on_start: config.store.load_on_start,
        },
    );
    let printer = tokio::spawn(print_effects(effects));

    println!("{}", HELP);
    let interrupted = tokio::select! {
        result = read_commands(&handle) => {
            result?;
            false
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
            true
        }
    };

    drop(handle);
    if let Err(e) = task.await {
        tracing::error!(error = %e, "Intent loop failed");
    }
    if let Err(e) = printer.await {
        tracing::error!(error = %e, "Effect printer failed");
    }

    if interrupted {
        // A pending stdin read would otherwise hold the runtime open. Skipping
        // destructors is fine: the store has stopped and log writes are unbuffered.
        std::process::exit(130);
    }
    Ok(())
}

async fn read_commands(handle: &StoreHandle) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match handle_line(handle, &line).await? {
            LineOutcome::Continue => {}
            LineOutcome::Print(text) => println!("{}", text),
            LineOutcome::Quit => break,
        }
    }
    Ok(())
}

async fn print_effects(mut effects: EffectStream) {
    while let Some(effect) = effects.next().await {
        println!("{}", render_effect(&effect));
    }
}
