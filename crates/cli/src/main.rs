mod prompt;

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::{self, BufRead, Write},
};

use mysterium_core::{
    config::{self, AppConfig},
    CardSink, DrawRng, Flow, FsCardSink, SessionManager,
};
use tracing::{error, info};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::prompt::Prompter;

fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load()?;
    let catalog = config.catalog()?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let settings = prompter.collect_config()?;

    let sink = FsCardSink::new(&config.asset_root, &config.output_root, settings.name());
    let rng = DrawRng::from_optional_seed(config.seed);
    let session = SessionManager::new(settings, catalog, rng, sink)?;
    session.setup()?;
    info!(
        "session written to {} (seed {})",
        session.sink().session_root().display(),
        session.seed()
    );

    run_commands(session, &mut prompter)
}

fn run_commands<S, R, W>(
    mut session: SessionManager<S>,
    prompter: &mut Prompter<R, W>,
) -> Result<()>
where
    S: CardSink,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(command) = prompter.next_command()? else {
            continue;
        };
        match session.dispatch(command, prompter.output()) {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            // I/O failures are reported; the user can retry with "Restore".
            Err(err) => {
                error!("{command:?} failed: {err:#}");
                writeln!(prompter.output(), "Command failed: {err:#}")?;
            }
        }
    }
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("mysterium.log");

    let env_filter = EnvFilter::from_default_env();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
