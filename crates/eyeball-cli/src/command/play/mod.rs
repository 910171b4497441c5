use std::path::PathBuf;

use anyhow::Context as _;
use eyeball_datasets::DatasetSeed;
use eyeball_engine::GameSession;
use log::LevelFilter;
use rand::Rng as _;
use ratatui_runtime::Runtime;

use crate::{logger, settings::SettingsFile};

use self::app::PlayApp;

mod app;
mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for dataset generation as 32 hex digits (random if omitted)
    #[clap(long)]
    seed: Option<DatasetSeed>,
    /// Directory holding settings and saved results
    #[clap(long, default_value = "./data/")]
    data_dir: PathBuf,
    /// Show the introduction even if it has been seen before
    #[clap(long)]
    show_onboarding: bool,
    /// Save the game-over summary to `<data-dir>/results/`
    #[clap(long)]
    save_result: bool,
    /// Append log records to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Maximum level of log records written to the log file
    #[clap(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            data_dir: PathBuf::from("./data/"),
            show_onboarding: false,
            save_result: false,
            log_file: None,
            log_level: LevelFilter::Debug,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        data_dir,
        show_onboarding,
        save_result,
        log_file,
        log_level,
    } = arg;

    logger::init(log_file.as_deref(), *log_level)?;

    let store = SettingsFile::open(data_dir)?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("playing with dataset seed {seed}");

    let mut session = GameSession::new(eyeball_datasets::collection(seed), &store);
    if *show_onboarding {
        session.show_onboarding();
    }

    let results_dir = save_result.then(|| data_dir.join("results"));
    let mut app = PlayApp::new(session, store, seed, results_dir);
    Runtime::new()
        .run(&mut app)
        .context("Terminal session failed")?;

    if let Some(path) = app.saved_result() {
        eprintln!("Result saved to {}", path.display());
    }
    Ok(())
}
