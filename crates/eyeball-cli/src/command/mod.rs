use clap::{Parser, Subcommand};

use self::{datasets::DatasetsArg, play::PlayArg};

mod datasets;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the estimation game (default)
    Play(#[clap(flatten)] PlayArg),
    /// Dump the generated datasets and their statistics as JSON
    Datasets(#[clap(flatten)] DatasetsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or_else(|| Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Datasets(arg) => datasets::run(&arg)?,
    }
    Ok(())
}
