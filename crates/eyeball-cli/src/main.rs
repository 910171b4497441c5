mod command;
mod logger;
mod record;
mod settings;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
