use anyhow::Context;
use clap::Parser;

use grid_snake::cli::Args;
use grid_snake::game::{self, Game};
use grid_snake::logger::init_logger;
use grid_snake::term::TermManager;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logger(path, args.log_level)?;
    }

    let config = args.resolve_config().map_err(anyhow::Error::msg)?;
    log::info!("Starting with {:?}", config);

    let mut term = TermManager::new().context("Error reading terminal size")?;
    if let Err(e) = term.setup() {
        // Undo whatever part of the setup went through
        let _ = term.restore();
        return Err(e).context("Error setting up the terminal");
    }

    let mut game = Game::new(&config, term.size().0 as i32 / 2);
    let res = game::play(&mut game, &mut term);

    // Restore the terminal even when the game loop failed
    term.restore().context("Error restoring the terminal")?;
    res.context("Game loop failed")
}
