use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vidshell::console::{StdConsole, ThreadRngPicker};
use vidshell::player::Player;
use vidshell::{catalogue, shell};

#[derive(Parser, Debug)]
#[command(name = "vidshell")]
#[command(about = "Interactive in-memory video catalogue player", long_about = None)]
struct Args {
    /// Path to a catalogue JSON file (uses the built-in sample when omitted)
    #[arg(short = 'c', long)]
    catalogue: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalogue path and load the library
    let library = match &args.catalogue {
        Some(path) => {
            let path = shellexpand::tilde(path);
            catalogue::load(PathBuf::from(path.as_ref()).as_path())?
        }
        None => catalogue::load_sample()?,
    };

    log::info!("Catalogue loaded: {} videos", library.len());

    let mut player = Player::new(&library, StdConsole::new(), ThreadRngPicker::new());
    shell::run(&mut player);

    Ok(())
}
