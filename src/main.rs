use anyhow::Result;
use clap::Parser;
use family_playlist::store::DEFAULT_PLAYLIST_FILE;
use family_playlist::{MenuLoop, PlaylistStore, StoreConfig};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "family-playlist")]
#[command(about = "Keep track of every favorite tune in one place", long_about = None)]
#[command(after_help = "With no arguments, songs are kept in ./playlist.dat")]
struct Args {
    /// Playlist file (relative paths resolve against the working directory)
    #[arg(short = 'f', long, default_value = DEFAULT_PLAYLIST_FILE)]
    file: String,

    /// Verbose logging (to stderr)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Keep the interactive transcript clean unless asked otherwise
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = StoreConfig::from_user_path(&args.file);
    log::debug!("Using playlist file {:?}", config.path);

    let store = PlaylistStore::new(config);
    let stdin = io::stdin();
    let mut menu = MenuLoop::new(store, stdin.lock(), io::stdout());
    menu.run()?;

    Ok(())
}
