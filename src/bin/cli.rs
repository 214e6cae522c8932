//! Interactive generator for YouTube titles, tags, and descriptions of recorded sets.
//! Run with: cargo run --bin smash-meta -- --data data.json
//! The data file defaults to ./data.json; override with --data or SMASH_META_DATA.

use clap::Parser;
use smash_upload_meta::{run_session, storage, TerminalPrompter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "smash-meta",
    version,
    about = "Generate YouTube metadata for recorded Smash sets"
)]
struct Cli {
    /// Player, event, and character data file.
    #[arg(short, long, env = "SMASH_META_DATA", default_value = storage::DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Log debug output (usage counts, event updates).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    let mut store = storage::load(&cli.data)?;
    let mut prompter = TerminalPrompter::stdio();
    let output = run_session(&mut store, &mut prompter)?;
    log::info!("Generated title: {}", output.title);

    storage::save(&store, &cli.data)?;
    Ok(())
}
