use anyhow::Result;
use tracing_subscriber::EnvFilter;

use anyargs::ArgStore;

/// Parse the process command line and dump the resulting store.
///
/// Parser notices (overwritten values, duplicate flags) go to stderr via
/// the tracing subscriber; the dump itself goes to stdout.
fn main() -> Result<()> {
    init_tracing();

    let store = ArgStore::from_env()?;
    println!("{store}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}
