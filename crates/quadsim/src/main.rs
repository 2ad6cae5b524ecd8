//! QuadSim — four independent simulation tasks run concurrently.

use anyhow::Result;
use quadsim_lib::{app, config};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Missing positional arguments print usage, perform no work, and exit
    // 0, however many flag tokens accompany them. All other parse errors
    // (and help/version requests) go through clap.
    let config = match config::AppConfig::try_parse() {
        Ok(config) => config,
        Err(err) if err.kind() == clap::error::ErrorKind::MissingRequiredArgument => {
            println!("{}", config::USAGE);
            return Ok(());
        }
        Err(err) => err.exit(),
    };
    app::run(&config)
}
