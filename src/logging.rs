use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SPRINTBOARD_LOG";

/// Install the stderr subscriber. `SPRINTBOARD_LOG` takes precedence over
/// the verbosity flag.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "sprintboard=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(default))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
    Ok(())
}
