use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use gitcrypt_demo::{app, config};

fn main() -> Result<()> {
    init_tracing();

    let config = config::load_config()?;
    tracing::info!(
        primary = %config.primary_file,
        fallback = %config.fallback_file,
        "starting GitCryptDemo"
    );

    app::run(config).map_err(|err| anyhow!("Failed to start window: {err}"))
}

/// Log to stderr; `RUST_LOG` overrides the default `gitcrypt_demo=info` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gitcrypt_demo=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
