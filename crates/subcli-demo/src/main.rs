//! `demo`: a funky demonstration of subcli.
//!
//! ```text
//! demo join -s . google com     # google.com
//! demo repeat -n 3 -t ha        # hahaha
//! demo help join
//! ```
//!
//! Set `SUBCLI_LOG=debug` to see dispatch decisions on stderr.

mod commands;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "SUBCLI_LOG";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let app = commands::app().context("failed to configure demo")?;
    let status = app.run();
    if status != 0 {
        std::process::exit(status);
    }
    Ok(())
}
