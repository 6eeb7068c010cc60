use std::io::Write;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use bubble_demo::driver;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout is reserved for the demo output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    driver::run(&mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
