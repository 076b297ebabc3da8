//! Handler for the `init` command.

use std::io::{self, Write};

use crate::cli::startup;
use crate::config::Config;
use crate::error::Result;

/// Execute the init command.
pub fn execute(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut store = startup::open_store(config, &mut out)?;
    startup::initialize(&mut store, &mut out)?;
    out.flush()?;
    Ok(())
}
