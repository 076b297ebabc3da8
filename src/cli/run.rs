//! Handler for the `chat` command.

use std::io;

use tracing::info;

use crate::chat::Chatbot;
use crate::cli::startup;
use crate::config::Config;
use crate::error::Result;

/// Execute the chat command.
///
/// The store is dropped, and so closed, before this returns on every
/// path past a successful open.
pub fn execute(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut store = startup::open_store(config, &mut out)?;
    startup::initialize(&mut store, &mut out)?;

    info!("chat started");
    let mut chatbot = Chatbot::new(&mut store, stdin.lock(), out);
    chatbot.run()?;
    info!("chat finished");

    Ok(())
}
