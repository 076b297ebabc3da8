use clap::Parser;
use orderdesk::cli::{init, run, Cli, Commands};
use tracing::error;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match cli.command() {
        Commands::Chat => run::execute(&config),
        Commands::Init => init::execute(&config),
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}
