use clap::Parser;

use wox::cli_app::{handle_command, Cli};
use wox::config::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load the config: {}", e);
            std::process::exit(1);
        }
    };
    handle_command(cli, &config).await;
}
