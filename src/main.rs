use clap::Parser;
use prediction_catalog::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run(cli.models_dir).await,
        Command::Models => cli::models::run_models(cli.models_dir).await,
        Command::Predictions(args) => cli::models::run_predictions(cli.models_dir, args).await,
    }
}
