//! CLI module for Prediction Catalog
//!
//! Provides subcommands:
//! - `serve`: HTTP API server
//! - `models`: print discovered models as JSON
//! - `predictions`: print one prediction file

pub mod models;
pub mod serve;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Prediction Catalog - Discovers trained models and serves their predictions
#[derive(Parser)]
#[command(name = "prediction-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Model root directory, overrides `models.directory` from configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub models_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Print every discovered model as JSON
    Models,

    /// Print the contents of a prediction file
    Predictions(models::PredictionsArgs),
}

/// Load configuration and logging shared by every subcommand
fn bootstrap(models_dir: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;

    if let Some(dir) = models_dir {
        config.models.directory = dir;
    }

    logging::init_logging(&config.logging);
    Ok(config)
}
