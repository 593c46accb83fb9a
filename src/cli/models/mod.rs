//! Models and predictions commands - one-shot discovery from the terminal

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::domain::ModelRecord;

#[derive(Args, Debug)]
pub struct PredictionsArgs {
    /// Model directory name as reported by `models`
    pub model_directory: String,

    /// Prediction filename inside the model's predictions folder
    pub filename: String,
}

/// Print every discovered model as pretty JSON
pub async fn run_models(models_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let config = super::bootstrap(models_dir)?;
    let service = crate::create_model_service(&config);

    let models = service.list().await?;
    write_models(&mut std::io::stdout().lock(), &models)
}

/// Print one prediction file verbatim
pub async fn run_predictions(
    models_dir: Option<PathBuf>,
    args: PredictionsArgs,
) -> anyhow::Result<()> {
    let config = super::bootstrap(models_dir)?;
    let service = crate::create_model_service(&config);

    let contents = service
        .get_predictions(&args.model_directory, &args.filename)
        .await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(contents.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn write_models(out: &mut impl Write, models: &[ModelRecord]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, models)?;
    writeln!(out)?;
    Ok(())
}
