use clap::{Parser, Subcommand};
use rapstel::{Config, RunError, SofficeConverter, attention, batch, combine};
use std::path::PathBuf;
use std::process::ExitCode;

/// Assembles PI inspection deliverables for all objects in a batch.
#[derive(Parser)]
#[command(name = "rapstel", version)]
struct Cli {
    /// Path to the batch configuration file.
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Merge each object's PI report with its appendix PDFs.
    Combine,
    /// Generate the Bijlage 9 attention-point documents.
    Attention,
    /// Run both pipelines.
    All,
}

fn run(cli: Cli) -> Result<bool, RunError> {
    let config = Config::load(&cli.config)?;
    let objects = rapstel_source::object_paths_codes(&config.batch_path())?;
    log::info!(
        "werkpakket [{}]: {} objects in batch [{}]",
        config.werkpakket,
        objects.len(),
        config.batch
    );

    let mut any_failed = false;

    if matches!(cli.command, Task::Combine | Task::All) {
        let summary = batch::run_batch(&objects, "PI report combination", |path, code| {
            combine::process_object(path, code, &config)
        });
        any_failed |= summary.any_failed();
    }

    if matches!(cli.command, Task::Attention | Task::All) {
        let mut converter = SofficeConverter::default();
        let summary = batch::run_batch(&objects, "Aandachtspunten beheerder", |path, code| {
            attention::process_object(path, code, &config, &mut converter)
        });
        any_failed |= summary.any_failed();
    }

    Ok(any_failed)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("run aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
