use crate::{
    commands::{Commands, ProcessArgs},
    error::CliError,
};
use clap::Parser;
use connectors::sheet::{CsvExportSource, SheetSource};
use engine_core::state::{CursorStore, sled_store::SledCursorStore};
use engine_processing::{
    generation::{GenerationInvoker, models, ollama::{DEFAULT_OLLAMA_URL, OllamaBackend}},
    processor::{BatchProcessor, ProcessRequest},
};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing::{Level, info};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "batchreport",
    version = "0.1.0",
    about = "Incremental review-batch report generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process { args } => {
            let processor = build_processor(&args)?;
            let request = build_request(&args)?;
            let outcome = processor.process(&request).await;
            output::print_outcome(&outcome, args.json)?;
        }
        Commands::Watch { args, interval } => {
            watch(args, interval).await?;
        }
        Commands::Preview { sheet, rows, json } => {
            let source = CsvExportSource::new()?;
            let snapshot = source.fetch(&sheet).await?;
            output::print_preview(&snapshot, rows, json)?;
        }
        Commands::Progress {
            sheet,
            state_dir,
            json,
        } => {
            let store = open_state_store(state_dir)?;
            let cursor = store.get(&sheet).await?;
            output::print_progress(&sheet, cursor, json)?;
        }
        Commands::Reset { sheet, state_dir } => {
            let store = open_state_store(state_dir)?;
            store.reset(&sheet).await?;
            println!("Cursor for sheet '{sheet}' reset to 0.");
        }
        Commands::Models => {
            output::print_models();
        }
    }

    Ok(())
}

/// Polls the sheet forever, processing a batch whenever enough new rows have
/// arrived. Waiting and failed outcomes are expected under polling and do not
/// stop the loop.
async fn watch(args: ProcessArgs, interval: u64) -> Result<(), CliError> {
    let processor = build_processor(&args)?;
    let mut request = build_request(&args)?;
    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));

    info!(
        sheet = %request.sheet_id,
        batch_size = request.batch_size,
        interval_secs = interval,
        "Watching sheet for new rows"
    );

    loop {
        ticker.tick().await;
        let outcome = processor.process(&request).await;
        output::print_outcome(&outcome, args.json)?;

        // A requested reset applies to the first attempt only.
        request.reset_cursor = false;
    }
}

fn build_processor(args: &ProcessArgs) -> Result<BatchProcessor, CliError> {
    let store: Arc<dyn CursorStore> = open_state_store(args.state_dir.clone())?;
    let source: Arc<dyn SheetSource> = Arc::new(CsvExportSource::new()?);
    let backend = Arc::new(OllamaBackend::new(resolve_ollama_url(args))?);

    Ok(BatchProcessor::new(
        store,
        source,
        GenerationInvoker::new(backend),
    ))
}

fn build_request(args: &ProcessArgs) -> Result<ProcessRequest, CliError> {
    if args.batch_size == 0 {
        return Err(CliError::InvalidArgument(
            "--batch-size must be at least 1".into(),
        ));
    }

    let selected_columns: Vec<String> = args
        .columns
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    if selected_columns.is_empty() {
        return Err(CliError::InvalidArgument(
            "--columns must name at least one column".into(),
        ));
    }

    Ok(ProcessRequest {
        sheet_id: args.sheet.clone(),
        batch_size: args.batch_size,
        selected_columns,
        model_label: args
            .model
            .clone()
            .unwrap_or_else(|| models::default_label().to_string()),
        reset_cursor: args.reset,
    })
}

fn resolve_ollama_url(args: &ProcessArgs) -> String {
    args.ollama_url
        .clone()
        .or_else(|| std::env::var("OLLAMA_URL").ok())
        .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string())
}

fn open_state_store(dir: Option<PathBuf>) -> Result<Arc<SledCursorStore>, CliError> {
    let path = match dir {
        Some(path) => path,
        None => dirs::home_dir()
            .ok_or_else(|| CliError::Unexpected("Could not determine home directory".into()))?
            .join(".batchreport/state"),
    };

    let store = SledCursorStore::open(&path).map_err(|err| {
        CliError::Unexpected(format!(
            "Failed to open state store at {}: {err}",
            path.display()
        ))
    })?;
    Ok(Arc::new(store))
}
