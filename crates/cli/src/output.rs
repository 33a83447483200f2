use crate::error::CliError;
use engine_processing::generation::models::{DEFAULT_MODEL, MODEL_CATALOG};
use model::{outcome::ProcessingOutcome, sheet::SheetSnapshot};

pub fn print_outcome(outcome: &ProcessingOutcome, as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json = serde_json::to_string_pretty(outcome).map_err(CliError::JsonSerialize)?;
        println!("{json}");
        return Ok(());
    }

    match outcome {
        ProcessingOutcome::Processed {
            report_markdown,
            new_cursor,
            batch_range,
        } => {
            println!("Batch {batch_range} processed (cursor now {new_cursor}).");
            println!();
            println!("{report_markdown}");
        }
        ProcessingOutcome::Waiting {
            rows_pending,
            rows_needed,
        } => {
            println!("Only {rows_pending} new rows. Need {rows_needed}.");
        }
        ProcessingOutcome::Failed { detail } => {
            println!("Attempt failed: {detail}");
        }
    }
    Ok(())
}

pub fn print_preview(snapshot: &SheetSnapshot, limit: usize, as_json: bool) -> Result<(), CliError> {
    let shown = snapshot.rows.len().min(limit);

    if as_json {
        let preview = SheetSnapshot {
            columns: snapshot.columns.clone(),
            rows: snapshot.rows[..shown].to_vec(),
        };
        let json = serde_json::to_string_pretty(&preview).map_err(CliError::JsonSerialize)?;
        println!("{json}");
        return Ok(());
    }

    println!("Columns: {}", snapshot.columns.join(", "));
    println!("Rows: {} total, showing {shown}", snapshot.row_count());
    println!("-----------------------------");
    for row in &snapshot.rows[..shown] {
        let line: Vec<&str> = snapshot
            .columns
            .iter()
            .map(|c| row.get(c).unwrap_or(""))
            .collect();
        println!("{}", line.join(" | "));
    }
    Ok(())
}

pub fn print_progress(sheet: &str, cursor: usize, as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json = serde_json::json!({ "sheet": sheet, "last_processed_row": cursor });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).map_err(CliError::JsonSerialize)?
        );
        return Ok(());
    }

    println!("Progress for sheet '{sheet}':");
    println!("-----------------------------");
    println!("{:<20} {}", "Last processed row", cursor);
    Ok(())
}

pub fn print_models() {
    println!("Supported models:");
    println!("-----------------------------");
    for (label, model) in MODEL_CATALOG {
        let marker = if *model == DEFAULT_MODEL { " (default)" } else { "" };
        println!("{label:<20} -> {model}{marker}");
    }
}
