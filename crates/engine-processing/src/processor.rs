use crate::{
    error::ProcessError, formatter::format_rows, generation::GenerationInvoker,
    selector::select_batch,
};
use connectors::{error::SourceError, sheet::SheetSource};
use engine_core::{
    retry::{RetryDisposition, RetryError, RetryPolicy},
    state::CursorStore,
};
use model::{outcome::ProcessingOutcome, sheet::SheetSnapshot};
use std::sync::Arc;
use tracing::{error, info, warn};

/// One processing request, as received from the outer polling layer.
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub sheet_id: String,
    pub batch_size: usize,
    pub selected_columns: Vec<String>,
    pub model_label: String,
    pub reset_cursor: bool,
}

/// Composes cursor store, sheet source, and generation backend into one
/// request/response cycle. The only component with side effects on durable
/// state: the cursor is written at most once per call, as the terminal step.
pub struct BatchProcessor {
    store: Arc<dyn CursorStore>,
    source: Arc<dyn SheetSource>,
    invoker: GenerationInvoker,
    fetch_retry: RetryPolicy,
}

impl BatchProcessor {
    pub fn new(
        store: Arc<dyn CursorStore>,
        source: Arc<dyn SheetSource>,
        invoker: GenerationInvoker,
    ) -> Self {
        Self {
            store,
            source,
            invoker,
            fetch_retry: RetryPolicy::default(),
        }
    }

    pub fn with_fetch_retry(mut self, policy: RetryPolicy) -> Self {
        self.fetch_retry = policy;
        self
    }

    /// Runs one full waiting/processed/error cycle.
    ///
    /// Never returns an error: every failure is folded into the `Failed`
    /// outcome so the polling caller treats it as "retry later". On any
    /// failure before the final commit the cursor is untouched, so the next
    /// poll reattempts the identical batch.
    pub async fn process(&self, req: &ProcessRequest) -> ProcessingOutcome {
        match self.run(req).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(sheet_id = %req.sheet_id, error = %err, "Processing attempt failed");
                ProcessingOutcome::Failed {
                    detail: err.to_string(),
                }
            }
        }
    }

    async fn run(&self, req: &ProcessRequest) -> Result<ProcessingOutcome, ProcessError> {
        validate(req)?;

        // Operator-requested reset: store 0 durably and use it for this call
        // without re-reading.
        let cursor = if req.reset_cursor {
            self.store.reset(&req.sheet_id).await?;
            info!(sheet_id = %req.sheet_id, "Cursor reset by request");
            0
        } else {
            self.store.get(&req.sheet_id).await?
        };

        let snapshot = self.fetch_snapshot(&req.sheet_id).await?;
        let total_rows = snapshot.row_count();

        // Self-heal: the sheet shrank or was replaced since the cursor was
        // last written.
        let cursor = if cursor > total_rows {
            warn!(
                sheet_id = %req.sheet_id,
                cursor,
                total_rows,
                "Cursor beyond end of sheet, resetting"
            );
            self.store.reset(&req.sheet_id).await?;
            0
        } else {
            cursor
        };

        let Some(spec) = select_batch(total_rows, cursor, req.batch_size) else {
            return Ok(ProcessingOutcome::Waiting {
                rows_pending: total_rows - cursor,
                rows_needed: req.batch_size,
            });
        };

        info!(
            sheet_id = %req.sheet_id,
            batch = %spec.range_label,
            rows = spec.len(),
            "Processing batch"
        );

        let review_text = format_rows(&snapshot.rows[spec.start..spec.end], &req.selected_columns);
        let report = self
            .invoker
            .invoke(&review_text, &spec.range_label, &req.model_label)
            .await?;

        // Commit is deliberately last: a crash or failure anywhere above
        // leaves the cursor unchanged, trading possible duplicate generation
        // for never silently dropping rows.
        self.store.set(&req.sheet_id, spec.end).await?;
        info!(
            sheet_id = %req.sheet_id,
            batch = %spec.range_label,
            new_cursor = spec.end,
            "Batch committed"
        );

        Ok(ProcessingOutcome::Processed {
            report_markdown: report,
            new_cursor: spec.end,
            batch_range: spec.range_label,
        })
    }

    async fn fetch_snapshot(&self, sheet_id: &str) -> Result<SheetSnapshot, ProcessError> {
        let result = self
            .fetch_retry
            .run(
                || async { self.source.fetch(sheet_id).await },
                classify_source_error,
            )
            .await;

        match result {
            Ok(snapshot) => Ok(snapshot),
            Err(RetryError::Fatal(e)) => Err(e.into()),
            Err(RetryError::AttemptsExceeded(e)) => {
                Err(ProcessError::FetchRetriesExhausted(e.to_string()))
            }
        }
    }
}

/// Config violations are rejected before any state mutation; they recur
/// deterministically until the caller's configuration changes.
fn validate(req: &ProcessRequest) -> Result<(), ProcessError> {
    if req.batch_size == 0 {
        return Err(ProcessError::ConfigInvalid(
            "batch_size must be a positive integer".into(),
        ));
    }
    if req.selected_columns.is_empty() {
        return Err(ProcessError::ConfigInvalid(
            "selected_columns must not be empty".into(),
        ));
    }
    Ok(())
}

fn classify_source_error(err: &SourceError) -> RetryDisposition {
    match err {
        SourceError::Unreachable(_) => RetryDisposition::Retry,
        SourceError::Malformed(_) => RetryDisposition::Stop,
    }
}
