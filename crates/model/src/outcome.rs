use serde::{Deserialize, Serialize};

/// Result of one processing attempt, returned to the polling caller.
///
/// Serialized with an explicit `status` discriminant so the wire shape is
/// never ambiguous: `processed`, `waiting` or `error`. `Waiting` and `Failed`
/// are both normal, recurring outcomes under polling; callers treat `Failed`
/// as "retry later", not as a stop condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ProcessingOutcome {
    /// A batch was generated and the cursor committed.
    #[serde(rename = "processed")]
    Processed {
        report_markdown: String,
        new_cursor: usize,
        batch_range: String,
    },

    /// Not enough new rows yet to cut a batch; nothing was mutated.
    #[serde(rename = "waiting")]
    Waiting {
        rows_pending: usize,
        rows_needed: usize,
    },

    /// The attempt failed; the cursor is unchanged and the same batch will be
    /// reattempted on the next poll.
    #[serde(rename = "error")]
    Failed { detail: String },
}
