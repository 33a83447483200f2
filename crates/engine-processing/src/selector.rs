use model::batch::BatchSpec;

/// Decides whether enough new rows exist to cut a batch, and if so computes
/// the exact row range.
///
/// Takes exactly `batch_size` rows, never more, even when more are pending;
/// the excess stays for the next call. This bounds generation cost per call
/// and keeps report scope stable. Callers must have self-healed the cursor
/// first: `cursor <= total_rows` is a precondition, and `batch_size == 0` is
/// rejected upstream as a config error.
pub fn select_batch(total_rows: usize, cursor: usize, batch_size: usize) -> Option<BatchSpec> {
    debug_assert!(
        cursor <= total_rows,
        "cursor must be self-healed before selection"
    );

    let num_new = total_rows.saturating_sub(cursor);
    if num_new < batch_size {
        return None;
    }

    Some(BatchSpec::new(cursor, cursor + batch_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuts_exactly_batch_size_rows() {
        let spec = select_batch(5, 0, 3).unwrap();
        assert_eq!(spec.start, 0);
        assert_eq!(spec.end, 3);
        assert_eq!(spec.range_label, "1-3");
    }

    #[test]
    fn never_takes_more_than_batch_size() {
        // 10 rows pending but the batch stays at 4.
        let spec = select_batch(12, 2, 4).unwrap();
        assert_eq!(spec.len(), 4);
        assert_eq!(spec.end, 6);
        assert_eq!(spec.range_label, "3-6");
    }

    #[test]
    fn waits_below_threshold() {
        assert!(select_batch(7, 5, 3).is_none());
    }

    #[test]
    fn exact_threshold_cuts_a_batch() {
        let spec = select_batch(8, 5, 3).unwrap();
        assert_eq!(spec.range_label, "6-8");
    }

    #[test]
    fn empty_sheet_waits() {
        assert!(select_batch(0, 0, 3).is_none());
    }

    #[test]
    fn selection_is_deterministic_for_identical_inputs() {
        // Same inputs always produce the same range, which is what makes a
        // failed generation call retry the identical batch.
        let first = select_batch(5, 0, 3).unwrap();
        let second = select_batch(5, 0, 3).unwrap();
        assert_eq!(first, second);
    }
}
