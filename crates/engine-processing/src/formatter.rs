use model::sheet::SheetRow;

const FIELD_SEPARATOR: &str = " | ";

/// Projects rows onto the caller-selected columns, in the caller's order, and
/// serializes each row as one line of separator-delimited text.
///
/// A selected column absent from a row is silently skipped (permissive under
/// upstream schema drift), and values that trim to empty are dropped. A row
/// with no surviving parts contributes no line at all, so sparse rows never
/// pollute the prompt with blank entries.
pub fn format_rows(rows: &[SheetRow], selected_columns: &[String]) -> String {
    let mut lines = Vec::with_capacity(rows.len());

    for row in rows {
        let parts: Vec<&str> = selected_columns
            .iter()
            .filter_map(|column| row.get(column))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect();

        if !parts.is_empty() {
            lines.push(parts.join(FIELD_SEPARATOR));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::sheet::SheetRow;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn joins_selected_values_with_separator() {
        let rows = vec![SheetRow::from_pairs([
            ("Review", "Great coffee"),
            ("Rating", "5"),
            ("Visit", "2024-01-03"),
        ])];

        let text = format_rows(&rows, &cols(&["Review", "Rating"]));
        assert_eq!(text, "Great coffee | 5");
    }

    #[test]
    fn preserves_caller_column_order_not_source_order() {
        let rows = vec![SheetRow::from_pairs([
            ("Review", "Great coffee"),
            ("Rating", "5"),
        ])];

        let text = format_rows(&rows, &cols(&["Rating", "Review"]));
        assert_eq!(text, "5 | Great coffee");
    }

    #[test]
    fn all_empty_row_contributes_no_line() {
        let rows = vec![
            SheetRow::from_pairs([("Review", ""), ("Rating", "  ")]),
            SheetRow::from_pairs([("Review", "Nice place"), ("Rating", "4")]),
        ];

        let text = format_rows(&rows, &cols(&["Review", "Rating"]));
        assert_eq!(text, "Nice place | 4");
    }

    #[test]
    fn missing_column_is_skipped_silently() {
        let rows = vec![SheetRow::from_pairs([("Review", "Great coffee")])];

        let text = format_rows(&rows, &cols(&["Review", "Sentiment"]));
        assert_eq!(text, "Great coffee");
    }

    #[test]
    fn values_are_trimmed() {
        let rows = vec![SheetRow::from_pairs([("Review", "  ok  "), ("Rating", "3")])];

        let text = format_rows(&rows, &cols(&["Review", "Rating"]));
        assert_eq!(text, "ok | 3");
    }

    #[test]
    fn rows_become_one_line_each() {
        let rows = vec![
            SheetRow::from_pairs([("Review", "a")]),
            SheetRow::from_pairs([("Review", "b")]),
        ];

        let text = format_rows(&rows, &cols(&["Review"]));
        assert_eq!(text, "a\nb");
    }
}
