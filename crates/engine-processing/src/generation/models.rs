use lazy_static::lazy_static;
use std::collections::HashMap;

/// Model used when a label is not in the catalog. Falling back instead of
/// failing keeps the processor operable even with stale UI state.
pub const DEFAULT_MODEL: &str = "llama3:latest";

/// Supported human-readable labels and their backend model names, in display
/// order.
pub const MODEL_CATALOG: &[(&str, &str)] = &[
    ("DeepSeek R1 (1.5B)", "deepseek-r1:1.5b"),
    ("DeepSeek R1 (8B)", "deepseek-r1:8b"),
    ("LLaMA 3.2 (1B)", "llama3.2:1b"),
    ("LLaMA 3 (8b)", "llama3:latest"),
    ("LLaMA 3.2 (3.2b)", "llama3.2:latest"),
];

lazy_static! {
    static ref MODEL_BY_LABEL: HashMap<&'static str, &'static str> =
        MODEL_CATALOG.iter().copied().collect();
}

/// Maps a label to its backend model name, falling back to [`DEFAULT_MODEL`]
/// for unrecognized labels.
pub fn resolve_model_label(label: &str) -> &'static str {
    MODEL_BY_LABEL.get(label).copied().unwrap_or(DEFAULT_MODEL)
}

/// First catalog entry, used as the default label by callers.
pub fn default_label() -> &'static str {
    MODEL_CATALOG[0].0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve() {
        assert_eq!(resolve_model_label("DeepSeek R1 (1.5B)"), "deepseek-r1:1.5b");
        assert_eq!(resolve_model_label("LLaMA 3 (8b)"), "llama3:latest");
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        assert_eq!(resolve_model_label("no such model"), DEFAULT_MODEL);
        assert_eq!(resolve_model_label(""), DEFAULT_MODEL);
    }

    #[test]
    fn default_label_is_in_the_catalog() {
        assert_ne!(resolve_model_label(default_label()), DEFAULT_MODEL);
    }
}
