pub mod error;
pub mod formatter;
pub mod generation;
pub mod processor;
pub mod selector;
