use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    #[arg(long, help = "Spreadsheet identifier (the id segment of the sheet URL)")]
    pub sheet: String,

    #[arg(long, default_value_t = 3, help = "Rows per generated report")]
    pub batch_size: usize,

    #[arg(
        long,
        required = true,
        value_delimiter = ',',
        help = "Columns to include in the report input, in order (comma-separated)"
    )]
    pub columns: Vec<String>,

    #[arg(
        long,
        help = "Model label from the catalog; unknown labels fall back to the default model"
    )]
    pub model: Option<String>,

    #[arg(long, help = "Reset the stored cursor to 0 before processing")]
    pub reset: bool,

    #[arg(long, help = "State store directory (default: ~/.batchreport/state)")]
    pub state_dir: Option<PathBuf>,

    #[arg(
        long,
        help = "Ollama base URL (default: $OLLAMA_URL or http://localhost:11434)"
    )]
    pub ollama_url: Option<String>,

    #[arg(long, help = "Print outcomes as JSON instead of human-readable text")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one processing attempt against a sheet
    Process {
        #[command(flatten)]
        args: ProcessArgs,
    },

    /// Poll the sheet on an interval, processing a batch whenever enough new
    /// rows have arrived
    Watch {
        #[command(flatten)]
        args: ProcessArgs,

        #[arg(long, default_value_t = 30, help = "Seconds between polls")]
        interval: u64,
    },

    /// Fetch a snapshot and print its columns and first rows
    Preview {
        #[arg(long, help = "Spreadsheet identifier")]
        sheet: String,

        #[arg(long, default_value_t = 5, help = "Number of rows to show")]
        rows: usize,

        #[arg(long, help = "Print the preview as JSON")]
        json: bool,
    },

    /// Show the stored cursor for a sheet
    Progress {
        #[arg(long, help = "Spreadsheet identifier")]
        sheet: String,

        #[arg(long, help = "State store directory (default: ~/.batchreport/state)")]
        state_dir: Option<PathBuf>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Reset the stored cursor to 0 for a sheet
    Reset {
        #[arg(long, help = "Spreadsheet identifier")]
        sheet: String,

        #[arg(long, help = "State store directory (default: ~/.batchreport/state)")]
        state_dir: Option<PathBuf>,
    },

    /// List the supported model labels
    Models,
}
