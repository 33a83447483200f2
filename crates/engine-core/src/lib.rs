pub mod error;
pub mod retry;
pub mod state;
