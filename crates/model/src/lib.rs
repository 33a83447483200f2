pub mod batch;
pub mod outcome;
pub mod sheet;
