mod domain;
pub mod export;
mod generator;

pub use domain::{Department, EmployeeRecord, EmployeeTable, COLUMNS};
pub use generator::{generate, DEFAULT_ROWS, DEFAULT_SEED, MAX_ROWS};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("row count must be between 0 and {max}, got {requested}", max = MAX_ROWS)]
    InvalidRowCount { requested: i64 },
    #[error("row {position} has id {id}; ids must run 1..=N in order")]
    NonSequentialId { position: usize, id: u32 },
    #[error("salary distribution rejected its parameters: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}
