pub mod types;

pub use types::SolverError;
