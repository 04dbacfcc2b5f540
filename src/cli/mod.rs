pub mod ask;
pub mod commands;
pub mod context;
pub mod find;
pub mod interactive;
pub mod ocr;
pub mod serve;
pub mod stats;
pub mod validate;

pub use commands::{Cli, Commands, LogFormat};
