pub mod diff;
pub mod formatting;
