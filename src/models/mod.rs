pub mod entry;
pub mod match_result;
pub mod threshold;

pub use entry::*;
pub use match_result::*;
pub use threshold::*;
