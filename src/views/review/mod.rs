mod enriched;
pub mod links;

pub use enriched::Enriched;
pub use enriched::{UNKNOWN_FULL_NAME, UNKNOWN_USERNAME};
pub use links::{Collection, Linked};
