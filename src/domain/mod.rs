pub mod listing;
pub mod yields;

pub use listing::{assemble, filter_by_min_yield, ListingRecord, FETCH_FAILED_NOTE};
