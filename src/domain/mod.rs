pub mod generation;
pub mod listing;
pub mod listing_id;
pub mod query;
