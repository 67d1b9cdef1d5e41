pub mod error_alert;
pub mod filter;
pub mod listing_card;
pub mod user_card;

pub use error_alert::error_alert;
pub use filter::filter_form;
pub use listing_card::listing_card;
pub use user_card::user_card;
