pub mod add_listing;
pub mod home;
pub mod listing_details;
pub mod listings;
pub mod login;
pub mod signup;
pub mod user_details;
pub mod users;

pub use add_listing::add_listing_page;
pub use home::home_page;
pub use listing_details::listing_details_page;
pub use listings::{listings_grid, listings_page};
pub use login::login_page;
pub use signup::signup_page;
pub use user_details::user_details_page;
pub use users::users_page;
