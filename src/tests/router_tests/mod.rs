mod auth_tests;
mod listings_tests;
mod pages_tests;
mod signup_tests;
