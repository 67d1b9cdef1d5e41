use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, init_test_db, signup_session};

#[test]
fn home_page_loads() {
    let db = init_test_db("home");

    let resp = get(&db, "/", None).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Welcome to Husky Haggles"));
    assert!(body.contains("/listings"));
}

#[test]
fn listings_page_loads_with_filter_form() {
    let db = init_test_db("listings_page");

    let resp = get(&db, "/listings", None).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Filter Listings"));
    assert!(body.contains("No listings found."));
    // Default sort option is selected.
    assert!(body.contains("date_desc"));
}

#[test]
fn users_page_loads() {
    let db = init_test_db("users_page");
    signup_session(&db, "someone");

    let resp = get(&db, "/users", None).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("someone"));
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db("unknown_route");

    let result = get(&db, "/definitely/not/here", None);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn unknown_user_is_not_found() {
    let db = init_test_db("unknown_user");

    let result = get(&db, "/u/nobody", None);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn navbar_reflects_session_state() {
    let db = init_test_db("navbar");

    let anonymous = body_string(get(&db, "/", None).unwrap());
    assert!(anonymous.contains("Sign in"));

    let cookie = signup_session(&db, "jsmith");
    let signed_in = body_string(get(&db, "/", Some(&cookie)).unwrap());
    assert!(signed_in.contains("jsmith"));
    assert!(signed_in.contains("Log out"));
}
