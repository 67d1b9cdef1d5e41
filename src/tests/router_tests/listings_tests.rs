use crate::domain::listing_id::generate_listing_id;
use crate::tests::utils::{body_string, get, init_test_db, post_form, signup_session};

fn create_listing_form(name: &str, price: &str, in_stock: bool) -> String {
    let mut form = format!("name={name}&description=%3Cp%3Edesc%3C%2Fp%3E&price={price}");
    if in_stock {
        form.push_str("&in_stock=on");
    }
    form
}

#[test]
fn creating_a_listing_redirects_to_its_detail_page() {
    let db = init_test_db("create_listing");
    let cookie = signup_session(&db, "jsmith");

    let resp = post_form(
        &db,
        "/listings",
        &create_listing_form("Vintage+Chair", "25", true),
        Some(&cookie),
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    let expected_id = generate_listing_id("jsmith", "Vintage Chair");
    assert_eq!(
        resp.headers().get("Location").and_then(|v| v.to_str().ok()),
        Some(format!("/u/jsmith/{expected_id}").as_str())
    );

    // The detail page renders it.
    let detail = get(&db, &format!("/u/jsmith/{expected_id}"), None).unwrap();
    assert_eq!(detail.status(), 200);
    let body = body_string(detail);
    assert!(body.contains("Vintage Chair"));
    assert!(body.contains("$25.00"));
}

#[test]
fn duplicate_listing_name_is_rejected() {
    let db = init_test_db("dup_listing");
    let cookie = signup_session(&db, "jsmith");

    let form = create_listing_form("Vintage+Chair", "25", true);
    assert_eq!(
        post_form(&db, "/listings", &form, Some(&cookie)).unwrap().status(),
        302
    );

    let resp = post_form(&db, "/listings", &form, Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("already have a listing with that name"));
}

#[test]
fn same_name_by_different_owners_is_fine() {
    let db = init_test_db("two_owners");
    let alice = signup_session(&db, "alice");
    let bob = signup_session(&db, "bob");

    let form = create_listing_form("Bike", "90", true);
    assert_eq!(post_form(&db, "/listings", &form, Some(&alice)).unwrap().status(), 302);
    assert_eq!(post_form(&db, "/listings", &form, Some(&bob)).unwrap().status(), 302);
}

#[test]
fn listing_without_a_name_re_renders_the_form() {
    let db = init_test_db("no_name");
    let cookie = signup_session(&db, "jsmith");

    let resp = post_form(&db, "/listings", "price=10&in_stock=on", Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Listing name is required."));
}

#[test]
fn listings_page_defaults_to_in_stock_only() {
    let db = init_test_db("grid_default");
    let cookie = signup_session(&db, "jsmith");

    post_form(&db, "/listings", &create_listing_form("Lamp", "10", true), Some(&cookie)).unwrap();
    post_form(&db, "/listings", &create_listing_form("Desk", "50", false), Some(&cookie)).unwrap();

    let body = body_string(get(&db, "/listings", None).unwrap());
    assert!(body.contains("Lamp"));
    assert!(!body.contains("Desk"));
}

#[test]
fn grid_partial_applies_submitted_filters() {
    let db = init_test_db("grid_filters");
    let cookie = signup_session(&db, "jsmith");

    post_form(&db, "/listings", &create_listing_form("Lamp", "10", true), Some(&cookie)).unwrap();
    post_form(&db, "/listings", &create_listing_form("Desk", "50", false), Some(&cookie)).unwrap();

    // Sold only: Desk, not Lamp. The partial has no page chrome.
    let resp = get(&db, "/listings/grid?filtered=1&sold_only=on", None).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Desk"));
    assert!(!body.contains("Lamp"));
    assert!(!body.contains("<!DOCTYPE html>"));

    // Search narrows further.
    let resp = get(&db, "/listings/grid?filtered=1&search_term=noexist", None).unwrap();
    assert!(body_string(resp).contains("No listings found."));
}

#[test]
fn superseded_grid_render_answers_204_for_that_tab_only() {
    use crate::router::{finish_grid_render, GRID_GENERATIONS};

    let stale = GRID_GENERATIONS.draw("tab-1");
    let newest = GRID_GENERATIONS.draw("tab-1");
    let other_tab = GRID_GENERATIONS.draw("tab-2");

    // The older tab-1 request was superseded, so its render is dropped.
    assert_eq!(finish_grid_render("tab-1", stale, &[], false).unwrap().status(), 204);
    // The newest tab-1 request and the unrelated tab both render.
    assert_eq!(finish_grid_render("tab-1", newest, &[], false).unwrap().status(), 200);
    assert_eq!(finish_grid_render("tab-2", other_tab, &[], false).unwrap().status(), 200);
}

#[test]
fn listings_page_carries_a_client_id_for_grid_refreshes() {
    let db = init_test_db("grid_cid");
    let body = body_string(get(&db, "/listings", None).unwrap());
    assert!(body.contains("name=\"cid\""));
}

#[test]
fn user_page_shows_their_listings() {
    let db = init_test_db("user_listings");
    let cookie = signup_session(&db, "alice");
    post_form(&db, "/listings", &create_listing_form("Bike", "90", true), Some(&cookie)).unwrap();

    let body = body_string(get(&db, "/u/alice", None).unwrap());
    assert!(body.contains("Listings by alice"));
    assert!(body.contains("Bike"));
}
