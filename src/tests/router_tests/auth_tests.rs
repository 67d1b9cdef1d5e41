use crate::tests::utils::{body_string, get, init_test_db, post_form, signup_session};

#[test]
fn login_page_loads() {
    let db = init_test_db("login_page");

    let resp = get(&db, "/login", None).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn login_with_wrong_password_shows_error() {
    let db = init_test_db("login_wrong");
    signup_session(&db, "jsmith");

    let resp = post_form(
        &db,
        "/login",
        "handle_or_email=jsmith&password=not-the-password",
        None,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Invalid username or password."));
}

#[test]
fn login_with_unknown_account_shows_same_error() {
    let db = init_test_db("login_unknown");

    let resp = post_form(&db, "/login", "handle_or_email=ghost&password=whatever", None).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Invalid username or password."));
}

#[test]
fn login_succeeds_by_handle_or_email() {
    let db = init_test_db("login_ok");
    signup_session(&db, "jsmith");

    for who in ["jsmith", "jsmith%40example.com"] {
        let form = format!("handle_or_email={who}&password=password123");
        let resp = post_form(&db, "/login", &form, None).unwrap();
        assert_eq!(resp.status(), 302, "login as {who} failed");
        let cookie = resp
            .headers()
            .get("Set-Cookie")
            .and_then(|v| v.to_str().ok())
            .expect("no session cookie");
        assert!(cookie.starts_with("session="));
        assert!(cookie.contains("HttpOnly"));
    }
}

#[test]
fn logout_revokes_the_session() {
    let db = init_test_db("logout");
    let cookie = signup_session(&db, "jsmith");

    // Session works before logout.
    assert!(body_string(get(&db, "/", Some(&cookie)).unwrap()).contains("jsmith"));

    let resp = post_form(&db, "/logout", "", Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 302);

    // The old cookie no longer resolves to a user.
    let body = body_string(get(&db, "/", Some(&cookie)).unwrap());
    assert!(body.contains("Sign in"));
    assert!(!body.contains("Log out"));
}

#[test]
fn protected_page_redirects_anonymous_users() {
    let db = init_test_db("protected");

    let err = get(&db, "/listings/new", None).expect_err("should require a session");
    // Surfaced to the browser as a redirect to /login.
    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").and_then(|v| v.to_str().ok()),
        Some("/login")
    );
}
