use crate::db::users;
use crate::tests::utils::{body_string, get, init_test_db, post_form};

#[test]
fn signup_page_loads() {
    let db = init_test_db("signup_page");

    let resp = get(&db, "/signup", None).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign Up"));
    assert!(body.contains("confirm_password"));
}

#[test]
fn empty_signup_lists_every_problem() {
    let db = init_test_db("signup_empty");

    let resp = post_form(&db, "/signup", "", None).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("First name is required."));
    assert!(body.contains("Username is required."));
    assert!(body.contains("Confirm password is required."));
}

#[test]
fn mismatched_passwords_keep_fields_filled() {
    let db = init_test_db("signup_mismatch");

    let form = "first_name=Jane&last_name=Smith&handle=jsmith&email=j%40example.com\
                &password=password123&confirm_password=different456";
    let resp = post_form(&db, "/signup", form, None).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Passwords do not match."));
    // Re-rendered form keeps what was typed, except the passwords.
    assert!(body.contains("value=\"Jane\""));
    assert!(body.contains("value=\"jsmith\""));
    assert!(!body.contains("password123"));
}

#[test]
fn successful_signup_creates_user_and_signs_in() {
    let db = init_test_db("signup_ok");

    let form = "first_name=Jane&last_name=Smith&handle=JSmith&email=J%40example.com\
                &password=password123&confirm_password=password123";
    let resp = post_form(&db, "/signup", form, None).unwrap();

    assert_eq!(resp.status(), 302);
    let location = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(location, "/listings");
    assert!(resp.headers().get("Set-Cookie").is_some());

    // Handle and email are stored lowercased.
    db.with_conn(|conn| {
        let user = users::get_user_by_handle(conn, "jsmith")?.expect("user missing");
        assert_eq!(user.email, "j@example.com");
        Ok(())
    })
    .unwrap();
}

#[test]
fn duplicate_handle_re_renders_with_conflict_message() {
    let db = init_test_db("signup_dup");

    let form = "first_name=Jane&last_name=Smith&handle=jsmith&email=j%40example.com\
                &password=password123&confirm_password=password123";
    assert_eq!(post_form(&db, "/signup", form, None).unwrap().status(), 302);

    let form2 = "first_name=Other&last_name=Person&handle=jsmith&email=other%40example.com\
                 &password=password123&confirm_password=password123";
    let resp = post_form(&db, "/signup", form2, None).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("already taken"));
}
