use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::{Body, Response};
use http::Method;

use crate::db::connection::{init_db, Database};
use crate::errors::ServerError;
use crate::router::handle;

/// Fresh throwaway DB using the production schema. Each test gets its own
/// file so tests can run in parallel.
pub fn init_test_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "hh_{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub fn get(db: &Database, path: &str, cookie: Option<&str>) -> Result<Response, ServerError> {
    let mut builder = http::Request::builder().method(Method::GET).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    let req = builder.body(Body::empty()).unwrap();
    handle(req, db)
}

pub fn post_form(
    db: &Database,
    path: &str,
    form_body: &str,
    cookie: Option<&str>,
) -> Result<Response, ServerError> {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    let req = builder
        .body(Body::from(form_body.as_bytes().to_vec()))
        .unwrap();
    handle(req, db)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

/// Register an account through the router and return the session cookie
/// (`session=...`) from the redirect.
pub fn signup_session(db: &Database, handle: &str) -> String {
    let form = format!(
        "first_name=Test&last_name=User&handle={handle}&email={handle}%40example.com\
         &password=password123&confirm_password=password123"
    );
    let resp = post_form(db, "/signup", &form, None).expect("signup failed");
    assert_eq!(resp.status(), 302, "signup did not redirect");

    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("signup did not set a session cookie");
    set_cookie
        .split(';')
        .next()
        .expect("malformed Set-Cookie")
        .to_string()
}
