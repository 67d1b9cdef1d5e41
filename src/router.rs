use std::collections::HashMap;
use std::io::Read;
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::Request;
use chrono::Utc;
use tracing::warn;
use url::form_urlencoded;

use crate::auth::password::{hash_new_password, verify_password};
use crate::auth::signup::SignupForm;
use crate::auth::token;
use crate::db::sessions::{self, SessionUser, SESSION_TTL_SECS};
use crate::db::users::{self, NewUser};
use crate::db::{listings, Database};
use crate::domain::generation::Generations;
use crate::domain::listing::{Listing, ListingDraft};
use crate::domain::query::FilterCriteria;
use crate::errors::ServerError;
use crate::responses::{html_response, no_content_response, redirect_response, ResultResp};
use crate::templates::pages;

// Keyed by the `cid` the filter form carries, so each browser tab has
// its own generation sequence and tabs can't invalidate each other.
pub(crate) static GRID_GENERATIONS: LazyLock<Generations> = LazyLock::new(Generations::new);

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let session = session_from_request(&req, db)?;
            html_response(pages::home_page(session.as_ref()))
        }

        ("GET", "/listings") => listings_page(req, db),
        ("GET", "/listings/grid") => listings_grid_partial(req, db),
        ("GET", "/listings/new") => {
            let session = require_session(&req, db)?;
            let draft = ListingDraft {
                in_stock: true,
                ..ListingDraft::default()
            };
            html_response(pages::add_listing_page(&session, &draft, &[]))
        }
        ("POST", "/listings") => create_listing(req, db),

        ("GET", "/users") => {
            let session = session_from_request(&req, db)?;
            let users = db.with_conn(|conn| users::list_users(conn))?;
            html_response(pages::users_page(session.as_ref(), &users))
        }

        ("GET", "/signup") => html_response(pages::signup_page(&SignupForm::default(), &[])),
        ("POST", "/signup") => signup(req, db),
        ("GET", "/login") => html_response(pages::login_page(None)),
        ("POST", "/login") => login(req, db),
        ("POST", "/logout") => logout(req, db),

        ("GET", p) if p.starts_with("/u/") => user_routes(&req, db, p),

        _ => Err(ServerError::NotFound),
    }
}

// ---------------------------------------------------------------------------
// Listings

fn listings_page(req: Request, db: &Database) -> ResultResp {
    let session = session_from_request(&req, db)?;
    let criteria = FilterCriteria::from_params(&parse_query(&req));
    let (listings, load_failed) = fetch_and_compose(db, &criteria);
    // Fresh client id per full page load; the filter form echoes it on
    // every grid refresh.
    let client_id = token::generate_token(&mut rand::rngs::OsRng, 8);
    html_response(pages::listings_page(
        session.as_ref(),
        &criteria,
        &client_id,
        &listings,
        load_failed,
    ))
}

/// htmx partial for filter changes. Draws a generation for the client up
/// front; `finish_grid_render` drops the render if the same client
/// started a newer request meanwhile, so a slow response can't overwrite
/// a newer grid.
fn listings_grid_partial(req: Request, db: &Database) -> ResultResp {
    let params = parse_query(&req);
    let client = params.get("cid").cloned().unwrap_or_default();
    let generation = GRID_GENERATIONS.draw(&client);
    let criteria = FilterCriteria::from_params(&params);
    let (listings, load_failed) = fetch_and_compose(db, &criteria);
    finish_grid_render(&client, generation, &listings, load_failed)
}

/// 204 (htmx leaves the grid alone) when `generation` is no longer the
/// newest draw for `client`; the full partial otherwise.
pub(crate) fn finish_grid_render(
    client: &str,
    generation: u64,
    listings: &[Listing],
    load_failed: bool,
) -> ResultResp {
    if !GRID_GENERATIONS.is_current(client, generation) {
        return no_content_response();
    }
    html_response(pages::listings_grid(listings, load_failed))
}

/// Fetch candidates (some predicates pushed into SQL) and run the
/// composer over them. A failed fetch degrades to an empty grid plus a
/// "could not load" notice; there is no automatic retry.
fn fetch_and_compose(db: &Database, criteria: &FilterCriteria) -> (Vec<Listing>, bool) {
    match listings::search_listings(db, criteria) {
        Ok(rows) => (criteria.apply(rows), false),
        Err(e) => {
            warn!("listings fetch failed: {e}");
            (Vec::new(), true)
        }
    }
}

fn create_listing(req: Request, db: &Database) -> ResultResp {
    let session = require_session(&req, db)?;
    let params = read_form(req)?;
    let draft = ListingDraft::from_params(&params);

    let errors = draft.validate();
    if !errors.is_empty() {
        return html_response(pages::add_listing_page(&session, &draft, &errors));
    }

    let listing = draft.clone().into_listing(&session.handle, Utc::now());
    match listings::insert_listing(db, &listing) {
        Ok(()) => redirect_response(&format!("/u/{}/{}", listing.owner_handle, listing.id), None),
        // Same owner, same name: the id collides and the create is
        // rejected rather than silently updating the existing listing.
        Err(ServerError::Conflict(msg)) => {
            html_response(pages::add_listing_page(&session, &draft, &[msg]))
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Users & listing details

fn user_routes(req: &Request, db: &Database, path: &str) -> ResultResp {
    let session = session_from_request(req, db)?;
    let rest = &path["/u/".len()..];
    let mut segments = rest.split('/').filter(|s| !s.is_empty());

    match (segments.next(), segments.next(), segments.next()) {
        (Some(handle), None, _) => {
            let Some(user) = db.with_conn(|conn| users::get_user_by_handle(conn, handle))? else {
                return Err(ServerError::NotFound);
            };
            let their_listings = listings::listings_for_user(db, handle)?;
            html_response(pages::user_details_page(
                session.as_ref(),
                &user,
                &their_listings,
            ))
        }
        (Some(handle), Some(listing_id), None) => {
            let Some(listing) = listings::get_listing(db, handle, listing_id)? else {
                return Err(ServerError::NotFound);
            };
            let seller = db.with_conn(|conn| users::get_user_by_handle(conn, handle))?;
            html_response(pages::listing_details_page(
                session.as_ref(),
                &listing,
                seller.as_ref(),
            ))
        }
        _ => Err(ServerError::NotFound),
    }
}

// ---------------------------------------------------------------------------
// Auth

fn signup(req: Request, db: &Database) -> ResultResp {
    let params = read_form(req)?;
    let form = SignupForm::from_params(&params);

    let errors = form.validate();
    if !errors.is_empty() {
        return html_response(pages::signup_page(&form, &errors));
    }

    let (salt, hash) = hash_new_password(&form.password);
    let handle = form.normalized_handle();
    let email = form.normalized_email();

    let created = db.with_conn(|conn| {
        users::create_user(
            conn,
            &NewUser {
                handle: &handle,
                email: &email,
                first_name: &form.first_name,
                last_name: &form.last_name,
                password_salt: &salt,
                password_hash: &hash,
            },
            now_unix(),
        )
    });

    match created {
        Ok(user_id) => {
            let token = db.with_conn(|conn| sessions::create_session(conn, user_id, now_unix()))?;
            redirect_response("/listings", Some(&session_cookie(&token)))
        }
        Err(ServerError::Conflict(msg)) => html_response(pages::signup_page(&form, &[msg])),
        Err(e) => Err(e),
    }
}

fn login(req: Request, db: &Database) -> ResultResp {
    let params = read_form(req)?;
    let handle_or_email = params
        .get("handle_or_email")
        .map(|v| v.trim().to_lowercase())
        .unwrap_or_default();
    let password = params.get("password").cloned().unwrap_or_default();

    let creds = db.with_conn(|conn| users::find_credentials(conn, &handle_or_email))?;
    match creds {
        Some(c) if verify_password(&c.password_salt, &c.password_hash, &password) => {
            let token = db.with_conn(|conn| sessions::create_session(conn, c.user_id, now_unix()))?;
            redirect_response("/listings", Some(&session_cookie(&token)))
        }
        // Same message for unknown account and wrong password.
        _ => html_response(pages::login_page(Some("Invalid username or password."))),
    }
}

fn logout(req: Request, db: &Database) -> ResultResp {
    if let Some(token) = session_token(&req) {
        db.with_conn(|conn| sessions::revoke_session(conn, &token, now_unix()))?;
    }
    redirect_response("/", Some("session=; Path=/; HttpOnly; Max-Age=0"))
}

// ---------------------------------------------------------------------------
// Request plumbing

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn session_cookie(token: &str) -> String {
    format!("session={token}; Path=/; HttpOnly; Max-Age={SESSION_TTL_SECS}")
}

fn session_token(req: &Request) -> Option<String> {
    let cookies = req.headers().get("Cookie")?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "session").then(|| value.to_string())
    })
}

/// Session state is resolved once per request from the cookie and passed
/// explicitly to whatever needs it.
fn session_from_request(req: &Request, db: &Database) -> Result<Option<SessionUser>, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(None);
    };
    db.with_conn(|conn| sessions::load_user_from_session(conn, &token, now_unix()))
}

fn require_session(req: &Request, db: &Database) -> Result<SessionUser, ServerError> {
    session_from_request(req, db)?
        .ok_or_else(|| ServerError::Unauthorized("sign in to continue".into()))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(form_urlencoded::parse(&buf).into_owned().collect())
}
