use astra::{Body, Response, ResponseBuilder};
use tracing::warn;

use crate::errors::ServerError;

/// Convert a ServerError into the response the browser should see.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => html_error_response(404, "Not Found"),
        ServerError::BadRequest(msg) => html_error_response(400, &msg),
        // Pages that need an account bounce to the login form.
        ServerError::Unauthorized(_) => redirect_to_login(),
        ServerError::Conflict(msg) => html_error_response(409, &msg),
        ServerError::DbError(msg) => {
            warn!("db error surfaced to client: {msg}");
            html_error_response(500, "Something went wrong on our end.")
        }
        ServerError::InternalError => html_error_response(500, "Internal Server Error"),
    }
}

/// Build a minimal HTML error page.
pub fn html_error_response(status: u16, message: &str) -> Response {
    let html = format!(
        "<!DOCTYPE html>
        <html lang=\"en\">
        <head><meta charset=\"utf-8\"><title>Error {status}</title></head>
        <body>
            <h1>Error {status}</h1>
            <p>{message}</p>
        </body>
        </html>"
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn redirect_to_login() -> Response {
    ResponseBuilder::new()
        .status(302)
        .header("Location", "/login")
        .body(Body::empty())
        .unwrap_or_else(|_| Response::new(Body::from("Unauthorized")))
}
