use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::token::{generate_token_default, hash_token};
use crate::errors::ServerError;

/// Sessions live for a week; signing in again just creates a new row.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

/// The signed-in account, loaded per-request from the session cookie and
/// passed explicitly into whatever needs it.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i64,
    pub handle: String,
}

/// Create a session row and return the raw token for the cookie.
/// Only the SHA-256 hash of the token is stored.
pub fn create_session(conn: &Connection, user_id: i64, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_token_default();
    let hash = hash_token(&raw_token);

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, now + SESSION_TTL_SECS],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

/// Resolve a cookie token to its user, if the session is live.
pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SessionUser>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select u.id, u.handle
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| {
            Ok(SessionUser {
                user_id: row.get(0)?,
                handle: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

/// Revoke the session behind a cookie token (logout). Unknown tokens are
/// a no-op.
pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);

    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;

    Ok(())
}
