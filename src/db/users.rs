use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::errors::ServerError;

/// A user row as shown on the users grid and detail pages.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub handle: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_picture: Option<String>,
    pub created_at: i64,
}

/// What's needed to check a sign-in attempt.
#[derive(Debug)]
pub struct Credentials {
    pub user_id: i64,
    pub handle: String,
    pub password_salt: Vec<u8>,
    pub password_hash: Vec<u8>,
}

pub struct NewUser<'a> {
    pub handle: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password_salt: &'a [u8],
    pub password_hash: &'a [u8],
}

/// Insert a new account. Handle and email should already be normalized
/// (trim/lowercase) by the caller. A taken handle or email surfaces as
/// `Conflict` so the signup form can re-render with a message.
pub fn create_user(conn: &Connection, user: &NewUser, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into users (handle, email, first_name, last_name, password_salt, password_hash, created_at)
        values (?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            user.handle,
            user.email,
            user.first_name,
            user.last_name,
            user.password_salt,
            user.password_hash,
            now
        ],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == ErrorCode::ConstraintViolation =>
        {
            ServerError::Conflict("That username or email is already taken.".into())
        }
        other => ServerError::DbError(format!("insert user failed: {other}")),
    })?;

    Ok(conn.last_insert_rowid())
}

pub fn get_user_by_handle(
    conn: &Connection,
    handle: &str,
) -> Result<Option<UserRow>, ServerError> {
    conn.query_row(
        r#"
        select id, handle, email, first_name, last_name, profile_picture, created_at
        from users
        where handle = ?
        "#,
        params![handle],
        |row| {
            Ok(UserRow {
                id: row.get(0)?,
                handle: row.get(1)?,
                email: row.get(2)?,
                first_name: row.get(3)?,
                last_name: row.get(4)?,
                profile_picture: row.get(5)?,
                created_at: row.get(6)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

/// Look up sign-in credentials by handle or email (the login form accepts
/// either).
pub fn find_credentials(
    conn: &Connection,
    handle_or_email: &str,
) -> Result<Option<Credentials>, ServerError> {
    conn.query_row(
        r#"
        select id, handle, password_salt, password_hash
        from users
        where handle = ?1 or email = ?1
        "#,
        params![handle_or_email],
        |row| {
            Ok(Credentials {
                user_id: row.get(0)?,
                handle: row.get(1)?,
                password_salt: row.get(2)?,
                password_hash: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select credentials failed: {e}")))
}

/// All users, ordered by handle for the users grid.
pub fn list_users(conn: &Connection) -> Result<Vec<UserRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select id, handle, email, first_name, last_name, profile_picture, created_at
            from users
            order by handle
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                handle: row.get(1)?,
                email: row.get(2)?,
                first_name: row.get(3)?,
                last_name: row.get(4)?,
                profile_picture: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
