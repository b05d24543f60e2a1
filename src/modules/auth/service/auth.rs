use chrono::{NaiveDateTime, Utc};

use super::super::repository;
use crate::{modules::auth::repository::session::Session, types::Context};
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

fn is_expired(expires_at: NaiveDateTime, now: NaiveDateTime) -> bool {
    expires_at < now
}

pub async fn verify_access_token(ctx: Arc<Context>, access_token: String) -> Result<Session> {
    let session = repository::session::find_by_access_token(&ctx.db_conn.pool, access_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if is_expired(session.access_token_expires_at, Utc::now().naive_utc()) {
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}
