use chrono::NaiveDateTime;
use sqlx::PgExecutor;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Session {
    pub user_id: String,
    pub access_token_expires_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_by_access_token<'e, E: PgExecutor<'e>>(
    e: E,
    access_token: String,
) -> Result<Option<Session>, Error> {
    sqlx::query_as::<_, Session>(
        "
            SELECT user_id, access_token_expires_at
            FROM sessions
            WHERE access_token = $1
        ",
    )
    .bind(access_token)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching session by access token: {}", err);
        Error::UnexpectedError
    })
}
