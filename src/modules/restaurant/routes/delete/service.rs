use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let deleted = repository::delete_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(response::Error::FailedToDeleteRestaurant)?;

    Ok(response::Success::from_deleted_rows(payload.id, deleted))
}
