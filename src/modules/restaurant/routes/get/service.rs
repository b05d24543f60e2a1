use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_details_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(response::Error::FailedToFetchRestaurant)
        .map(response::Success::Restaurant)
}
