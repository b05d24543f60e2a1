use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::update_by_id(&ctx.db_conn.pool, payload.id.clone(), payload.body.into())
        .await
        .map_err(response::Error::FailedToUpdateRestaurant)?;

    repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(response::Error::FailedToUpdateRestaurant)
        .map(response::Success::RestaurantUpdated)
}
