use super::types::{request, response};
use crate::{
    modules::{auth::middleware::OwnerAuth, restaurant::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    auth: OwnerAuth,
    payload: request::Payload,
) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::create(&ctx.db_conn.pool, payload.into_create_payload(auth.user.id))
        .await
        .map_err(response::Error::FailedToCreateRestaurant)
        .map(response::Success::RestaurantCreated)
}
