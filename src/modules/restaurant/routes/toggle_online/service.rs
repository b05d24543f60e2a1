use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    // Dropping `tx` on any early return rolls the transaction back.
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToToggleRestaurant(err.into())
    })?;

    let restaurant = repository::find_by_id_for_update(&mut *tx, payload.id.clone())
        .await
        .map_err(response::Error::FailedToToggleRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    let restaurant = match restaurant.profile.status.toggled() {
        Some(status) => {
            tracing::debug!(
                "Toggling restaurant {} from {:?} to {:?}",
                payload.id,
                restaurant.profile.status,
                status
            );
            repository::update_status_by_id(&mut *tx, payload.id, status)
                .await
                .map_err(response::Error::FailedToToggleRestaurant)?
        }
        None => restaurant,
    };

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToToggleRestaurant(err.into())
        })
        .map(|_| response::Success::RestaurantToggled(restaurant))
}
