mod create;
mod delete;
mod get;
mod list;
mod list_owned;
mod toggle_online;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .merge(toggle_online::get_router())
}

pub fn get_owner_router() -> Router<Arc<Context>> {
    Router::new().merge(list_owned::get_router())
}
