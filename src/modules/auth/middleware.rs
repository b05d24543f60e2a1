use super::service;
use crate::modules::user;
use crate::modules::user::repository::User;
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http, http::request::Parts, response::Response};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
enum Error {
    InvalidSession,
}

fn get_session_id_from_header(header: &str) -> Result<String, Error> {
    match header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.trim().to_string())
        }
        _ => Err(Error::InvalidSession),
    }
}

async fn get_user_from_header(ctx: Arc<Context>, header: &str) -> Result<User, Error> {
    let session_id = get_session_id_from_header(header)?;
    let session = service::auth::verify_access_token(ctx.clone(), session_id)
        .await
        .map_err(|_| Error::InvalidSession)?;

    user::repository::find_by_id(&ctx.db_conn.pool, session.user_id)
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)
}

fn invalid_session() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Invalid session token"})),
    )
        .into_response()
}

async fn get_user_from_request(parts: &mut Parts) -> Result<User, Response> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|err| {
            tracing::error!("Request context is missing: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })?;

    let auth_header = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(invalid_session)?;

    get_user_from_header(ctx, auth_header)
        .await
        .map_err(|_| invalid_session())
}

/// An authenticated user holding the `owner` role.
#[derive(Serialize, Clone)]
pub struct OwnerAuth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for OwnerAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let user = get_user_from_request(parts).await?;

        if !user::repository::is_owner(&user) {
            return Err(
                (StatusCode::FORBIDDEN, Json(json!({ "error": "Forbidden" }))).into_response(),
            );
        }

        Ok(Self { user })
    }
}
