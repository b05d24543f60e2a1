use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .nest("/api", modules::get_router())
            .with_state(ctx.clone())
            .layer(Extension(ctx.clone()))
            .layer(DefaultBodyLimit::max(1024 * 1024))
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([
                        Method::OPTIONS,
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::PATCH,
                        Method::DELETE,
                    ])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                    .allow_origin(cors::Any),
            );

        Self { ctx, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        tracing::info!(
            "App is running on {}:{} ({}, {:?})",
            self.ctx.app.host,
            self.ctx.app.port,
            self.ctx.app.url,
            self.ctx.app.environment
        );

        axum::serve(listener, self.router()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{send, unreachable_store_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn health_check_needs_no_store() {
        let (status, json) = send(unreachable_store_app(), Method::GET, "/api", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn listing_reports_store_failures_as_internal_errors() {
        let (status, json) = send(
            unreachable_store_app(),
            Method::GET,
            "/api/restaurants",
            None,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to fetch restaurants");
        assert!(json["details"].is_string());
    }

    #[tokio::test]
    async fn showing_reports_store_failures_as_internal_errors() {
        let (status, json) = send(
            unreachable_store_app(),
            Method::GET,
            "/api/restaurants/01HZX3",
            None,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to fetch restaurant");
    }

    #[tokio::test]
    async fn owner_routes_require_a_session() {
        for (method, uri) in [
            (Method::GET, "/api/users/myrestaurants"),
            (Method::POST, "/api/restaurants"),
            (Method::PUT, "/api/restaurants/01HZX3"),
            (Method::PATCH, "/api/restaurants/01HZX3"),
            (Method::DELETE, "/api/restaurants/01HZX3"),
            (Method::PATCH, "/api/restaurants/01HZX3/toggle-online"),
        ] {
            let (status, json) =
                send(unreachable_store_app(), method, uri, None, Some(json!({}))).await;

            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(json["error"], "Invalid session token");
        }
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let (status, _) = send(
            unreachable_store_app(),
            Method::GET,
            "/api/orders",
            None,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
