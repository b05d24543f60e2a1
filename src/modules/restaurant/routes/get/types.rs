pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::restaurant::repository::{self, RestaurantDetails};

    pub enum Success {
        /// A missing restaurant is answered with a JSON `null`.
        Restaurant(Option<RestaurantDetails>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Restaurant(restaurant) => (StatusCode::OK, Json(restaurant)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchRestaurant(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchRestaurant(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to fetch restaurant",
                        "details": err.to_string()
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::response;
    use axum::{body, http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn missing_restaurant_is_null() {
        let response = response::Success::Restaurant(None).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"null");
    }
}
