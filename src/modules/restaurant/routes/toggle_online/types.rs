pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::restaurant::repository::{self, Restaurant};

    pub enum Success {
        RestaurantToggled(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantToggled(restaurant) => {
                    (StatusCode::OK, Json(restaurant)).into_response()
                }
            }
        }
    }

    pub enum Error {
        RestaurantNotFound,
        FailedToToggleRestaurant(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantNotFound => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to toggle restaurant status",
                        "details": "Restaurant not found"
                    })),
                )
                    .into_response(),
                Self::FailedToToggleRestaurant(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to toggle restaurant status",
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
    use super::response::Error;
    use axum::{http::StatusCode, response::IntoResponse};

    #[test]
    fn missing_restaurant_is_not_distinguished_from_store_failures() {
        assert_eq!(
            Error::RestaurantNotFound.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
