pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::restaurant::repository;

    #[derive(Debug, PartialEq)]
    pub enum Success {
        RestaurantDeleted(String),
        RestaurantNotDeleted,
    }

    impl Success {
        pub fn from_deleted_rows(id: String, deleted: u64) -> Self {
            match deleted {
                1 => Self::RestaurantDeleted(id),
                _ => Self::RestaurantNotDeleted,
            }
        }

        pub fn message(&self) -> String {
            match self {
                Self::RestaurantDeleted(id) => format!("Sucessfuly deleted restaurant id.{}", id),
                Self::RestaurantNotDeleted => String::from("Could not delete restaurant."),
            }
        }
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            (StatusCode::OK, Json(self.message())).into_response()
        }
    }

    pub enum Error {
        FailedToDeleteRestaurant(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToDeleteRestaurant(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to delete restaurant",
                        "details": err.to_string()
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
