pub mod request {
    use crate::modules::restaurant::repository::{CreateRestaurantPayload, Status};
    use crate::utils::validation::{validate_phone_number, validate_postal_code};
    use serde::Deserialize;
    use validator::Validate;

    /// Body of a restaurant creation request. Unknown fields, including any
    /// attempt to set the owner, are ignored.
    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 1, max = 255))]
        pub name: String,
        pub description: Option<String>,
        #[validate(length(min = 1, max = 255))]
        pub address: String,
        #[validate(custom(function = "validate_postal_code"))]
        pub postal_code: String,
        #[validate(url)]
        pub url: Option<String>,
        #[validate(range(min = 0.0))]
        #[serde(default)]
        pub shipping_costs: f64,
        #[validate(range(min = 0.0))]
        pub average_service_minutes: Option<f64>,
        #[validate(email)]
        pub email: Option<String>,
        #[validate(custom(function = "validate_phone_number"))]
        pub phone: Option<String>,
        pub logo: Option<String>,
        pub hero_image: Option<String>,
        #[serde(default)]
        pub status: Status,
        pub restaurant_category_id: String,
    }

    impl Payload {
        pub fn into_create_payload(self, owner_id: String) -> CreateRestaurantPayload {
            CreateRestaurantPayload {
                name: self.name,
                description: self.description,
                address: self.address,
                postal_code: self.postal_code,
                url: self.url,
                shipping_costs: self.shipping_costs,
                average_service_minutes: self.average_service_minutes,
                email: self.email,
                phone: self.phone,
                logo: self.logo,
                hero_image: self.hero_image,
                status: self.status,
                restaurant_category_id: self.restaurant_category_id,
                owner_id,
            }
        }
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::restaurant::repository::{self, Restaurant},
        utils,
    };

    pub enum Success {
        RestaurantCreated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantCreated(restaurant) => {
                    (StatusCode::OK, Json(restaurant)).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateRestaurant(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::FailedToCreateRestaurant(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Restaurant creation failed",
                        "details": err.to_string()
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
