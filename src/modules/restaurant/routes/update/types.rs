pub mod request {
    use crate::modules::restaurant::repository::{Status, UpdateRestaurantPayload};
    use crate::utils::validation::{validate_phone_number, validate_postal_code};
    use serde::{Deserialize, Deserializer};
    use validator::Validate;

    /// Keeps an explicit `null` apart from a missing field: `null` becomes
    /// `Some(None)`, a missing field falls back to `None` through `default`.
    fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }

    #[derive(Deserialize, Validate, Default)]
    pub struct Body {
        #[validate(length(min = 1, max = 255))]
        pub name: Option<String>,
        #[serde(default, deserialize_with = "nullable")]
        pub description: Option<Option<String>>,
        #[validate(length(min = 1, max = 255))]
        pub address: Option<String>,
        #[validate(custom(function = "validate_postal_code"))]
        pub postal_code: Option<String>,
        #[validate(url)]
        #[serde(default, deserialize_with = "nullable")]
        pub url: Option<Option<String>>,
        #[validate(range(min = 0.0))]
        pub shipping_costs: Option<f64>,
        #[validate(range(min = 0.0))]
        #[serde(default, deserialize_with = "nullable")]
        pub average_service_minutes: Option<Option<f64>>,
        #[validate(email)]
        #[serde(default, deserialize_with = "nullable")]
        pub email: Option<Option<String>>,
        #[validate(custom(function = "validate_phone_number"))]
        #[serde(default, deserialize_with = "nullable")]
        pub phone: Option<Option<String>>,
        #[serde(default, deserialize_with = "nullable")]
        pub logo: Option<Option<String>>,
        #[serde(default, deserialize_with = "nullable")]
        pub hero_image: Option<Option<String>>,
        pub status: Option<Status>,
        pub restaurant_category_id: Option<String>,
    }

    impl From<Body> for UpdateRestaurantPayload {
        fn from(body: Body) -> Self {
            Self {
                name: body.name,
                description: body.description,
                address: body.address,
                postal_code: body.postal_code,
                url: body.url,
                shipping_costs: body.shipping_costs,
                average_service_minutes: body.average_service_minutes,
                email: body.email,
                phone: body.phone,
                logo: body.logo,
                hero_image: body.hero_image,
                status: body.status,
                restaurant_category_id: body.restaurant_category_id,
            }
        }
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
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
        RestaurantUpdated(Option<Restaurant>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantUpdated(restaurant) => {
                    (StatusCode::OK, Json(restaurant)).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToUpdateRestaurant(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::FailedToUpdateRestaurant(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to update restaurant",
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
    use super::request::Body;
    use crate::modules::restaurant::repository::{Status, UpdateRestaurantPayload};
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn absent_fields_stay_untouched() {
        let body: Body = serde_json::from_value(json!({ "name": "Casa Pepe" })).unwrap();
        assert!(body.validate().is_ok());

        let update = UpdateRestaurantPayload::from(body);

        assert_eq!(update.name.as_deref(), Some("Casa Pepe"));
        assert!(update.address.is_none());
        assert!(update.status.is_none());
        assert!(update.shipping_costs.is_none());
    }

    #[test]
    fn explicit_nulls_clear_nullable_fields() {
        let body: Body =
            serde_json::from_value(json!({ "description": null, "url": null, "logo": "logo.png" }))
                .unwrap();
        assert!(body.validate().is_ok());

        let update = UpdateRestaurantPayload::from(body);

        assert_eq!(update.description, Some(None));
        assert_eq!(update.url, Some(None));
        assert_eq!(update.logo, Some(Some("logo.png".to_string())));
        assert_eq!(update.email, None);
        assert_eq!(update.average_service_minutes, None);
    }

    #[test]
    fn nullable_fields_are_validated_when_set() {
        let body: Body = serde_json::from_value(json!({
            "email": "not-an-email",
            "phone": "call me",
            "average_service_minutes": -1.0
        }))
        .unwrap();

        let errors = body.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("phone"));
        assert!(errors.field_errors().contains_key("average_service_minutes"));
    }

    #[test]
    fn status_can_be_set_directly() {
        let body: Body =
            serde_json::from_value(json!({ "status": "temporarily closed" })).unwrap();

        assert_eq!(body.status, Some(Status::TemporarilyClosed));
    }

    #[test]
    fn empty_body_is_valid() {
        assert!(Body::default().validate().is_ok());
    }

    #[test]
    fn present_fields_are_validated() {
        let body: Body =
            serde_json::from_value(json!({ "name": "", "url": "nope" })).unwrap();

        let errors = body.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("url"));
    }
}
