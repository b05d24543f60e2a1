use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{PgExecutor, Postgres, QueryBuilder};
use std::fmt;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "restaurant_status")]
pub enum Status {
    #[serde(rename = "online")]
    #[sqlx(rename = "online")]
    Online,
    #[default]
    #[serde(rename = "offline")]
    #[sqlx(rename = "offline")]
    Offline,
    #[serde(rename = "closed")]
    #[sqlx(rename = "closed")]
    Closed,
    #[serde(rename = "temporarily closed")]
    #[sqlx(rename = "temporarily closed")]
    TemporarilyClosed,
}

/// Listing priority of an owner's restaurants, highest first.
pub const STATUS_ORDER: [Status; 4] = [
    Status::Online,
    Status::Offline,
    Status::Closed,
    Status::TemporarilyClosed,
];

impl Status {
    /// 1-based position in [`STATUS_ORDER`].
    pub fn rank(&self) -> i32 {
        STATUS_ORDER
            .iter()
            .position(|status| status == self)
            .map(|index| index as i32 + 1)
            .unwrap_or(STATUS_ORDER.len() as i32 + 1)
    }

    /// Status after an online/offline toggle, `None` when the toggle leaves it alone.
    pub fn toggled(&self) -> Option<Status> {
        match self {
            Self::Offline => Some(Self::Online),
            Self::Online => Some(Self::Offline),
            Self::Closed | Self::TemporarilyClosed => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RestaurantCategory {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub order: i32,
    pub availability: bool,
    pub restaurant_id: String,
    pub product_category_id: String,
    pub product_category: ProductCategory,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// The publicly visible columns of a restaurant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct RestaurantProfile {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub url: Option<String>,
    pub shipping_costs: f64,
    pub average_service_minutes: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub status: Status,
    pub restaurant_category_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Restaurant {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: RestaurantProfile,
    pub owner_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct PublicRestaurant {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: RestaurantProfile,
    pub restaurant_category: Json<RestaurantCategory>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct RestaurantDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: RestaurantProfile,
    pub products: Json<Vec<Product>>,
    pub restaurant_category: Json<RestaurantCategory>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedError(message) => write!(f, "{}", message),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Self::UnexpectedError(err.to_string())
    }
}

const PROFILE_COLUMNS: &str = "
    r.id,
    r.name,
    r.description,
    r.address,
    r.postal_code,
    r.url,
    r.shipping_costs,
    r.average_service_minutes,
    r.email,
    r.phone,
    r.logo,
    r.hero_image,
    r.status,
    r.restaurant_category_id,
    r.created_at,
    r.updated_at
";

/// Appends `CASE <column> WHEN $n THEN $n+1 ... END`, mapping each of `statuses`
/// to its [`Status::rank`]. Statuses and ranks are bound, never inlined.
pub fn push_status_rank<'args>(
    query: &mut QueryBuilder<'args, Postgres>,
    column: &str,
    statuses: &[Status],
) {
    query.push("CASE ").push(column);
    for status in statuses {
        query
            .push(" WHEN ")
            .push_bind(*status)
            .push(" THEN ")
            .push_bind(status.rank());
    }
    query.push(" END");
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<PublicRestaurant>> {
    let sql = format!(
        "
            SELECT
                {PROFILE_COLUMNS},
                ROW_TO_JSON(rc) AS restaurant_category
            FROM restaurants r
            JOIN restaurant_categories rc ON rc.id = r.restaurant_category_id
            ORDER BY rc.name ASC
        "
    );

    sqlx::query_as::<_, PublicRestaurant>(&sql)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch restaurants: {}", err);
            Error::from(err)
        })
}

pub async fn find_many_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Vec<PublicRestaurant>> {
    let mut query = QueryBuilder::<Postgres>::new(format!(
        "
            SELECT
                {PROFILE_COLUMNS},
                ROW_TO_JSON(rc) AS restaurant_category
            FROM restaurants r
            JOIN restaurant_categories rc ON rc.id = r.restaurant_category_id
            WHERE r.owner_id = "
    ));
    query.push_bind(owner_id.clone());
    query.push(" ORDER BY ");
    push_status_rank(&mut query, "r.status", &STATUS_ORDER);
    query.push(" ASC, r.name ASC");

    query
        .build_query_as::<PublicRestaurant>()
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch restaurants owned by {}: {}",
                owner_id,
                err
            );
            Error::from(err)
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch restaurant {}: {}", id, err);
            Error::from(err)
        })
}

/// Locks the row until the surrounding transaction ends.
pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1 FOR UPDATE")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to lock restaurant {}: {}", id, err);
            Error::from(err)
        })
}

pub async fn find_details_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<RestaurantDetails>> {
    let sql = format!(
        r#"
            SELECT
                {PROFILE_COLUMNS},
                COALESCE(
                    (
                        SELECT JSON_AGG(
                            TO_JSONB(p) || JSONB_BUILD_OBJECT('product_category', TO_JSONB(pc))
                            ORDER BY p."order" ASC
                        )
                        FROM products p
                        JOIN product_categories pc ON pc.id = p.product_category_id
                        WHERE p.restaurant_id = r.id
                    ),
                    '[]'::json
                ) AS products,
                ROW_TO_JSON(rc) AS restaurant_category
            FROM restaurants r
            JOIN restaurant_categories rc ON rc.id = r.restaurant_category_id
            WHERE r.id = $1
        "#
    );

    sqlx::query_as::<_, RestaurantDetails>(&sql)
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch restaurant details {}: {}",
                id,
                err
            );
            Error::from(err)
        })
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub url: Option<String>,
    pub shipping_costs: f64,
    pub average_service_minutes: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub status: Status,
    pub restaurant_category_id: String,
    pub owner_id: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (
            id,
            name,
            description,
            address,
            postal_code,
            url,
            shipping_costs,
            average_service_minutes,
            email,
            phone,
            logo,
            hero_image,
            status,
            restaurant_category_id,
            owner_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.address)
    .bind(payload.postal_code)
    .bind(payload.url)
    .bind(payload.shipping_costs)
    .bind(payload.average_service_minutes)
    .bind(payload.email)
    .bind(payload.phone)
    .bind(payload.logo)
    .bind(payload.hero_image)
    .bind(payload.status)
    .bind(payload.restaurant_category_id)
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a restaurant: {}", err);
        Error::from(err)
    })
}

/// Fields left as `None` keep their stored value. For nullable columns,
/// `Some(None)` clears the column.
pub struct UpdateRestaurantPayload {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub url: Option<Option<String>>,
    pub shipping_costs: Option<f64>,
    pub average_service_minutes: Option<Option<f64>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub logo: Option<Option<String>>,
    pub hero_image: Option<Option<String>>,
    pub status: Option<Status>,
    pub restaurant_category_id: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateRestaurantPayload,
) -> Result<()> {
    sqlx::query(
        "
            UPDATE restaurants SET
                name = COALESCE($1, name),
                description = CASE WHEN $2 THEN $3 ELSE description END,
                address = COALESCE($4, address),
                postal_code = COALESCE($5, postal_code),
                url = CASE WHEN $6 THEN $7 ELSE url END,
                shipping_costs = COALESCE($8, shipping_costs),
                average_service_minutes = CASE WHEN $9 THEN $10 ELSE average_service_minutes END,
                email = CASE WHEN $11 THEN $12 ELSE email END,
                phone = CASE WHEN $13 THEN $14 ELSE phone END,
                logo = CASE WHEN $15 THEN $16 ELSE logo END,
                hero_image = CASE WHEN $17 THEN $18 ELSE hero_image END,
                status = COALESCE($19, status),
                restaurant_category_id = COALESCE($20, restaurant_category_id),
                updated_at = NOW()
            WHERE
                id = $21
        ",
    )
    .bind(payload.name)
    .bind(payload.description.is_some())
    .bind(payload.description.flatten())
    .bind(payload.address)
    .bind(payload.postal_code)
    .bind(payload.url.is_some())
    .bind(payload.url.flatten())
    .bind(payload.shipping_costs)
    .bind(payload.average_service_minutes.is_some())
    .bind(payload.average_service_minutes.flatten())
    .bind(payload.email.is_some())
    .bind(payload.email.flatten())
    .bind(payload.phone.is_some())
    .bind(payload.phone.flatten())
    .bind(payload.logo.is_some())
    .bind(payload.logo.flatten())
    .bind(payload.hero_image.is_some())
    .bind(payload.hero_image.flatten())
    .bind(payload.status)
    .bind(payload.restaurant_category_id)
    .bind(&id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update restaurant {}: {}", id, err);
        Error::from(err)
    })
}

pub async fn update_status_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    status: Status,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
            UPDATE restaurants SET
                status = $1,
                updated_at = NOW()
            WHERE id = $2
            RETURNING *
        ",
    )
    .bind(status)
    .bind(&id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update status of restaurant {}: {}",
            id,
            err
        );
        Error::from(err)
    })
}

/// Returns the number of deleted rows.
pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<u64> {
    sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete restaurant {}: {}", id, err);
            Error::from(err)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggle_flips_online_and_offline() {
        assert_eq!(Status::Offline.toggled(), Some(Status::Online));
        assert_eq!(Status::Online.toggled(), Some(Status::Offline));
    }

    #[test]
    fn toggle_leaves_closed_statuses_alone() {
        assert_eq!(Status::Closed.toggled(), None);
        assert_eq!(Status::TemporarilyClosed.toggled(), None);
    }

    #[test]
    fn ranks_follow_status_order() {
        assert_eq!(Status::Online.rank(), 1);
        assert_eq!(Status::Offline.rank(), 2);
        assert_eq!(Status::Closed.rank(), 3);
        assert_eq!(Status::TemporarilyClosed.rank(), 4);
    }

    #[test]
    fn statuses_use_their_wire_names() {
        assert_eq!(
            serde_json::to_value(STATUS_ORDER).unwrap(),
            json!(["online", "offline", "closed", "temporarily closed"])
        );
        assert_eq!(
            serde_json::from_value::<Status>(json!("temporarily closed")).unwrap(),
            Status::TemporarilyClosed
        );
        assert!(serde_json::from_value::<Status>(json!("busy")).is_err());
    }

    #[test]
    fn new_restaurants_default_to_offline() {
        assert_eq!(Status::default(), Status::Offline);
    }

    #[test]
    fn status_rank_is_fully_parameterized() {
        let mut query = QueryBuilder::<Postgres>::new("ORDER BY ");
        push_status_rank(&mut query, "r.status", &STATUS_ORDER);

        assert_eq!(
            query.sql(),
            "ORDER BY CASE r.status WHEN $1 THEN $2 WHEN $3 THEN $4 WHEN $5 THEN $6 WHEN $7 THEN $8 END"
        );
    }

    #[test]
    fn status_rank_continues_existing_placeholders() {
        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM restaurants r WHERE r.owner_id = ");
        query.push_bind("01HZX3".to_string());
        query.push(" ORDER BY ");
        push_status_rank(&mut query, "r.status", &STATUS_ORDER[..2]);

        assert_eq!(
            query.sql(),
            "SELECT * FROM restaurants r WHERE r.owner_id = $1 ORDER BY CASE r.status WHEN $2 THEN $3 WHEN $4 THEN $5 END"
        );
    }

    #[test]
    fn restaurant_serializes_flat_with_owner() {
        let restaurant = Restaurant {
            profile: RestaurantProfile {
                id: "01HZX3".to_string(),
                name: "Casa Pepe".to_string(),
                description: None,
                address: "Calle Sierpes 1".to_string(),
                postal_code: "41004".to_string(),
                url: None,
                shipping_costs: 2.5,
                average_service_minutes: Some(30.0),
                email: None,
                phone: None,
                logo: None,
                hero_image: None,
                status: Status::Offline,
                restaurant_category_id: "01HZX4".to_string(),
                created_at: chrono::Utc::now().naive_utc(),
                updated_at: None,
            },
            owner_id: "01HZX5".to_string(),
        };

        let value = serde_json::to_value(&restaurant).unwrap();

        assert_eq!(value["name"], "Casa Pepe");
        assert_eq!(value["status"], "offline");
        assert_eq!(value["owner_id"], "01HZX5");
        assert!(value.get("profile").is_none());
    }

    #[test]
    fn products_decode_from_aggregated_rows() {
        let products: Vec<Product> = serde_json::from_value(json!([
            {
                "id": "01HZX6",
                "name": "Salmorejo",
                "description": null,
                "price": 6.5,
                "image": null,
                "order": 1,
                "availability": true,
                "restaurant_id": "01HZX3",
                "product_category_id": "01HZX7",
                "created_at": "2024-05-01T10:00:00.123456",
                "updated_at": null,
                "product_category": {
                    "id": "01HZX7",
                    "name": "Starters",
                    "created_at": "2024-05-01T10:00:00",
                    "updated_at": null
                }
            }
        ]))
        .unwrap();

        assert_eq!(products[0].order, 1);
        assert_eq!(products[0].product_category.name, "Starters");
    }
}
