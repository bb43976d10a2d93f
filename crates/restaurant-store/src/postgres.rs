use async_trait::async_trait;
use domain::{Address, GradeEntry, NewRestaurant, Restaurant, RestaurantUpdate};
use sqlx::{
    PgPool, Row,
    postgres::{PgPoolOptions, PgRow},
    types::Json,
};
use uuid::Uuid;

use crate::{
    RestaurantId, RestaurantQuery, Result, StoreError,
    store::{RestaurantStore, RestaurantStream},
};

macro_rules! columns {
    () => {
        "id, name, borough, cuisine, address, grades"
    };
}

const COLUMNS: &str = columns!();

/// PostgreSQL-backed restaurant store.
///
/// Address and grades are stored as JSONB documents next to the
/// scalar columns. Insertion order is tracked by the `seq` column.
#[derive(Clone)]
pub struct PostgresRestaurantStore {
    pool: PgPool,
}

impl PostgresRestaurantStore {
    /// Creates a new PostgreSQL restaurant store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `database_url` with a bounded pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_restaurant(row: PgRow) -> Result<Restaurant> {
        let address: Json<Address> = row.try_get("address")?;
        let grades: Json<Vec<GradeEntry>> = row.try_get("grades")?;

        Ok(Restaurant {
            id: RestaurantId::from_uuid(row.try_get::<Uuid, _>("id")?),
            name: row.try_get("name")?,
            borough: row.try_get("borough")?,
            cuisine: row.try_get("cuisine")?,
            address: address.0,
            grades: grades.0,
        })
    }
}

#[async_trait]
impl RestaurantStore for PostgresRestaurantStore {
    #[tracing::instrument(skip(self, draft))]
    async fn insert(&self, draft: NewRestaurant) -> Result<Restaurant> {
        let restaurant = draft.into_restaurant(RestaurantId::new());

        sqlx::query(
            r#"
            INSERT INTO restaurants (id, name, borough, cuisine, address, grades)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(restaurant.id.as_uuid())
        .bind(&restaurant.name)
        .bind(&restaurant.borough)
        .bind(&restaurant.cuisine)
        .bind(Json(&restaurant.address))
        .bind(Json(&restaurant.grades))
        .execute(&self.pool)
        .await?;

        Ok(restaurant)
    }

    async fn get(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        let row: Option<PgRow> =
            sqlx::query(&format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        row.map(Self::row_to_restaurant).transpose()
    }

    async fn query(&self, query: RestaurantQuery) -> Result<Vec<Restaurant>> {
        let mut sql = format!("SELECT {COLUMNS} FROM restaurants WHERE 1=1");
        let mut param_count = 0;

        // Build dynamic query
        if query.borough.is_some() {
            param_count += 1;
            sql.push_str(&format!(" AND borough = ${param_count}"));
        }
        if query.cuisine.is_some() {
            param_count += 1;
            sql.push_str(&format!(" AND cuisine = ${param_count}"));
        }

        sql.push_str(" ORDER BY seq ASC");

        if query.limit.is_some() {
            param_count += 1;
            sql.push_str(&format!(" LIMIT ${param_count}"));
        }
        if query.offset.is_some() {
            param_count += 1;
            sql.push_str(&format!(" OFFSET ${param_count}"));
        }

        let mut sqlx_query = sqlx::query(&sql);

        if let Some(borough) = query.borough {
            sqlx_query = sqlx_query.bind(borough);
        }
        if let Some(cuisine) = query.cuisine {
            sqlx_query = sqlx_query.bind(cuisine);
        }
        if let Some(limit) = query.limit {
            sqlx_query = sqlx_query.bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }
        if let Some(offset) = query.offset {
            sqlx_query = sqlx_query.bind(i64::try_from(offset).unwrap_or(i64::MAX));
        }

        let rows = sqlx_query.fetch_all(&self.pool).await?;
        rows.into_iter().map(Self::row_to_restaurant).collect()
    }

    #[tracing::instrument(skip(self, update))]
    async fn update(&self, id: RestaurantId, update: RestaurantUpdate) -> Result<Restaurant> {
        let row: Option<PgRow> = sqlx::query(&format!(
            r#"
            UPDATE restaurants SET
                name = COALESCE($2, name),
                borough = COALESCE($3, borough),
                cuisine = COALESCE($4, cuisine),
                address = COALESCE($5, address)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(update.name)
        .bind(update.borough)
        .bind(update.cuisine)
        .bind(update.address.map(Json))
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Self::row_to_restaurant(row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: RestaurantId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
            .fetch_one(&self.pool)
            .await?;

        Ok(usize::try_from(count).unwrap_or_default())
    }

    async fn stream_all<'a>(&'a self) -> Result<RestaurantStream<'a>> {
        use futures_util::StreamExt;

        // The stream borrows its SQL, so it has to be a literal.
        let stream = sqlx::query(concat!(
            "SELECT ",
            columns!(),
            " FROM restaurants ORDER BY seq ASC"
        ))
        .fetch(&self.pool)
        .map(|result| match result {
            Ok(row) => Self::row_to_restaurant(row),
            Err(e) => Err(StoreError::Database(e)),
        });

        Ok(Box::pin(stream))
    }
}
