use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::QueryBuilder;

use super::push_order_and_page;
use super::push_where;
use crate::domain::listing::ListQuery;
use crate::domain::listing::PageRequest;
use crate::domain::place::errors::PlaceError;
use crate::domain::place::models::CreatePlace;
use crate::domain::place::models::Place;
use crate::domain::place::models::PlaceId;
use crate::domain::place::models::UpdatePlace;
use crate::domain::place::ports::PlaceRepository;

const PLACE_COLUMNS: &str = "id, name, description, image_url, is_favourite, owner_email";

#[derive(sqlx::FromRow)]
struct PlaceRow {
    id: i64,
    name: String,
    description: Option<String>,
    image_url: Option<String>,
    is_favourite: bool,
    owner_email: String,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Place {
            id: PlaceId(row.id),
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            is_favourite: row.is_favourite,
            owner_email: row.owner_email,
        }
    }
}

pub struct PostgresPlaceRepository {
    pool: PgPool,
}

impl PostgresPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for PostgresPlaceRepository {
    async fn create(&self, owner_email: &str, data: CreatePlace) -> Result<Place, PlaceError> {
        sqlx::query_as::<_, PlaceRow>(&format!(
            r#"
            INSERT INTO places (name, description, image_url, is_favourite, owner_email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            PLACE_COLUMNS
        ))
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(data.is_favourite)
        .bind(owner_email)
        .fetch_one(&self.pool)
        .await
        .map(Place::from)
        .map_err(|e| PlaceError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: PlaceId) -> Result<Option<Place>, PlaceError> {
        sqlx::query_as::<_, PlaceRow>(&format!(
            "SELECT {} FROM places WHERE id = $1",
            PLACE_COLUMNS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Place::from))
        .map_err(|e| PlaceError::DatabaseError(e.to_string()))
    }

    async fn find_many(
        &self,
        owner_email: &str,
        query: &ListQuery,
        page: PageRequest,
    ) -> Result<Vec<Place>, PlaceError> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {} FROM places", PLACE_COLUMNS));
        push_where(&mut builder, owner_email, query);
        push_order_and_page(&mut builder, query, page);

        builder
            .build_query_as::<PlaceRow>()
            .fetch_all(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(Place::from).collect())
            .map_err(|e| PlaceError::DatabaseError(e.to_string()))
    }

    async fn count(&self, owner_email: &str, query: &ListQuery) -> Result<i64, PlaceError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM places");
        push_where(&mut builder, owner_email, query);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| PlaceError::DatabaseError(e.to_string()))
    }

    async fn update(&self, id: PlaceId, data: UpdatePlace) -> Result<Place, PlaceError> {
        // COALESCE keeps the stored value for fields the update omits
        sqlx::query_as::<_, PlaceRow>(&format!(
            r#"
            UPDATE places
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                is_favourite = COALESCE($5, is_favourite)
            WHERE id = $1
            RETURNING {}
            "#,
            PLACE_COLUMNS
        ))
        .bind(id.0)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(data.is_favourite)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PlaceError::DatabaseError(e.to_string()))?
        .map(Place::from)
        .ok_or(PlaceError::NotFound(id))
    }

    async fn delete(&self, id: PlaceId) -> Result<(), PlaceError> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PlaceError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(PlaceError::NotFound(id));
        }

        Ok(())
    }
}
