use async_trait::async_trait;

use crate::domain::listing::ListQuery;
use crate::domain::listing::Page;
use crate::domain::listing::PageRequest;
use crate::domain::place::errors::PlaceError;
use crate::domain::place::models::CreatePlace;
use crate::domain::place::models::Place;
use crate::domain::place::models::PlaceId;
use crate::domain::place::models::UpdatePlace;
use crate::domain::user::models::EmailAddress;

/// Port for place domain operations.
///
/// Every operation is scoped to the authenticated caller: listing never
/// leaves the caller's data, and single-resource operations check existence
/// first, then ownership, so "no such place" and "not your place" stay
/// distinguishable.
#[async_trait]
pub trait PlaceServicePort: Send + Sync + 'static {
    /// List the caller's places with filtering, sorting, and pagination.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(
        &self,
        owner: &EmailAddress,
        query: ListQuery,
        page: PageRequest,
    ) -> Result<Page<Place>, PlaceError>;

    /// Retrieve one place by id.
    ///
    /// # Errors
    /// * `NotFound` - No place with this id exists
    /// * `Forbidden` - The place belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, owner: &EmailAddress, id: PlaceId) -> Result<Place, PlaceError>;

    /// Create a place owned by the caller.
    ///
    /// # Errors
    /// * `PhotoNotFound` - `image_url` references no uploaded photo
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, owner: &EmailAddress, data: CreatePlace)
        -> Result<Place, PlaceError>;

    /// Update the caller's place; only supplied fields change.
    ///
    /// # Errors
    /// * `NotFound` - No place with this id exists
    /// * `Forbidden` - The place belongs to another user
    /// * `PhotoNotFound` - `image_url` references no uploaded photo
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        owner: &EmailAddress,
        id: PlaceId,
        data: UpdatePlace,
    ) -> Result<Place, PlaceError>;

    /// Delete the caller's place.
    ///
    /// # Errors
    /// * `NotFound` - No place with this id exists
    /// * `Forbidden` - The place belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, owner: &EmailAddress, id: PlaceId) -> Result<(), PlaceError>;
}

/// Persistence operations for places.
#[async_trait]
pub trait PlaceRepository: Send + Sync + 'static {
    /// Persist a new place for the given owner.
    async fn create(&self, owner_email: &str, data: CreatePlace) -> Result<Place, PlaceError>;

    /// Retrieve a place by id, regardless of owner.
    async fn find_by_id(&self, id: PlaceId) -> Result<Option<Place>, PlaceError>;

    /// Retrieve one page of the owner's places under the given filters.
    async fn find_many(
        &self,
        owner_email: &str,
        query: &ListQuery,
        page: PageRequest,
    ) -> Result<Vec<Place>, PlaceError>;

    /// Count the owner's places under the same filters as `find_many`.
    async fn count(&self, owner_email: &str, query: &ListQuery) -> Result<i64, PlaceError>;

    /// Apply a partial update.
    async fn update(&self, id: PlaceId, data: UpdatePlace) -> Result<Place, PlaceError>;

    /// Remove a place.
    async fn delete(&self, id: PlaceId) -> Result<(), PlaceError>;
}
