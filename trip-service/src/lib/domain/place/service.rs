use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::listing::ListQuery;
use crate::domain::listing::Page;
use crate::domain::listing::PageRequest;
use crate::domain::photo::ports::PhotoServicePort;
use crate::domain::place::errors::PlaceError;
use crate::domain::place::models::CreatePlace;
use crate::domain::place::models::Place;
use crate::domain::place::models::PlaceId;
use crate::domain::place::models::UpdatePlace;
use crate::domain::place::ports::PlaceRepository;
use crate::domain::place::ports::PlaceServicePort;
use crate::domain::user::models::EmailAddress;

/// Domain service implementation for place operations.
///
/// Generic over the repository and the photo service for testability.
pub struct PlaceService<PR, PH>
where
    PR: PlaceRepository,
    PH: PhotoServicePort,
{
    places: Arc<PR>,
    photos: Arc<PH>,
}

impl<PR, PH> PlaceService<PR, PH>
where
    PR: PlaceRepository,
    PH: PhotoServicePort,
{
    /// Create a new place service with injected dependencies.
    pub fn new(places: Arc<PR>, photos: Arc<PH>) -> Self {
        Self { places, photos }
    }

    /// Look up a place and check it belongs to the caller.
    ///
    /// Existence is checked before ownership: a missing id is `NotFound`
    /// even for callers who own nothing, and a foreign id is `Forbidden`.
    async fn find_owned(&self, owner: &EmailAddress, id: PlaceId) -> Result<Place, PlaceError> {
        let place = self
            .places
            .find_by_id(id)
            .await?
            .ok_or(PlaceError::NotFound(id))?;

        if place.owner_email != owner.as_str() {
            return Err(PlaceError::Forbidden(id));
        }

        Ok(place)
    }

    /// A referenced photo must already be uploaded before anything persists.
    fn check_photo_reference(&self, image_url: Option<&str>) -> Result<(), PlaceError> {
        if let Some(filename) = image_url {
            if !self.photos.exists(filename) {
                return Err(PlaceError::PhotoNotFound(filename.to_string()));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<PR, PH> PlaceServicePort for PlaceService<PR, PH>
where
    PR: PlaceRepository,
    PH: PhotoServicePort,
{
    async fn list(
        &self,
        owner: &EmailAddress,
        query: ListQuery,
        page: PageRequest,
    ) -> Result<Page<Place>, PlaceError> {
        let total = self.places.count(owner.as_str(), &query).await?;
        let results = self.places.find_many(owner.as_str(), &query, page).await?;

        Ok(Page {
            total,
            page: page.page,
            per_page: page.per_page,
            results,
        })
    }

    async fn get(&self, owner: &EmailAddress, id: PlaceId) -> Result<Place, PlaceError> {
        self.find_owned(owner, id).await
    }

    async fn create(
        &self,
        owner: &EmailAddress,
        data: CreatePlace,
    ) -> Result<Place, PlaceError> {
        self.check_photo_reference(data.image_url.as_deref())?;

        self.places.create(owner.as_str(), data).await
    }

    async fn update(
        &self,
        owner: &EmailAddress,
        id: PlaceId,
        data: UpdatePlace,
    ) -> Result<Place, PlaceError> {
        self.find_owned(owner, id).await?;
        self.check_photo_reference(data.image_url.as_deref())?;

        self.places.update(id, data).await
    }

    async fn delete(&self, owner: &EmailAddress, id: PlaceId) -> Result<(), PlaceError> {
        self.find_owned(owner, id).await?;

        self.places.delete(id).await
    }
}
