use std::fmt;

use crate::domain::listing::FieldKind;
use crate::domain::listing::FieldSpec;

/// Travel place aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: Option<String>,
    /// Filename of an uploaded photo, if any.
    pub image_url: Option<String>,
    pub is_favourite: bool,
    /// Owning user's email; set at creation, never client-controlled.
    pub owner_email: String,
}

/// Place unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceId(pub i64);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fields accepted when creating a place. The owner is taken from the
/// authenticated caller, never from the payload.
#[derive(Debug, Clone)]
pub struct CreatePlace {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_favourite: bool,
}

/// Partial update: only supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlace {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_favourite: Option<bool>,
}

/// Fields places can be filtered and sorted by.
pub const PLACE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "id",
        kind: FieldKind::Integer,
    },
    FieldSpec {
        name: "name",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "description",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "image_url",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "owner_email",
        kind: FieldKind::Text,
    },
];
