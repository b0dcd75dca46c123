//! Wire representation of the catalog endpoint's JSON body.
//!
//! Kept separate from the domain model so schema drift surfaces here, as a
//! decode error, instead of leaking nullable wire quirks into ac-core.

use serde::Deserialize;

use ac_core::{ArtworkId, ArtworkRecord};

#[derive(Debug, Deserialize)]
pub(crate) struct ArtworksResponse {
    pub data: Vec<ArtworkDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaginationDto {
    pub total: u64,
}

/// One raw artwork object. `id` is the only required field; the catalog
/// omits or nulls everything else freely, and `#[serde(default)]` accepts
/// both.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtworkDto {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl From<ArtworkDto> for ArtworkRecord {
    fn from(dto: ArtworkDto) -> Self {
        ArtworkRecord {
            id: ArtworkId::new(dto.id),
            title: dto.title,
            artist_display: dto.artist_display,
            place_of_origin: dto.place_of_origin,
            inscriptions: dto.inscriptions,
            date_start: dto.date_start,
            date_end: dto.date_end,
        }
    }
}
