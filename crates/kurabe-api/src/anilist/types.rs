use serde::{Deserialize, Deserializer};

use kurabe_core::models::{
    AnimeList, AnimeListEntry, AnimeMedia, AnimeTitle, CoverImage, FuzzyDate, ListStatus,
    MediaStatus,
};

// ── GraphQL response wrappers ────────────────────────────────────

/// Generic GraphQL envelope. `data` is absent when the server only
/// reports errors.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub status: Option<u16>,
}

// ── MediaListCollection query ────────────────────────────────────
//
// Every level is optional so a partial or null payload degrades to an
// empty list instead of a deserialization failure.

#[derive(Debug, Default, Deserialize)]
pub struct MediaListCollectionData {
    #[serde(rename = "MediaListCollection")]
    pub media_list_collection: Option<MediaListCollection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MediaListCollection {
    pub lists: Option<Vec<Option<MediaListGroup>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MediaListGroup {
    pub entries: Option<Vec<Option<RawListEntry>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawListEntry {
    pub media: Option<RawMedia>,
    pub score: Option<f64>,
    pub status: Option<String>,
    pub progress: Option<u32>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMedia {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    pub title: Option<AnimeTitle>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<CoverImage>,
    #[serde(rename = "averageScore")]
    pub average_score: Option<u32>,
    pub status: Option<String>,
    pub episodes: Option<u32>,
    pub genres: Option<Vec<Option<String>>>,
    #[serde(rename = "startDate")]
    pub start_date: Option<FuzzyDate>,
}

/// Accept only a non-negative integer ID; any other value counts as absent,
/// so one junk entry cannot fail the whole payload.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_u64))
}

// ── Transformation ───────────────────────────────────────────────

/// Flatten a raw `MediaListCollection` payload into one list.
///
/// Lenient: a missing or null level yields an empty list, null
/// list groups and null entries are skipped, and entries without a usable
/// media record (or with a status outside the known six) are dropped.
/// Inter-list order, then intra-list order, is preserved.
pub fn transform_media_list_collection(data: MediaListCollectionData) -> AnimeList {
    let lists = match data.media_list_collection.and_then(|c| c.lists) {
        Some(lists) => lists,
        None => return Vec::new(),
    };

    lists
        .into_iter()
        .flatten()
        .flat_map(|group| group.entries.unwrap_or_default())
        .flatten()
        .filter_map(into_entry)
        .collect()
}

fn into_entry(raw: RawListEntry) -> Option<AnimeListEntry> {
    let media = raw.media?;
    let id = media.id?;
    let status = raw.status.as_deref().and_then(ListStatus::parse)?;

    Some(AnimeListEntry {
        media: AnimeMedia {
            id,
            title: media.title.unwrap_or_default(),
            cover_image: media.cover_image,
            average_score: media.average_score,
            status: media.status.as_deref().and_then(MediaStatus::parse),
            episodes: media.episodes,
            genres: media
                .genres
                .map(|genres| genres.into_iter().flatten().collect())
                .unwrap_or_default(),
            start_date: media.start_date,
        },
        score: raw.score,
        status,
        progress: raw.progress,
        updated_at: raw.updated_at,
    })
}
