use serde::{Deserialize, Serialize};

/// Cover art shown when a title has no image of its own.
pub const DEFAULT_COVER_PATH: &str = "/default-cover.jpg";

/// A single title with language variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimeTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

/// Cover art URLs by size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverImage {
    pub medium: Option<String>,
    pub large: Option<String>,
}

/// Calendar date with possibly unknown components, as the service reports it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// Airing status of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
}

impl MediaStatus {
    /// Parse the service's wire spelling. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FINISHED" => Some(Self::Finished),
            "RELEASING" => Some(Self::Releasing),
            "NOT_YET_RELEASED" => Some(Self::NotYetReleased),
            "CANCELLED" => Some(Self::Cancelled),
            "HIATUS" => Some(Self::Hiatus),
            _ => None,
        }
    }
}

/// One anime title as described by the upstream media database.
///
/// `id` is the service's stable identifier; everything else is optional and
/// may be absent in any given response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeMedia {
    pub id: u64,
    pub title: AnimeTitle,
    pub cover_image: Option<CoverImage>,
    pub average_score: Option<u32>,
    pub status: Option<MediaStatus>,
    pub episodes: Option<u32>,
    pub genres: Vec<String>,
    pub start_date: Option<FuzzyDate>,
}

impl AnimeMedia {
    /// Best available display title: English → romaji → native → `Anime {id}`.
    ///
    /// Empty strings count as absent.
    pub fn display_title(&self) -> String {
        non_empty(&self.title.english)
            .or_else(|| non_empty(&self.title.romaji))
            .or_else(|| non_empty(&self.title.native))
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Anime {}", self.id))
    }

    /// Cover image URL, preferring the smaller size, with a fixed fallback.
    pub fn cover_image_url(&self) -> &str {
        self.cover_image
            .as_ref()
            .and_then(|c| c.medium.as_deref().or(c.large.as_deref()))
            .unwrap_or(DEFAULT_COVER_PATH)
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(id: u64, english: Option<&str>, romaji: Option<&str>, native: Option<&str>) -> AnimeMedia {
        AnimeMedia {
            id,
            title: AnimeTitle {
                romaji: romaji.map(String::from),
                english: english.map(String::from),
                native: native.map(String::from),
            },
            cover_image: None,
            average_score: None,
            status: None,
            episodes: None,
            genres: Vec::new(),
            start_date: None,
        }
    }

    #[test]
    fn test_display_title_prefers_english() {
        let m = media(1, Some("Attack on Titan"), Some("Shingeki no Kyojin"), Some("進撃の巨人"));
        assert_eq!(m.display_title(), "Attack on Titan");
    }

    #[test]
    fn test_display_title_falls_back_in_order() {
        let m = media(1, None, Some("Shingeki no Kyojin"), Some("進撃の巨人"));
        assert_eq!(m.display_title(), "Shingeki no Kyojin");

        let m = media(1, None, None, Some("進撃の巨人"));
        assert_eq!(m.display_title(), "進撃の巨人");
    }

    #[test]
    fn test_display_title_skips_empty_strings() {
        let m = media(1, Some(""), Some("Shingeki no Kyojin"), None);
        assert_eq!(m.display_title(), "Shingeki no Kyojin");
    }

    #[test]
    fn test_display_title_fallback_literal() {
        let m = media(42, None, None, None);
        assert_eq!(m.display_title(), "Anime 42");
    }

    #[test]
    fn test_cover_image_prefers_medium() {
        let mut m = media(1, None, None, None);
        m.cover_image = Some(CoverImage {
            medium: Some("https://img/medium.jpg".into()),
            large: Some("https://img/large.jpg".into()),
        });
        assert_eq!(m.cover_image_url(), "https://img/medium.jpg");

        m.cover_image = Some(CoverImage {
            medium: None,
            large: Some("https://img/large.jpg".into()),
        });
        assert_eq!(m.cover_image_url(), "https://img/large.jpg");
    }

    #[test]
    fn test_cover_image_default_path() {
        let m = media(1, None, None, None);
        assert_eq!(m.cover_image_url(), DEFAULT_COVER_PATH);
    }

    #[test]
    fn test_media_status_parse_is_case_sensitive() {
        assert_eq!(MediaStatus::parse("FINISHED"), Some(MediaStatus::Finished));
        assert_eq!(MediaStatus::parse("NOT_YET_RELEASED"), Some(MediaStatus::NotYetReleased));
        assert_eq!(MediaStatus::parse("finished"), None);
        assert_eq!(MediaStatus::parse(""), None);
    }
}
