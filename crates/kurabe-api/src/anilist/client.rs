use reqwest::Client;

use kurabe_core::error::ApiError;
use kurabe_core::models::AnimeList;
use kurabe_core::provider::AnimeListProvider;

use super::error::AniListError;
use super::types::{transform_media_list_collection, GraphQLResponse, MediaListCollectionData};

const API_URL: &str = "https://graphql.anilist.co";

const USER_ANIME_LIST_QUERY: &str = r#"
query ($userName: String) {
    MediaListCollection(userName: $userName, type: ANIME) {
        lists {
            entries {
                media {
                    id
                    title { romaji english native }
                    coverImage { medium large }
                    averageScore
                    status
                    episodes
                    genres
                    startDate { year month day }
                }
                score
                status
                progress
                updatedAt
            }
        }
    }
}
"#;

/// AniList GraphQL API client.
///
/// List reads are public; no authentication is required.
pub struct AniListClient {
    http: Client,
    endpoint: String,
}

impl AniListClient {
    pub fn new() -> Self {
        Self::with_endpoint(API_URL)
    }

    /// Client against a non-default endpoint (tests, proxies).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation, "AniList GraphQL request");

        let resp = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        let envelope: GraphQLResponse<T> = resp
            .json()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))?;

        // A 2xx response can still carry GraphQL-level errors.
        if let Some(first) = envelope.errors.into_iter().flatten().next() {
            tracing::warn!(operation, error = %first.message, "AniList GraphQL error");
            return Err(AniListError::GraphQL(first.message));
        }

        envelope.data.ok_or(AniListError::NoData)
    }

    /// Fetch one user's full anime list, flattened and filtered.
    pub async fn get_user_anime_list(&self, user_name: &str) -> Result<AnimeList, AniListError> {
        let data: MediaListCollectionData = self
            .graphql_request(
                "UserAnimeList",
                USER_ANIME_LIST_QUERY,
                serde_json::json!({ "userName": user_name.trim() }),
            )
            .await?;

        Ok(transform_media_list_collection(data))
    }
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimeListProvider for AniListClient {
    async fn fetch_user_anime_list(&self, user_id: &str) -> Result<AnimeList, ApiError> {
        self.get_user_anime_list(user_id).await.map_err(ApiError::from)
    }
}
