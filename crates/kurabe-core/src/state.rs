//! Comparison workflow state.
//!
//! The state container holds a plain set of inputs; everything the caller
//! observes is recomputed from them by [`derive_comparison_state`], so the
//! visible state is always a pure function of the latest inputs.

use tracing::{debug, info, warn};

use crate::comparison::create_comparison_result;
use crate::error::ApiError;
use crate::models::{AnimeList, ComparisonResult};
use crate::provider::AnimeListProvider;
use crate::validation::{normalize_user_id, validate_user_ids};

/// Everything the comparison view depends on.
#[derive(Debug, Clone, Default)]
pub struct ComparisonInputs {
    pub user1_id: String,
    pub user2_id: String,
    pub user1_anime: AnimeList,
    pub user2_anime: AnimeList,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

/// Snapshot derived from [`ComparisonInputs`].
#[derive(Debug, Clone)]
pub struct ComparisonState {
    pub user_ids: Vec<String>,
    pub is_loading: bool,
    pub result: Option<ComparisonResult>,
    pub error: Option<ApiError>,
}

/// Recompute the externally visible state from the current inputs.
///
/// A result exists only once both IDs and both lists are present; there is
/// no partial-success state.
pub fn derive_comparison_state(inputs: &ComparisonInputs) -> ComparisonState {
    let both_ids = !inputs.user1_id.is_empty() && !inputs.user2_id.is_empty();

    let result = if both_ids && !inputs.user1_anime.is_empty() && !inputs.user2_anime.is_empty() {
        Some(create_comparison_result(
            &inputs.user1_id,
            &inputs.user2_id,
            &inputs.user1_anime,
            &inputs.user2_anime,
        ))
    } else {
        None
    };

    let user_ids = if both_ids {
        vec![inputs.user1_id.clone(), inputs.user2_id.clone()]
    } else {
        Vec::new()
    };

    ComparisonState {
        user_ids,
        is_loading: inputs.is_loading,
        result,
        error: inputs.error.clone(),
    }
}

/// Owns the comparison inputs and orchestrates validate → fetch → compare.
#[derive(Debug, Default)]
pub struct ComparisonStore {
    inputs: ComparisonInputs,
}

impl ComparisonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current derived state.
    pub fn state(&self) -> ComparisonState {
        derive_comparison_state(&self.inputs)
    }

    /// Reset every input to its initial value.
    pub fn clear(&mut self) {
        self.inputs = ComparisonInputs::default();
    }

    /// Record a failure and stop loading.
    pub fn set_error(&mut self, error: ApiError) {
        self.inputs.error = Some(error);
        self.inputs.is_loading = false;
    }

    fn start_comparison(&mut self, user1_id: String, user2_id: String) {
        self.inputs.user1_id = user1_id;
        self.inputs.user2_id = user2_id;
        self.inputs.is_loading = true;
        self.inputs.error = None;
    }

    fn set_user_anime(&mut self, user1_anime: AnimeList, user2_anime: AnimeList) {
        self.inputs.user1_anime = user1_anime;
        self.inputs.user2_anime = user2_anime;
        self.inputs.is_loading = false;
    }

    /// Validate the IDs, fetch both lists concurrently, and update state.
    ///
    /// Validation failures are reported without touching the network. Both
    /// fetches run to completion before either result is inspected; on
    /// failure exactly one error is surfaced, with user 1's taking
    /// precedence, and no partial data reaches the comparison.
    pub async fn perform_comparison<P: AnimeListProvider>(
        &mut self,
        provider: &P,
        user_ids: &[String],
    ) {
        let validation = validate_user_ids(user_ids);
        if !validation.is_valid {
            debug!(errors = ?validation.errors, "Rejected user IDs before fetch");
            self.set_error(ApiError::api(validation.errors.join(", ")));
            return;
        }

        let user1_id = normalize_user_id(&user_ids[0]);
        let user2_id = normalize_user_id(&user_ids[1]);
        self.start_comparison(user1_id.clone(), user2_id.clone());

        info!(user1 = %user1_id, user2 = %user2_id, "Fetching anime lists");

        let (user1_result, user2_result) = futures::join!(
            provider.fetch_user_anime_list(&user1_id),
            provider.fetch_user_anime_list(&user2_id),
        );

        let user1_anime = match user1_result {
            Ok(list) => list,
            Err(error) => {
                warn!(user = %user1_id, error = %error, "List fetch failed");
                self.set_error(error.for_user(&user1_id));
                return;
            }
        };

        let user2_anime = match user2_result {
            Ok(list) => list,
            Err(error) => {
                warn!(user = %user2_id, error = %error, "List fetch failed");
                self.set_error(error.for_user(&user2_id));
                return;
            }
        };

        info!(
            user1_count = user1_anime.len(),
            user2_count = user2_anime.len(),
            "Both lists fetched"
        );
        self.set_user_anime(user1_anime, user2_anime);
    }
}
