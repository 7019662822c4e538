//! Service-agnostic interface to a user's anime list.
//!
//! Concrete API clients implement this trait, keeping the comparison
//! workflow independent of any one tracking service.

use std::future::Future;

use crate::error::ApiError;
use crate::models::AnimeList;

/// A service that can produce a user's full, flattened anime list.
pub trait AnimeListProvider: Send + Sync {
    /// Fetch a user's anime list by their public user name.
    ///
    /// Ordinary failures (unknown user, unreachable service, undecodable
    /// payload) are reported as [`ApiError`], never as a panic. The list may
    /// legitimately be empty.
    fn fetch_user_anime_list(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<AnimeList, ApiError>> + Send;
}
