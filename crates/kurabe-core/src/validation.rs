//! User identifier validation.
//!
//! Runs before any network access; a set of IDs that fails here is never
//! fetched.

use std::collections::HashSet;

const MAX_USER_ID_LEN: usize = 50;
const MIN_USER_COUNT: usize = 2;
const MAX_USER_COUNT: usize = 10;

/// Whether a raw user ID is syntactically acceptable.
///
/// The ID is trimmed first; the trimmed form must be 1–50 characters from
/// `[A-Za-z0-9_-]`.
pub fn is_valid_user_id(user_id: &str) -> bool {
    let trimmed = user_id.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_USER_ID_LEN {
        return false;
    }
    trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Trim surrounding whitespace. Case is preserved.
pub fn normalize_user_id(user_id: &str) -> String {
    user_id.trim().to_string()
}

/// Outcome of validating a set of user IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Validate a set of user IDs, accumulating every applicable error.
///
/// Checks run independently and in a fixed order: count lower bound, count
/// upper bound, duplicates among normalized IDs, per-ID syntax against the
/// original (untrimmed) strings. Deterministic for a given input.
pub fn validate_user_ids<S: AsRef<str>>(user_ids: &[S]) -> ValidationResult {
    let mut errors = Vec::new();

    if user_ids.len() < MIN_USER_COUNT {
        errors.push("At least 2 user IDs are required".to_string());
    }

    if user_ids.len() > MAX_USER_COUNT {
        errors.push("Maximum 10 user IDs allowed".to_string());
    }

    let mut seen = HashSet::new();
    let has_duplicates = user_ids
        .iter()
        .any(|id| !seen.insert(normalize_user_id(id.as_ref())));
    if has_duplicates {
        errors.push("Duplicate user IDs are not allowed".to_string());
    }

    let invalid_ids: Vec<&str> = user_ids
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| !is_valid_user_id(id))
        .collect();
    if !invalid_ids.is_empty() {
        errors.push(format!("Invalid user IDs: {}", invalid_ids.join(", ")));
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_ids() {
        assert!(is_valid_user_id("validuser"));
        assert!(is_valid_user_id("user_123"));
        assert!(is_valid_user_id("user-name"));
    }

    #[test]
    fn test_accepts_untrimmed_input() {
        assert!(is_valid_user_id("  alice  "));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(!is_valid_user_id(""));
        assert!(!is_valid_user_id("   "));
    }

    #[test]
    fn test_rejects_forbidden_characters() {
        assert!(!is_valid_user_id("user with spaces"));
        assert!(!is_valid_user_id("user@domain"));
    }

    #[test]
    fn test_rejects_over_length() {
        assert!(is_valid_user_id(&"a".repeat(50)));
        assert!(!is_valid_user_id(&"a".repeat(51)));
    }

    #[test]
    fn test_normalize_trims_and_preserves_case() {
        assert_eq!(normalize_user_id("  MixedCase  "), "MixedCase");
    }

    #[test]
    fn test_too_few_ids() {
        let result = validate_user_ids(&["a"]);
        assert!(!result.is_valid);
        assert!(result.errors.contains(&"At least 2 user IDs are required".to_string()));
    }

    #[test]
    fn test_too_many_ids() {
        let ids: Vec<String> = (0..11).map(|i| format!("user{i}")).collect();
        let result = validate_user_ids(&ids);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Maximum 10 user IDs allowed".to_string()]);
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let result = validate_user_ids(&["a", "a"]);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Duplicate user IDs are not allowed".to_string()]);

        let result = validate_user_ids(&["a", "a", "b", "b"]);
        assert_eq!(result.errors, vec!["Duplicate user IDs are not allowed".to_string()]);
    }

    #[test]
    fn test_duplicates_detected_after_trimming() {
        let result = validate_user_ids(&["alice", " alice "]);
        assert_eq!(result.errors, vec!["Duplicate user IDs are not allowed".to_string()]);
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        let result = validate_user_ids(&["alice", "Alice"]);
        assert!(result.is_valid);
    }

    #[test]
    fn test_invalid_ids_listed_with_originals() {
        let result = validate_user_ids(&["alice", "bad user", "b@d"]);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Invalid user IDs: bad user, b@d".to_string()]);
    }

    #[test]
    fn test_errors_accumulate_in_fixed_order() {
        let result = validate_user_ids(&["bad id"]);
        assert_eq!(
            result.errors,
            vec![
                "At least 2 user IDs are required".to_string(),
                "Invalid user IDs: bad id".to_string(),
            ]
        );
    }

    #[test]
    fn test_valid_pair() {
        let result = validate_user_ids(&["alice", "bob"]);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }
}
