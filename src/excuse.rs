//! The excuse record and request validation.

use chrono::{DateTime, Utc};
use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Characters used for base-36 ids.
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random part of an id.
pub const ID_SUFFIX_LEN: usize = 3;

/// A generated excuse. Immutable once created; `id` is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Excuse {
    pub id: String,
    pub situation: String,
    pub reason: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Why a generation request was rejected. The message is meant for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in both fields (the situation is empty)")]
    EmptySituation,
    #[error("Please fill in both fields (the reason is empty)")]
    EmptyReason,
    #[error("Please fill in both fields")]
    EmptyBoth,
}

/// Reject whitespace-only situations or reasons.
pub fn validate_request(situation: &str, reason: &str) -> Result<(), ValidationError> {
    match (situation.trim().is_empty(), reason.trim().is_empty()) {
        (true, true) => Err(ValidationError::EmptyBoth),
        (true, false) => Err(ValidationError::EmptySituation),
        (false, true) => Err(ValidationError::EmptyReason),
        (false, false) => Ok(()),
    }
}

/// Build an id: creation time in milliseconds, base 36, plus a random
/// base-36 suffix.
pub fn new_id<R: RngExt>(rng: &mut R, at: DateTime<Utc>) -> String {
    let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
    let mut id = to_base36(millis);
    id.push_str(&random_suffix(rng));
    id
}

fn random_suffix<R: RngExt>(rng: &mut R) -> String {
    (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    // Only ASCII digits/letters were pushed.
    String::from_utf8(digits).unwrap_or_default()
}
