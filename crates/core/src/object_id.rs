//! Document identifier generation and format checks.
//!
//! Identifiers are 12 bytes rendered as 24 lowercase hex characters:
//!
//! ```text
//! [ 4 bytes: Unix seconds, big-endian ][ 5 bytes: random ][ 3 bytes: counter ]
//! ```
//!
//! The leading timestamp keeps ids roughly creation-ordered. Only strings in
//! this exact shape are ever looked up in the store; anything else is treated
//! as an opaque label.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

/// Length of an identifier in hex characters.
pub const OBJECT_ID_LEN: usize = 24;

static OBJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("valid regex"));

static COUNTER: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(rand::rng().random()));

/// Generate a fresh identifier.
pub fn generate() -> String {
    let secs = chrono::Utc::now().timestamp() as u32;
    let mut random = [0u8; 5];
    rand::rng().fill(&mut random);
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..9].copy_from_slice(&random);
    bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Whether `candidate` has the canonical identifier shape (24 hex digits,
/// either case).
pub fn is_object_id(candidate: &str) -> bool {
    OBJECT_ID_RE.is_match(candidate)
}
