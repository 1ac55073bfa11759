//! Alternative name suggestions for a taken or rejected subdomain.

use rand::Rng;

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 8;

/// Number of randomized `prefix-suffix` entries generated per call.
pub const RANDOM_SUGGESTIONS: usize = 5;

pub const PREFIXES: [&str; 8] = ["my", "app", "get", "go", "the", "best", "top", "pro"];
pub const SUFFIXES: [&str; 8] = ["app", "hub", "zone", "space", "lab", "pro", "tech", "io"];

/// Generates alternative full domain names for `keyword` under `extension`.
///
/// # Algorithm
///
/// 1. Keyword variants (only when `keyword` is non-empty):
///    `keyword`, `keyword-app`, `my-keyword`
/// 2. Five random `prefix-suffix` pairs
/// 3. Truncated to [`MAX_SUGGESTIONS`], generation order preserved
///
/// Random entries may repeat. Nothing is run through the validator; a
/// suggestion that is picked has to be validated again.
///
/// # Examples
///
/// ```ignore
/// let suggestions = suggest("myshop", ".io", &mut rand::rng());
///
/// assert_eq!(&suggestions[..3], &["myshop.io", "myshop-app.io", "my-myshop.io"]);
/// assert!(suggestions.len() <= 8);
/// ```
pub fn suggest<R: Rng + ?Sized>(keyword: &str, extension: &str, rng: &mut R) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(3 + RANDOM_SUGGESTIONS);

    if !keyword.is_empty() {
        suggestions.push(format!("{keyword}{extension}"));
        suggestions.push(format!("{keyword}-app{extension}"));
        suggestions.push(format!("my-{keyword}{extension}"));
    }

    for _ in 0..RANDOM_SUGGESTIONS {
        let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
        let suffix = SUFFIXES[rng.random_range(0..SUFFIXES.len())];
        suggestions.push(format!("{prefix}-{suffix}{extension}"));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
