//! Short slug generation.
//!
//! Slugs are fixed-length random identifiers drawn from an unambiguous
//! alphanumeric alphabet. Generation does not guarantee uniqueness; the
//! storage layer's uniqueness constraint does, and callers retry on
//! collision.

use rand::Rng;

/// Length of a generated slug.
pub const SLUG_LENGTH: usize = 6;

/// Alphanumeric characters minus the ambiguous `0 O 1 I l`.
///
/// 57 symbols at 6 positions gives roughly 3.4e10 distinct slugs, adequate
/// for low-to-moderate volume.
const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generates a random slug.
///
/// Samples the alphabet uniformly using the thread-local CSPRNG, so slugs
/// are not sequential or predictable.
///
/// # Examples
///
/// ```
/// use slugline::utils::slug_generator::{generate_slug, SLUG_LENGTH};
///
/// let slug = generate_slug();
/// assert_eq!(slug.len(), SLUG_LENGTH);
/// ```
pub fn generate_slug() -> String {
    let mut rng = rand::rng();

    (0..SLUG_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
