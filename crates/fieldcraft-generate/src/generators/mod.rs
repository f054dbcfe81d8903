use rand::CryptoRng;
use rand::seq::IndexedRandom;

pub mod invalid;
pub mod pattern;
pub mod primitives;
pub mod valid;

pub use invalid::{create_invalid, create_invalid_for_descriptor};
pub use pattern::generate_matching;
pub use primitives::{
    DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND, create_random_safe_string, create_random_string,
    create_random_string_in_range,
};
pub use valid::{create_valid, random_decimal, random_negative_decimal};

/// Pick one member uniformly at random from an ordered sequence.
///
/// Works for enum labels as well as plain Rust enums listed by the caller:
///
/// ```
/// use fieldcraft_generate::generators::pick_random;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// #[derive(Debug, PartialEq)]
/// enum Tier {
///     Free,
///     Pro,
/// }
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let tier = pick_random(&mut rng, &[Tier::Free, Tier::Pro]).expect("non-empty");
/// assert!(matches!(tier, Tier::Free | Tier::Pro));
/// ```
pub fn pick_random<'a, T>(rng: &mut dyn CryptoRng, members: &'a [T]) -> Option<&'a T> {
    members.choose(rng)
}
