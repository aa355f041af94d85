//! Draw helpers over the generator's ChaCha stream. Every helper draws a
//! fixed number of values per call, so stage code stays reproducible as long
//! as it calls them in a fixed order.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform value in `0..bound`. `bound` must be positive.
pub(super) fn uniform_below(rng: &mut ChaCha8Rng, bound: u64) -> u64 {
    debug_assert!(bound > 0, "cannot sample an empty range");
    rng.next_u64() % bound
}

/// Uniform element of a non-empty slice.
pub(super) fn pick<T: Copy>(rng: &mut ChaCha8Rng, options: &[T]) -> T {
    options[uniform_below(rng, options.len() as u64) as usize]
}

/// Uniform odd value in `min_value..=max_value`, or `None` when the range
/// holds no odd value. Draws exactly once even for a single-element range.
pub(super) fn odd_in_range(rng: &mut ChaCha8Rng, min_value: i32, max_value: i32) -> Option<i32> {
    let lo = if min_value % 2 == 0 { min_value + 1 } else { min_value };
    let hi = if max_value % 2 == 0 { max_value - 1 } else { max_value };
    if lo > hi {
        return None;
    }
    let choices = ((hi - lo) / 2 + 1) as u64;
    Some(lo + 2 * uniform_below(rng, choices) as i32)
}

/// True with chance `probability`; always consumes one draw.
pub(super) fn roll(rng: &mut ChaCha8Rng, probability: f64) -> bool {
    random_unit(rng) < probability
}

/// Uniform in `[0, 1)` from the top 53 bits of one draw.
fn random_unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn odd_in_range_only_returns_odd_values_inside_the_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let value = odd_in_range(&mut rng, 3, 9).expect("range holds odd values");
            assert!(value % 2 == 1 && (3..=9).contains(&value));
        }
    }

    #[test]
    fn odd_in_range_handles_degenerate_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(odd_in_range(&mut rng, 3, 3), Some(3));
        assert_eq!(odd_in_range(&mut rng, 4, 4), None);
        assert_eq!(odd_in_range(&mut rng, 5, 3), None);
    }

    #[test]
    fn roll_is_monotone_at_the_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(!roll(&mut rng, 0.0));
            assert!(roll(&mut rng, 1.0));
        }
    }

    #[test]
    fn pick_stays_within_the_slice() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let options = [10, 20, 30];
        for _ in 0..50 {
            assert!(options.contains(&pick(&mut rng, &options)));
        }
    }
}
