use rand::Rng;

/// Runs `rounds` sum-preserving perturbation rounds over `values`.
///
/// Each round picks two distinct positions and transfers a random
/// magnitude between them, bounded so that both positions stay within
/// `[1, array_size]` in either direction. Rounds without headroom are
/// skipped rather than retried.
///
/// ## Responsibilities
/// - Diversify a uniform seed state away from the target value
/// - Preserve the total sum exactly on every round, by construction
/// - Never move any value outside `[1, array_size]`
///
/// Mutates `values` in place; never panics for `values.len() >= 2`.
/// For shorter slices there is no distinct pair to perturb, so the call
/// is a no-op.
pub(crate) fn diversify<R: Rng>(values: &mut [u32], array_size: u32, rounds: usize, rng: &mut R) {
	if values.len() < 2 {
		return;
	}

	for _ in 0..rounds {
		// Pick two distinct positions
		let i = rng.random_range(0..values.len());
		let mut j = rng.random_range(0..values.len());
		while j == i {
			j = rng.random_range(0..values.len());
		}

		let max_change = max_transfer(values[i], values[j], array_size);
		if max_change > 0 {
			let change = rng.random_range(1..=max_change);

			// Randomly decide direction
			if rng.random_bool(0.5) {
				values[i] += change;
				values[j] -= change;
			} else {
				values[i] -= change;
				values[j] += change;
			}
		}
	}
}

/// Largest magnitude that can move between two positions, in either
/// direction, without leaving `[1, array_size]` at either end.
fn max_transfer(a: u32, b: u32, array_size: u32) -> u32 {
	(a - 1)
		.min(array_size - b)
		.min(b - 1)
		.min(array_size - a)
}

#[cfg(test)]
mod tests {
	use super::{diversify, max_transfer};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn transfer_headroom_is_symmetric() {
		assert_eq!(max_transfer(64, 64, 128), 63);
		assert_eq!(max_transfer(1, 128, 128), 0);
		assert_eq!(max_transfer(2, 127, 128), 1);
	}

	#[test]
	fn rounds_preserve_sum_and_bounds() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut values = vec![64u32; 45];
		let before: i64 = values.iter().map(|v| *v as i64).sum();

		diversify(&mut values, 128, 90, &mut rng);

		let after: i64 = values.iter().map(|v| *v as i64).sum();
		assert_eq!(before, after);
		assert!(values.iter().all(|v| (1..=128).contains(v)));
	}

	#[test]
	fn saturated_values_are_left_untouched() {
		// Every position pinned at the bound: no legal transfer exists
		let mut rng = StdRng::seed_from_u64(7);
		let mut values = vec![10u32; 5];
		diversify(&mut values, 10, 100, &mut rng);
		assert_eq!(values, vec![10; 5]);
	}

	#[test]
	fn single_element_is_a_noop() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut values = vec![3u32];
		diversify(&mut values, 5, 10, &mut rng);
		assert_eq!(values, vec![3]);
	}
}
