use rand::Rng;
use rand::seq::SliceRandom;

use crate::schedule::perturbation;
use crate::schedule::request::{GenerationRequest, MEAN_TOLERANCE};
use crate::schedule::sequence::Sequence;

/// Randomized attempts before the search is abandoned for the fallback.
const DEFAULT_ATTEMPT_BUDGET: usize = 10_000;

/// Tries allowed to the corrective pass within one attempt.
const DEFAULT_CORRECTIVE_TRIES: usize = 100;

/// Perturbation rounds per sequence element within one attempt.
const ROUNDS_PER_ELEMENT: usize = 2;

/// Exact-average bounded sequence generator.
///
/// # Responsibilities
/// - Run the randomized perturbation search under a bounded attempt budget
/// - Correct residual drift after the defensive clamp, within bounds
/// - Fall back to a closed-form construction once the budget is exhausted
///
/// Generation is a pure one-shot computation per request: the generator
/// holds only policy knobs, no per-call state. A well-formed request
/// always yields a valid sequence, possibly via the fallback path, with
/// no externally visible distinction between the two paths.
#[derive(Clone, Debug)]
pub struct SequenceGenerator {
	attempt_budget: usize,
	corrective_tries: usize,
}

impl Default for SequenceGenerator {
	fn default() -> Self {
		Self {
			attempt_budget: DEFAULT_ATTEMPT_BUDGET,
			corrective_tries: DEFAULT_CORRECTIVE_TRIES,
		}
	}
}

impl SequenceGenerator {
	/// Creates a generator with the reference policy
	/// (10 000 attempts, 100 corrective tries).
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a generator with a custom attempt budget.
	///
	/// A budget of 0 skips the randomized search entirely and always
	/// takes the fallback path.
	pub fn with_attempt_budget(attempt_budget: usize) -> Self {
		Self { attempt_budget, ..Self::default() }
	}

	/// Generates one sequence satisfying the request exactly.
	///
	/// # Behavior
	/// - Runs randomized attempts up to the attempt budget, accepting the
	///   first one whose sum and mean match the target within tolerance.
	/// - On exhaustion, delegates to [`generate_fallback`], which is exact
	///   by arithmetic. This path never fails for a validated request.
	///
	/// Repeated calls are not required to return the same sequence; the
	/// caller controls reproducibility through `rng`.
	///
	/// [`generate_fallback`]: SequenceGenerator::generate_fallback
	pub fn generate<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> Sequence {
		for _ in 0..self.attempt_budget {
			if let Some(values) = self.attempt(request, rng) {
				return Sequence::new(values);
			}
		}

		log::debug!(
			"randomized search exhausted after {} attempts (length {}, target {}), using fallback",
			self.attempt_budget,
			request.length(),
			request.target_average()
		);
		self.generate_fallback(request, rng)
	}

	/// One randomized attempt. Returns `None` when the corrective pass
	/// cannot land the sum on target within its try budget.
	fn attempt<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> Option<Vec<u32>> {
		let length = request.length();
		let array_size = request.array_size();
		let target_sum = request.target_sum();

		// Start every position at the target, then diversify while
		// keeping the total sum exact
		let mut values = vec![request.seed_value(); length];
		perturbation::diversify(&mut values, array_size, ROUNDS_PER_ELEMENT * length, rng);

		// Safety net: perturbation already guarantees bounds
		for value in values.iter_mut() {
			*value = (*value).clamp(1, array_size);
		}

		// Push any residual onto random positions, bounded by headroom
		let mut difference = target_sum - sum(&values);
		for _ in 0..self.corrective_tries {
			if difference == 0 {
				break;
			}

			let pos = rng.random_range(0..length);
			if difference > 0 {
				let increase = difference.min((array_size - values[pos]) as i64);
				values[pos] += increase as u32;
				difference -= increase;
			} else {
				let decrease = (-difference).min((values[pos] - 1) as i64);
				values[pos] -= decrease as u32;
				difference += decrease;
			}
		}

		// Accept only an exact landing
		let realized_sum = sum(&values);
		if realized_sum != target_sum {
			return None;
		}
		let realized_average = realized_sum as f64 / length as f64;
		if (realized_average - request.target_average()).abs() > MEAN_TOLERANCE {
			return None;
		}

		Some(values)
	}

	/// Builds an exact-average sequence without search. Always succeeds.
	///
	/// # Behavior
	/// - Floors the target into every position.
	/// - Distributes the truncation remainder one unit at a time over a
	///   randomly shuffled position order, stopping once it is gone.
	///
	/// Exact by arithmetic in `O(length)`: for a validated request the
	/// remainder is strictly smaller than the number of positions with
	/// headroom, so one unit per visited position suffices.
	pub fn generate_fallback<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> Sequence {
		let length = request.length();
		let array_size = request.array_size();

		let base = (request.target_average().floor() as u32).clamp(1, array_size);
		let mut values = vec![base; length];
		let mut remainder = request.target_sum() - sum(&values);

		let mut positions: Vec<usize> = (0..length).collect();
		positions.shuffle(rng);

		for pos in positions {
			if remainder <= 0 {
				break;
			}
			if values[pos] < array_size {
				values[pos] += 1;
				remainder -= 1;
			}
		}

		// Contract violation: only reachable if validation was bypassed
		debug_assert_eq!(
			sum(&values),
			request.target_sum(),
			"fallback result missed the target sum"
		);

		Sequence::new(values)
	}
}

fn sum(values: &[u32]) -> i64 {
	values.iter().map(|v| *v as i64).sum()
}
