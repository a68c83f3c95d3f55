use serde::{Deserialize, Serialize};

/// An ordered, immutable list of break-point values.
///
/// A `Sequence` is the result of one generation call: `length` integers,
/// each within `[1, array_size]`, summing exactly to the request's target
/// sum. Consumers read it as an ordered mapping from trial index
/// (0-based, presentation order) to explosion-point value.
///
/// ## Invariants
/// - Values are never mutated after construction
/// - `sum()` equals the originating request's target sum exactly
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
	values: Vec<u32>,
}

impl Sequence {
	/// Wraps finished values. Crate-internal: only the generators may
	/// construct sequences, after their invariants are established.
	pub(crate) fn new(values: Vec<u32>) -> Self {
		Self { values }
	}

	/// Number of break points (one per trial).
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// True when the sequence holds no values.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Break point for the given trial index, or `None` past the end.
	pub fn get(&self, trial_index: usize) -> Option<u32> {
		self.values.get(trial_index).copied()
	}

	/// Iterates over break points in presentation order.
	pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
		self.values.iter().copied()
	}

	/// Read-only view of the underlying values.
	pub fn values(&self) -> &[u32] {
		&self.values
	}

	/// Sum of all break points.
	pub fn sum(&self) -> i64 {
		self.values.iter().map(|v| *v as i64).sum()
	}

	/// Realized arithmetic mean.
	///
	/// Computed on demand; the empty case cannot occur for generated
	/// sequences (`length >= 1` is enforced at request construction).
	pub fn mean(&self) -> f64 {
		if self.values.is_empty() {
			return 0.0;
		}
		self.sum() as f64 / self.values.len() as f64
	}
}

impl From<Sequence> for Vec<u32> {
	fn from(sequence: Sequence) -> Self {
		sequence.values
	}
}
