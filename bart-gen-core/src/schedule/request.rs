use serde::{Deserialize, Serialize};

/// Numerical tolerance used when comparing realized sums and means against
/// their targets.
pub const MEAN_TOLERANCE: f64 = 0.001;

/// Parameters for one sequence generation call.
///
/// `GenerationRequest` carries the bound on element values (`array_size`),
/// the exact arithmetic mean the result must achieve (`target_average`) and
/// the number of elements to produce (`length`).
///
/// # Responsibilities
/// - Validate all parameters at construction, before any generation attempt
/// - Derive the exact integer sum the generated sequence must reach
///
/// # Invariants
/// - `array_size >= 1` and `length >= 1`
/// - `1.0 <= target_average <= array_size`
/// - `target_average * length` is within `MEAN_TOLERANCE` of an integer
///   (no integer sequence can realize any other sum)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GenerationRequest {
	array_size: u32,
	target_average: f64,
	length: usize,
}

impl GenerationRequest {
	/// Creates a validated request.
	///
	/// # Errors
	/// Returns an error if any parameter falls outside the invariants above.
	/// Malformed requests are rejected here and never silently coerced.
	pub fn new(array_size: u32, target_average: f64, length: usize) -> Result<Self, String> {
		if array_size < 1 {
			return Err("Array size must be at least 1".to_owned());
		}
		if length < 1 {
			return Err("Sequence length must be at least 1".to_owned());
		}
		if !target_average.is_finite() || target_average < 1.0 || target_average > array_size as f64 {
			return Err(format!(
				"Target average must be between 1 and {} (array size), got {}",
				array_size, target_average
			));
		}

		let target_sum = target_average * length as f64;
		if (target_sum - target_sum.round()).abs() > MEAN_TOLERANCE {
			return Err(format!(
				"Target average {} over {} trials implies the non-integer sum {}, \
				 which no integer sequence can realize",
				target_average, length, target_sum
			));
		}

		Ok(Self { array_size, target_average, length })
	}

	/// Upper bound on any element value (the maximum possible break point).
	pub fn array_size(&self) -> u32 {
		self.array_size
	}

	/// The exact arithmetic mean the generated sequence must achieve.
	pub fn target_average(&self) -> f64 {
		self.target_average
	}

	/// Number of elements to generate (one break point per trial).
	pub fn length(&self) -> usize {
		self.length
	}

	/// The exact sum the generated sequence must reach.
	///
	/// Guaranteed integral by the construction-time check.
	pub fn target_sum(&self) -> i64 {
		(self.target_average * self.length as f64).round() as i64
	}

	/// Seed value for a search attempt: the target rounded to the nearest
	/// representable element value.
	pub(crate) fn seed_value(&self) -> u32 {
		(self.target_average.round() as u32).clamp(1, self.array_size)
	}
}

#[cfg(test)]
mod tests {
	use super::GenerationRequest;

	#[test]
	fn accepts_reference_parameters() {
		let request = GenerationRequest::new(128, 64.0, 45).unwrap();
		assert_eq!(request.target_sum(), 2880);
		assert_eq!(request.seed_value(), 64);
	}

	#[test]
	fn accepts_fractional_average_with_integral_sum() {
		let request = GenerationRequest::new(5, 2.5, 4).unwrap();
		assert_eq!(request.target_sum(), 10);
	}

	#[test]
	fn rejects_average_above_array_size() {
		assert!(GenerationRequest::new(128, 200.0, 45).is_err());
	}

	#[test]
	fn rejects_average_below_one() {
		assert!(GenerationRequest::new(128, 0.5, 45).is_err());
	}

	#[test]
	fn rejects_zero_length_and_zero_array() {
		assert!(GenerationRequest::new(128, 64.0, 0).is_err());
		assert!(GenerationRequest::new(0, 1.0, 5).is_err());
	}

	#[test]
	fn rejects_unrealizable_fractional_sum() {
		// 2.5 over 3 trials would need sum 7.5
		assert!(GenerationRequest::new(5, 2.5, 3).is_err());
	}
}
