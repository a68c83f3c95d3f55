use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::schedule::generator::SequenceGenerator;
use crate::schedule::request::{GenerationRequest, MEAN_TOLERANCE};
use crate::schedule::sequence::Sequence;

/// A labelled sub-request within a blocked schedule.
///
/// Each block produces its own sequence and must independently satisfy
/// its own target mean; the label exists for ordering and diagnostics.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Block {
	label: String,
	request: GenerationRequest,
}

impl Block {
	pub fn new(label: impl Into<String>, request: GenerationRequest) -> Self {
		Self { label: label.into(), request }
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn request(&self) -> &GenerationRequest {
		&self.request
	}
}

/// One generated block inside a finished plan.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlannedBlock {
	label: String,
	target_average: f64,
	sequence: Sequence,
}

impl PlannedBlock {
	pub fn label(&self) -> &str {
		&self.label
	}

	/// The mean this block was asked to achieve.
	pub fn target_average(&self) -> f64 {
		self.target_average
	}

	pub fn sequence(&self) -> &Sequence {
		&self.sequence
	}
}

/// A finished schedule: the ordered concatenation of block sequences.
///
/// Index `k` of the plan corresponds to trial `k` in presentation order.
/// Block order is preserved from the planning call.
///
/// ## Invariants
/// - Each block's sequence independently meets its own target mean
/// - Read-only once returned by the planner
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
	blocks: Vec<PlannedBlock>,
}

impl Plan {
	/// Total number of trials across all blocks.
	pub fn len(&self) -> usize {
		self.blocks.iter().map(|b| b.sequence.len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.blocks.iter().all(|b| b.sequence.is_empty())
	}

	/// Break point for the given trial index, counted across the
	/// concatenation, or `None` past the end.
	pub fn break_point(&self, trial_index: usize) -> Option<u32> {
		let mut index = trial_index;
		for block in &self.blocks {
			if index < block.sequence.len() {
				return block.sequence.get(index);
			}
			index -= block.sequence.len();
		}
		None
	}

	/// Iterates over all break points in presentation order.
	pub fn break_points(&self) -> impl Iterator<Item = u32> + '_ {
		self.blocks.iter().flat_map(|b| b.sequence.iter())
	}

	/// The generated blocks, in presentation order.
	pub fn blocks(&self) -> &[PlannedBlock] {
		&self.blocks
	}

	/// Realized mean of the full concatenation.
	pub fn overall_mean(&self) -> f64 {
		let total: i64 = self.blocks.iter().map(|b| b.sequence.sum()).sum();
		let count = self.len();
		if count == 0 {
			return 0.0;
		}
		total as f64 / count as f64
	}

	/// Re-computes realized means against targets and describes every
	/// deviation beyond tolerance.
	///
	/// An empty result means the plan passed its self-check. Deviations
	/// are diagnostics, not failures: the generators already enforce the
	/// tolerance internally, so a non-empty result indicates a bug.
	pub fn deviations(&self) -> Vec<String> {
		let mut deviations = Vec::new();

		let mut weighted_target = 0.0;
		for block in &self.blocks {
			let realized = block.sequence.mean();
			if (realized - block.target_average).abs() > MEAN_TOLERANCE {
				deviations.push(format!(
					"Block '{}' realized mean {:.3} deviates from target {:.3}",
					block.label, realized, block.target_average
				));
			}
			weighted_target += block.target_average * block.sequence.len() as f64;
		}

		let count = self.len();
		if count > 0 {
			let overall_target = weighted_target / count as f64;
			let overall = self.overall_mean();
			if (overall - overall_target).abs() > MEAN_TOLERANCE {
				deviations.push(format!(
					"Plan realized mean {:.3} deviates from target {:.3}",
					overall, overall_target
				));
			}
		}

		deviations
	}
}

/// Assembles full trial schedules out of exact-average sequences.
///
/// # Responsibilities
/// - Flat mode: one request covering the entire schedule
/// - Blocked mode: independent requests concatenated in block order
/// - Self-check: log realized-mean deviations after generation
///
/// Stateless beyond the generator's policy knobs; each planning call is
/// a one-shot computation performed once during session setup.
#[derive(Clone, Debug, Default)]
pub struct BreakPointPlanner {
	generator: SequenceGenerator,
}

impl BreakPointPlanner {
	/// Creates a planner over the reference generator policy.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a planner over a custom generator.
	pub fn with_generator(generator: SequenceGenerator) -> Self {
		Self { generator }
	}

	/// Generates the entire schedule from a single request.
	pub fn plan_flat<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> Plan {
		let sequence = self.generator.generate(request, rng);
		let plan = Plan {
			blocks: vec![PlannedBlock {
				label: "all trials".to_owned(),
				target_average: request.target_average(),
				sequence,
			}],
		};
		self.report_deviations(&plan);
		plan
	}

	/// Generates one sequence per block and concatenates them in order.
	///
	/// # Errors
	/// Returns an error for an empty block list; each block's request was
	/// already validated at construction.
	pub fn plan_blocked<R: Rng>(&self, blocks: &[Block], rng: &mut R) -> Result<Plan, String> {
		if blocks.is_empty() {
			return Err("At least one block is required".to_owned());
		}

		let mut planned = Vec::with_capacity(blocks.len());
		for block in blocks {
			let sequence = self.generator.generate(block.request(), rng);
			planned.push(PlannedBlock {
				label: block.label.clone(),
				target_average: block.request.target_average(),
				sequence,
			});
		}

		let plan = Plan { blocks: planned };
		self.report_deviations(&plan);
		Ok(plan)
	}

	fn report_deviations(&self, plan: &Plan) {
		for deviation in plan.deviations() {
			log::warn!("{}", deviation);
		}
	}
}
