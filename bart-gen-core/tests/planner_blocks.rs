use bart_gen_core::schedule::planner::{Block, BreakPointPlanner};
use bart_gen_core::schedule::request::GenerationRequest;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn three_blocks_of_ten() -> Vec<Block> {
	(1..=3)
		.map(|n| {
			let request = GenerationRequest::new(128, 64.0, 10).unwrap();
			Block::new(format!("block {} of 3", n), request)
		})
		.collect()
}

#[test]
fn each_block_independently_meets_its_target() {
	let mut rng = StdRng::seed_from_u64(20);
	let plan = BreakPointPlanner::new()
		.plan_blocked(&three_blocks_of_ten(), &mut rng)
		.unwrap();

	assert_eq!(plan.len(), 30);
	assert_eq!(plan.blocks().len(), 3);
	for block in plan.blocks() {
		assert_eq!(block.sequence().len(), 10);
		assert!((block.sequence().mean() - 64.0).abs() <= 0.001);
	}
	assert!((plan.overall_mean() - 64.0).abs() <= 0.001);
}

#[test]
fn block_order_is_preserved_in_trial_indexing() {
	let mut rng = StdRng::seed_from_u64(21);
	let plan = BreakPointPlanner::new()
		.plan_blocked(&three_blocks_of_ten(), &mut rng)
		.unwrap();

	// Trial k of the plan is element k of the concatenation
	let flattened: Vec<u32> = plan.break_points().collect();
	for (k, expected) in flattened.iter().enumerate() {
		assert_eq!(plan.break_point(k), Some(*expected));
	}
	assert_eq!(plan.break_point(30), None);

	// Trials 10..20 belong to the second block
	assert_eq!(plan.break_point(10), plan.blocks()[1].sequence().get(0));
	assert_eq!(plan.break_point(19), plan.blocks()[1].sequence().get(9));
}

#[test]
fn flat_mode_covers_the_whole_schedule() {
	let mut rng = StdRng::seed_from_u64(22);
	let request = GenerationRequest::new(128, 64.0, 45).unwrap();
	let plan = BreakPointPlanner::new().plan_flat(&request, &mut rng);

	assert_eq!(plan.len(), 45);
	assert_eq!(plan.blocks().len(), 1);
	assert!((plan.overall_mean() - 64.0).abs() <= 0.001);
}

#[test]
fn generated_plans_pass_their_self_check() {
	let mut rng = StdRng::seed_from_u64(23);
	let planner = BreakPointPlanner::new();

	let flat = planner.plan_flat(&GenerationRequest::new(128, 64.0, 45).unwrap(), &mut rng);
	assert!(flat.deviations().is_empty());

	let blocked = planner.plan_blocked(&three_blocks_of_ten(), &mut rng).unwrap();
	assert!(blocked.deviations().is_empty());
}

#[test]
fn blocks_with_different_targets_stay_independent() {
	let mut rng = StdRng::seed_from_u64(24);
	let blocks = vec![
		Block::new("easy", GenerationRequest::new(128, 32.0, 10).unwrap()),
		Block::new("hard", GenerationRequest::new(128, 96.0, 10).unwrap()),
	];
	let plan = BreakPointPlanner::new().plan_blocked(&blocks, &mut rng).unwrap();

	assert!((plan.blocks()[0].sequence().mean() - 32.0).abs() <= 0.001);
	assert!((plan.blocks()[1].sequence().mean() - 96.0).abs() <= 0.001);
	assert!((plan.overall_mean() - 64.0).abs() <= 0.001);
	assert!(plan.deviations().is_empty());
}

#[test]
fn an_empty_block_list_is_rejected() {
	let mut rng = StdRng::seed_from_u64(25);
	assert!(BreakPointPlanner::new().plan_blocked(&[], &mut rng).is_err());
}
