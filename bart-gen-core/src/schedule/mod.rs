//! Top-level module for the break-point generation system.
//!
//! This crate provides an exact-average bounded sequence generator, including:
//! - Validated generation requests (`GenerationRequest`)
//! - Immutable result sequences (`Sequence`)
//! - Randomized search plus deterministic fallback (`SequenceGenerator`)
//! - Flat and blocked schedule assembly (`BreakPointPlanner`)

/// High-level interface for assembling a full trial schedule.
///
/// Exposes flat and blocked planning, block labelling, and realized-mean
/// diagnostics over the assembled plan.
pub mod planner;

/// Exact-average sequence generation (`SequenceGenerator`).
///
/// Runs a bounded randomized search over sum-preserving perturbations and
/// falls back to a closed-form construction when the search is exhausted.
pub mod generator;

/// Validated generation parameters (`GenerationRequest`).
///
/// Rejects malformed requests before any generation attempt.
pub mod request;

/// Immutable result sequence (`Sequence`).
///
/// A read-only ordered mapping from trial index to break-point value.
pub mod sequence;

/// Internal sum-preserving perturbation rounds.
///
/// Transfers magnitude between random position pairs while keeping every
/// value within bounds. This module is not exposed publicly.
mod perturbation;
