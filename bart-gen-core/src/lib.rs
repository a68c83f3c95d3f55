//! Break-point schedule generation for a balloon risk task.
//!
//! This crate provides the constrained random sequence generator behind
//! the task's explosion-point schedule, including:
//! - Exact-average sequences with bounded values
//! - A randomized perturbation search with a deterministic fallback
//! - Flat and blocked schedule planning with self-check diagnostics
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core schedule types and generation logic.
///
/// This module exposes the request, generator and planner interfaces
/// while keeping the perturbation machinery private.
pub mod schedule;
