//! # maxwell-mean
//!
//! Weighted-mean estimators for the Maxwell speed distribution.
//!
//! This crate computes the discrete approximation of ∫ψ(v)·pdf(v)·dv over a
//! sampled velocity grid with six different summation strategies, so their
//! accumulated rounding error can be compared against the analytic result
//! √(T/π).
//!
//! ## Modules
//!
//! - [`summation`] — the six accumulation strategies (naive, pairwise
//!   recursive, stride-based "close value" reduction, Kahan compensated,
//!   fused multiply-add, and double-precision reference)
//! - [`maxwell`] — the Maxwell speed density, its sampled grid, and the
//!   analytic mean of the absolute speed
//!
//! ## Design Philosophy
//!
//! - **Reference arithmetic is the contract**: every estimator performs its
//!   additions in a fixed, documented order so results are reproducible
//!   bit-for-bit across runs
//! - **Single precision on purpose**: inputs and five of the six
//!   accumulators stay in `f32`; the error they accumulate is the subject
//!   of study, not a defect to paper over
//! - **Property-based testing**: ordering and cancellation invariants
//!   verified via proptest

pub mod maxwell;
pub mod summation;
