//! Matched-betting calculation engine.
//!
//! Three pure, synchronous components behind a small function surface:
//!
//! - [`engine::compute_hedge`] — back/lay hedge stake and profit pair, with
//!   qualifier and free-bet (SNR/SR) modes and exchange commission;
//! - [`engine::dutch`] — per-outcome profit for 2-way and 3-way dutching
//!   books;
//! - [`engine::resolve_stakes`] — fills missing stakes from partial input,
//!   either by propagating a single known stake or by splitting a total
//!   budget by implied probability.
//!
//! The engine never raises: missing input yields zero-valued results and
//! infeasible prices flow through as negative or non-finite numbers for the
//! host to label. Parsing of raw field text lives in [`parse`].

pub mod engine;
pub mod parse;

pub use engine::{
    compute_hedge, resolve_stakes, BackLayInput, Book, BonusMode, HedgeResult, Outcome,
    Selection, StakeResolutionRequest,
};
