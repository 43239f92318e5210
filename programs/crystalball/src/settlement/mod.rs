//! # Settlement
//!
//! Arithmetic and lamport movement behind `reveal`, `claim` and `withdraw`.
//!
//! A settled prediction pays out in two steps:
//!
//! ```text
//!   pool ──reveal──▶ protocol fee ──▶ fee receiver
//!              ├───▶ creator fee  ──▶ creator
//!              └───▶ reward pool  ──claim──▶ winners, pro rata
//! ```
//!
//! An expired prediction skips fees entirely and refunds every stake.

pub mod escrow;
pub mod payout;

pub use payout::*;
