//! Foundation types for the tally settlement ledger.
//!
//! This crate provides the plain data types shared by every other tally
//! crate. It carries no ledger logic: admission rules, snapshot chaining,
//! and settlement all live in `tally-ledger`.
//!
//! # Key Types
//!
//! - [`AccountId`] — Integer account identifier
//! - [`AccountBalance`] — One account's committed balance
//! - [`Transfer`] — A single origin→destination amount movement
//! - [`Transaction`] — An ordered batch of transfers applied as a unit

pub mod account;
pub mod transfer;

pub use account::{AccountBalance, AccountId};
pub use transfer::{Transaction, Transfer};
