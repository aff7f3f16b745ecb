//! Core business logic for Anggara.
//!
//! This crate contains pure business logic with ZERO web or storage
//! dependencies. All domain types, validation rules, and derivations live
//! here.
//!
//! # Modules
//!
//! - `wallet` - Bank wallets and balance mutation
//! - `project` - Projects, budget allocation, and the budget-vs-actual rollup
//! - `rab` - RAB line items (planned cost, realized spend, margin)
//! - `ledger` - Cash transactions and transfers, the sole mutators of state
//! - `solvency` - Company-wide solvency view

pub mod ledger;
pub mod project;
pub mod rab;
pub mod solvency;
pub mod wallet;
