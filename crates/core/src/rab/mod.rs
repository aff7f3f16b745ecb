//! RAB line items: planned cost, realized spend, and margin.
//!
//! A RAB (rencana anggaran biaya) item is one planned expense entry within
//! a project's budget plan. Its planned cost comes from the quantity
//! formula; its realized spend is a materialized sum over the transactions
//! linked to it; margin is the difference between the two.

pub mod error;
pub mod pricing;
pub mod service;
pub mod types;


pub use error::RabError;
pub use service::{RabService, UNCATEGORIZED};
pub use types::{CategoryGroup, CreateRabItemInput, Factor, RabItem};
