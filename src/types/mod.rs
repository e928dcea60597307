//! Core data types for deferred acceptance
//!
//! ## Types
//!
//! - [`Market`]: validated students, schools, capacities and rankings
//! - [`School`]: capacity plus strict priority ranking
//! - [`Assignment`]: school (or none) per student
//! - [`MatchReceipt`]: SSZ-encodable run summary
//!
//! Students and schools are plain indices ([`StudentId`], [`SchoolId`]).

mod assignment;
mod market;
mod receipt;

pub use assignment::{Assignment, UNASSIGNED};
pub use market::{Market, School, SchoolId, StudentId};
pub use receipt::MatchReceipt;
