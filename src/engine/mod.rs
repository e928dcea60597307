//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same market always produces the same assignment
//! 2. **No shared state**: Each run owns its rosters, cursors and queue
//! 3. **Validate first**: Malformed input never reaches the proposal loop
//! 4. **Strict priorities**: Comparisons are by rank alone; ties cannot occur
//!
//! ## Matching Rules
//!
//! - Students propose in preference order, one school at a time
//! - A school with a free seat holds every proposer tentatively
//! - A full school keeps the proposer only if it outranks the worst held student
//! - Displaced students resume from their next choice
//!
//! ## Example
//!
//! ```
//! use deferred_acceptance::engine::MatchingEngine;
//! use deferred_acceptance::types::Market;
//!
//! let market = Market::new(
//!     vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 2, 1], vec![2, 1]],
//!     vec![vec![2, 1, 3, 0], vec![0, 2, 1, 3], vec![1, 2, 0, 3]],
//!     vec![1, 1, 1],
//! ).unwrap();
//!
//! let result = MatchingEngine::new().run(&market);
//!
//! assert_eq!(result.assignment.to_raw(), vec![1, 2, 0, -1]);
//! ```

pub mod config;
pub mod matcher;
pub mod stability;

pub use config::EngineConfig;
pub use matcher::{deferred_acceptance, MatchResult, MatchStats, MatchingEngine};
pub use stability::{audit, find_blocking_pair, Violation};
