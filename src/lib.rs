//! # Deferred Acceptance
//!
//! Stable, capacity-respecting school choice via student-proposing
//! deferred acceptance.
//!
//! ## Architecture
//!
//! - **Types**: Validated market, assignment, match receipt
//! - **Roster**: Per-run working state (priority table, rosters, free queue)
//! - **Engine**: The proposal/rejection loop and the stability audit
//! - **Raw / FFI**: Signed-integer and C ABI boundaries for foreign callers
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical markets always produce identical assignments
//! 2. **Validate First**: Malformed input is rejected before any matching work
//! 3. **Reentrant**: No global state; every run owns its working structures
//! 4. **Synchronous Execution**: One bounded loop, no I/O, no blocking
//!
//! ## Example
//!
//! ```
//! use deferred_acceptance::{Market, MatchingEngine};
//!
//! let market = Market::new(
//!     vec![vec![0, 1], vec![0, 1], vec![]],  // student preferences
//!     vec![vec![1, 0, 2], vec![0, 1, 2]],    // school priority rankings
//!     vec![1, 1],                            // capacities
//! ).unwrap();
//!
//! let result = MatchingEngine::new().run(&market);
//!
//! assert_eq!(result.assignment.school_of(0), Some(1));
//! assert_eq!(result.assignment.school_of(1), Some(0));
//! assert_eq!(result.assignment.school_of(2), None);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for input validation
pub mod error;

/// Core data types: Market, Assignment, MatchReceipt
pub mod types;

/// Working state of one run: priority table, rosters, free queue
pub mod roster;

/// Matching engine: deferred acceptance and stability audit
pub mod engine;

/// Signed-integer boundary for foreign callers
pub mod raw;

/// C ABI entry point
pub mod ffi;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{
    audit, deferred_acceptance, find_blocking_pair, EngineConfig, MatchResult, MatchStats,
    MatchingEngine, Violation,
};
pub use error::{ErrorKind, MatchError, Result};
pub use roster::{FreeQueue, PriorityTable, Roster};
pub use types::{Assignment, Market, MatchReceipt, School, SchoolId, StudentId, UNASSIGNED};
