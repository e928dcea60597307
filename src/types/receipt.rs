//! Match receipt summarizing one engine run.
//!
//! The receipt is a fixed-size SSZ container, so two runs over the same
//! market always encode to the same bytes.

use ssz_rs::prelude::*;

/// Summary of a completed matching run.
///
/// ## Assignment Root
///
/// The 32-byte assignment root is the SHA-256 digest of the raw assignment
/// (see [`Assignment::digest`](crate::Assignment::digest)). It lets two
/// parties confirm they computed the same matching without exchanging it.
///
/// ## Example
///
/// ```
/// use deferred_acceptance::{Market, MatchingEngine};
///
/// let market = Market::new(vec![vec![0], vec![0]], vec![vec![1, 0]], vec![1]).unwrap();
/// let result = MatchingEngine::new().run(&market);
/// let receipt = result.receipt();
///
/// assert_eq!(receipt.assigned, 1);
/// assert_eq!(receipt.unassigned, 1);
/// assert_eq!(receipt.assignment_root, result.assignment.digest());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Number of students in the market
    pub num_students: u64,

    /// Number of schools in the market
    pub num_schools: u64,

    /// Students holding a seat at the end of the run
    pub assigned: u64,

    /// Students left without a seat
    pub unassigned: u64,

    /// Proposals made (one per cursor advance)
    pub proposals: u64,

    /// Proposals turned down by a full school
    pub rejections: u64,

    /// Tentatively held students displaced by a better-ranked proposer
    pub evictions: u64,

    /// SHA-256 of the raw assignment (32 bytes)
    pub assignment_root: [u8; 32],
}

impl MatchReceipt {
    /// Get the assignment root as a hex string
    pub fn assignment_root_hex(&self) -> String {
        hex::encode(self.assignment_root)
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned == 0
    }

    /// Share of students holding a seat.
    ///
    /// Returns None for an empty receipt.
    pub fn assignment_rate(&self) -> Option<f64> {
        if self.num_students == 0 {
            None
        } else {
            Some(self.assigned as f64 / self.num_students as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
