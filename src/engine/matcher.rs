//! Student-proposing deferred acceptance.
//!
//! ## Algorithm
//!
//! ```text
//! queue = [0, 1, .., n-1]
//! while s = queue.front():
//!     if s has no schools left:         pop s (unassigned)
//!     c = next school on s's list
//!     if c has a free seat:             admit s, pop s
//!     elif c prefers s to its worst:    swap them, pop s, push worst
//!     else:                             reject (s stays at the front)
//!     advance s's cursor
//!     if s is still queued and out of schools: pop s
//! ```
//!
//! Evicted students keep their cursor and resume from the next school on
//! their list. Every iteration either pops a student or advances a cursor,
//! so the loop runs at most `Σ |preferences| + n` times.

use log::{debug, trace};

use crate::engine::stability;
use crate::engine::EngineConfig;
use crate::error::Result;
use crate::roster::{FreeQueue, PriorityTable, Roster};
use crate::types::{Assignment, Market, MatchReceipt, SchoolId, StudentId};

// ============================================================================
// MatchStats / MatchResult
// ============================================================================

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Cursor advances: one per school a student applied to
    pub proposals: u64,

    /// Proposals turned down by a full school (including capacity 0)
    pub rejections: u64,

    /// Held students displaced by a better-ranked proposer
    pub evictions: u64,

    /// Students removed from the queue with no schools left to try
    pub exhausted: u64,
}

/// Output of [`MatchingEngine::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub assignment: Assignment,
    pub stats: MatchStats,
    pub num_schools: usize,
}

impl MatchResult {
    /// Summarize this run as an SSZ-encodable receipt.
    pub fn receipt(&self) -> MatchReceipt {
        MatchReceipt {
            num_students: self.assignment.len() as u64,
            num_schools: self.num_schools as u64,
            assigned: self.assignment.assigned_count() as u64,
            unassigned: self.assignment.unassigned_count() as u64,
            proposals: self.stats.proposals,
            rejections: self.stats.rejections,
            evictions: self.stats.evictions,
            assignment_root: self.assignment.digest(),
        }
    }
}

// ============================================================================
// MatchingEngine
// ============================================================================

/// Deferred-acceptance matching engine.
///
/// The engine carries configuration only. Every call to [`run`](Self::run)
/// builds its own rosters, cursors and queue, so one engine can serve any
/// number of markets, from any number of threads.
///
/// ## Example
///
/// ```
/// use deferred_acceptance::{Market, MatchingEngine};
///
/// let market = Market::new(
///     vec![vec![0, 1], vec![0]],
///     vec![vec![1, 0], vec![0, 1]],
///     vec![1, 1],
/// ).unwrap();
///
/// let result = MatchingEngine::new().run(&market);
/// assert_eq!(result.assignment.to_raw(), vec![1, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: EngineConfig,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate raw inputs with this engine's configuration and run.
    pub fn solve(
        &self,
        preferences: Vec<Vec<SchoolId>>,
        rankings: Vec<Vec<StudentId>>,
        capacities: Vec<usize>,
    ) -> Result<MatchResult> {
        let market = Market::with_config(preferences, rankings, capacities, &self.config)?;
        Ok(self.run(&market))
    }

    /// Compute the student-optimal stable assignment for `market`.
    ///
    /// # Panics
    ///
    /// Panics only on an internal defect: a roster overflowing its capacity,
    /// or (with `verify_result`) an assignment that fails the stability audit.
    pub fn run(&self, market: &Market) -> MatchResult {
        let num_students = market.num_students();
        let num_schools = market.num_schools();
        debug!(
            "deferred acceptance: {} students, {} schools, {} seats",
            num_students,
            num_schools,
            market.total_capacity()
        );

        let table = PriorityTable::build(market);
        let mut rosters: Vec<Roster> = (0..num_schools)
            .map(|school| Roster::new(school, market.capacity(school)))
            .collect();
        let mut cursors = vec![0usize; num_students];
        let mut queue = FreeQueue::seeded(num_students);
        let mut stats = MatchStats::default();

        while let Some(student) = queue.front() {
            let prefs = market.preferences(student);
            let cursor = cursors[student];

            if cursor >= prefs.len() {
                trace!("student {student} exhausted its list");
                queue.pop_front();
                stats.exhausted += 1;
                continue;
            }

            let school = prefs[cursor];
            let roster = &mut rosters[school];
            stats.proposals += 1;

            let held = if roster.has_room() {
                trace!("student {student} admitted to school {school}");
                roster.admit(student);
                queue.pop_front();
                true
            } else {
                match roster.worst(&table) {
                    Some(worst) if table.prefers(school, student, worst.student) => {
                        let evicted = roster.replace(worst.position, student);
                        trace!("student {student} displaces {evicted} at school {school}");
                        queue.pop_front();
                        queue.push_back(evicted);
                        stats.evictions += 1;
                        true
                    }
                    _ => {
                        trace!("student {student} rejected by school {school}");
                        stats.rejections += 1;
                        false
                    }
                }
            };

            cursors[student] += 1;
            // Only a rejected student is still at the front; a held one
            // stays in its roster even when its list is used up.
            if !held && cursors[student] == prefs.len() {
                trace!("student {student} exhausted its list");
                queue.pop_front();
                stats.exhausted += 1;
            }
        }

        debug_assert!(queue.is_empty());
        let assignment = extract(&rosters, num_students);

        debug_assert!(stats.proposals as usize <= market.total_preferences());
        debug_assert_eq!(stats.exhausted as usize, assignment.unassigned_count());
        debug!(
            "deferred acceptance done: {} assigned, {} unassigned, {} proposals, {} evictions",
            assignment.assigned_count(),
            assignment.unassigned_count(),
            stats.proposals,
            stats.evictions
        );

        if self.config.verify_result {
            if let Err(violation) = stability::audit(market, &assignment) {
                panic!("deferred acceptance produced an invalid assignment: {violation}");
            }
        }

        MatchResult {
            assignment,
            stats,
            num_schools,
        }
    }
}

/// Default everyone to unassigned, then place each rostered student.
fn extract(rosters: &[Roster], num_students: usize) -> Assignment {
    let mut assignment = Assignment::unassigned_for(num_students);
    for roster in rosters {
        assert!(roster.len() <= roster.capacity());
        for &student in roster.students() {
            assignment.assign(student, roster.school());
        }
    }
    assignment
}

/// Validate and match in one call with the default configuration.
///
/// ## Example
///
/// ```
/// use deferred_acceptance::deferred_acceptance;
///
/// let assignment = deferred_acceptance(
///     &[vec![0, 1], vec![1]],
///     &[vec![0, 1], vec![1, 0]],
///     &[1, 1],
/// ).unwrap();
///
/// assert_eq!(assignment.school_of(0), Some(0));
/// assert_eq!(assignment.school_of(1), Some(1));
/// ```
pub fn deferred_acceptance(
    preferences: &[Vec<SchoolId>],
    rankings: &[Vec<StudentId>],
    capacities: &[usize],
) -> Result<Assignment> {
    MatchingEngine::new()
        .solve(preferences.to_vec(), rankings.to_vec(), capacities.to_vec())
        .map(|result| result.assignment)
}

// ============================================================================
// Unit Tests
// ============================================================================
