//! Problem instance for the matching engine.
//!
//! A [`Market`] is only ever constructed through validation, so every value
//! of the type satisfies the engine's preconditions:
//!
//! - every preference entry is a valid school index
//! - every school ranking is a permutation of all student indices
//! - there is one capacity per school
//! - every school index fits the signed raw encoding
//!
//! The engine can then index freely without re-checking.

use log::warn;

use crate::engine::EngineConfig;
use crate::error::{MatchError, Result};

/// Index of a student in `[0, num_students)`.
pub type StudentId = usize;

/// Index of a school in `[0, num_schools)`.
pub type SchoolId = usize;

/// Most schools a market may hold, so that every id fits in an `i32`.
pub(crate) const MAX_SCHOOLS: usize = i32::MAX as usize;

// ============================================================================
// School
// ============================================================================

/// A school: a seat capacity and a strict priority ranking over all students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    /// Maximum number of students held at once. Zero means the school never admits.
    pub capacity: usize,

    /// Students ordered best first. A permutation of `0..num_students`.
    pub ranking: Vec<StudentId>,
}

impl School {
    pub fn new(capacity: usize, ranking: Vec<StudentId>) -> Self {
        Self { capacity, ranking }
    }
}

// ============================================================================
// Market
// ============================================================================

/// A validated school-choice market.
///
/// ## Example
///
/// ```
/// use deferred_acceptance::Market;
///
/// let market = Market::new(
///     vec![vec![0, 1], vec![1]],   // student preferences
///     vec![vec![0, 1], vec![1, 0]], // school rankings
///     vec![1, 1],                   // capacities
/// ).unwrap();
///
/// assert_eq!(market.num_students(), 2);
/// assert_eq!(market.total_capacity(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    preferences: Vec<Vec<SchoolId>>,
    schools: Vec<School>,
}

impl Market {
    /// Validate and build a market, rejecting duplicate preference entries.
    pub fn new(
        preferences: Vec<Vec<SchoolId>>,
        rankings: Vec<Vec<StudentId>>,
        capacities: Vec<usize>,
    ) -> Result<Self> {
        Self::with_config(preferences, rankings, capacities, &EngineConfig::default())
    }

    /// Validate and build a market using the validation switches in `config`.
    pub fn with_config(
        preferences: Vec<Vec<SchoolId>>,
        rankings: Vec<Vec<StudentId>>,
        capacities: Vec<usize>,
        config: &EngineConfig,
    ) -> Result<Self> {
        if let Err(err) = validate(&preferences, &rankings, &capacities, config) {
            warn!("rejecting market: {err}");
            return Err(err);
        }

        let schools = rankings
            .into_iter()
            .zip(capacities)
            .map(|(ranking, capacity)| School::new(capacity, ranking))
            .collect();

        Ok(Self { preferences, schools })
    }

    #[inline]
    pub fn num_students(&self) -> usize {
        self.preferences.len()
    }

    #[inline]
    pub fn num_schools(&self) -> usize {
        self.schools.len()
    }

    /// Ranked schools of `student`, most preferred first.
    #[inline]
    pub fn preferences(&self, student: StudentId) -> &[SchoolId] {
        &self.preferences[student]
    }

    #[inline]
    pub fn school(&self, school: SchoolId) -> &School {
        &self.schools[school]
    }

    #[inline]
    pub fn capacity(&self, school: SchoolId) -> usize {
        self.school(school).capacity
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn total_capacity(&self) -> usize {
        self.schools.iter().map(|s| s.capacity).sum()
    }

    /// Sum of preference-list lengths; bounds the number of proposals.
    pub fn total_preferences(&self) -> usize {
        self.preferences.iter().map(Vec::len).sum()
    }
}

// ============================================================================
// Validation
// ============================================================================

fn check_counts(num_students: usize, num_schools: usize, num_capacities: usize) -> Result<()> {
    if num_students == 0 {
        return Err(MatchError::NoStudents);
    }
    if num_schools == 0 {
        return Err(MatchError::NoSchools);
    }
    if num_schools > MAX_SCHOOLS {
        return Err(MatchError::DimensionOverflow("schools"));
    }
    if num_capacities != num_schools {
        return Err(MatchError::CapacityCountMismatch {
            expected: num_schools,
            actual: num_capacities,
        });
    }
    Ok(())
}

fn validate(
    preferences: &[Vec<SchoolId>],
    rankings: &[Vec<StudentId>],
    capacities: &[usize],
    config: &EngineConfig,
) -> Result<()> {
    let num_students = preferences.len();
    let num_schools = rankings.len();
    check_counts(num_students, num_schools, capacities.len())?;

    // Reused across rows; cleared per row
    let mut seen = vec![false; num_schools.max(num_students)];

    for (student, prefs) in preferences.iter().enumerate() {
        for &school in prefs {
            if school >= num_schools {
                return Err(MatchError::InvalidPreference {
                    student,
                    school: school as i64,
                });
            }
            if config.reject_duplicate_preferences {
                if seen[school] {
                    return Err(MatchError::DuplicatePreference { student, school });
                }
                seen[school] = true;
            }
        }
        for &school in prefs {
            seen[school] = false;
        }
    }

    for (school, ranking) in rankings.iter().enumerate() {
        if ranking.len() != num_students {
            return Err(MatchError::RankingLength {
                school,
                expected: num_students,
                actual: ranking.len(),
            });
        }
        for &student in ranking {
            if student >= num_students {
                return Err(MatchError::RankingOutOfRange {
                    school,
                    student: student as i64,
                });
            }
            if seen[student] {
                return Err(MatchError::RankingDuplicate { school, student });
            }
            seen[student] = true;
        }
        // Right length, in range, no duplicates: a permutation.
        seen.iter_mut().for_each(|flag| *flag = false);
    }

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
