//! Post-hoc audit of an assignment.
//!
//! Checks the properties every deferred-acceptance result must have:
//!
//! 1. one slot per student
//! 2. no school over capacity
//! 3. individual rationality: students only sit at schools they ranked
//! 4. no blocking pair
//!
//! A pair `(s, c)` blocks when `s` ranks `c` above its current placement
//! (or is unassigned and ranks `c` at all) and `c` either has a free seat or
//! holds some student it ranks below `s`.

use thiserror::Error;

use crate::roster::PriorityTable;
use crate::types::{Assignment, Market, SchoolId, StudentId};

/// A broken assignment property.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("assignment covers {actual} students, market has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("student {student} placed at unknown school {school}")]
    UnknownSchool { student: StudentId, school: SchoolId },

    #[error("student {student} placed at school {school} it did not rank")]
    NotRanked { student: StudentId, school: SchoolId },

    #[error("school {school} holds {held} students, capacity {capacity}")]
    OverCapacity {
        school: SchoolId,
        held: usize,
        capacity: usize,
    },

    #[error("student {student} and school {school} form a blocking pair")]
    BlockingPair { student: StudentId, school: SchoolId },
}

/// Check every property, reporting the first violation found.
pub fn audit(market: &Market, assignment: &Assignment) -> Result<(), Violation> {
    if assignment.len() != market.num_students() {
        return Err(Violation::LengthMismatch {
            expected: market.num_students(),
            actual: assignment.len(),
        });
    }

    let mut held = vec![0usize; market.num_schools()];
    for (student, slot) in assignment.iter() {
        let Some(school) = slot else { continue };
        if school >= market.num_schools() {
            return Err(Violation::UnknownSchool { student, school });
        }
        if !market.preferences(student).contains(&school) {
            return Err(Violation::NotRanked { student, school });
        }
        held[school] += 1;
    }

    for (school, &count) in held.iter().enumerate() {
        let capacity = market.capacity(school);
        if count > capacity {
            return Err(Violation::OverCapacity {
                school,
                held: count,
                capacity,
            });
        }
    }

    match find_blocking_pair(market, assignment) {
        Some((student, school)) => Err(Violation::BlockingPair { student, school }),
        None => Ok(()),
    }
}

/// First `(student, school)` blocking pair in student-index order, if any.
///
/// Placements at unknown schools are ignored; a placement at a school the
/// student did not rank counts as worse than every ranked school.
pub fn find_blocking_pair(
    market: &Market,
    assignment: &Assignment,
) -> Option<(StudentId, SchoolId)> {
    let table = PriorityTable::build(market);
    let num_schools = market.num_schools();

    let mut held = vec![0usize; num_schools];
    let mut worst_rank: Vec<Option<usize>> = vec![None; num_schools];
    for (student, slot) in assignment.iter() {
        let Some(school) = slot.filter(|&c| c < num_schools) else { continue };
        held[school] += 1;
        let rank = table.rank(school, student);
        worst_rank[school] = Some(worst_rank[school].map_or(rank, |w| w.max(rank)));
    }

    for student in 0..market.num_students().min(assignment.len()) {
        let prefs = market.preferences(student);
        let better = match assignment.school_of(student) {
            Some(current) => prefs.iter().position(|&c| c == current).unwrap_or(prefs.len()),
            None => prefs.len(),
        };

        for &school in &prefs[..better] {
            let has_room = held[school] < market.capacity(school);
            let outranks_someone =
                worst_rank[school].is_some_and(|w| table.rank(school, student) < w);
            if has_room || outranks_someone {
                return Some((student, school));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two students both ranking school 0 first; school 0 prefers student 1.
    fn market() -> Market {
        Market::new(
            vec![vec![0, 1], vec![0, 1]],
            vec![vec![1, 0], vec![0, 1]],
            vec![1, 1],
        )
        .unwrap()
    }

    #[test]
    fn test_stable_assignment_passes() {
        let assignment = Assignment::from_slots(vec![Some(1), Some(0)]);
        assert_eq!(audit(&market(), &assignment), Ok(()));
    }

    #[test]
    fn test_blocking_pair_detected() {
        // Student 1 wants school 0 and school 0 prefers it over student 0.
        let assignment = Assignment::from_slots(vec![Some(0), Some(1)]);
        assert_eq!(find_blocking_pair(&market(), &assignment), Some((1, 0)));
        assert_eq!(
            audit(&market(), &assignment),
            Err(Violation::BlockingPair { student: 1, school: 0 })
        );
    }

    #[test]
    fn test_free_seat_blocks_unassigned_student() {
        let assignment = Assignment::from_slots(vec![None, Some(0)]);
        assert_eq!(find_blocking_pair(&market(), &assignment), Some((0, 1)));
    }

    #[test]
    fn test_over_capacity() {
        let assignment = Assignment::from_slots(vec![Some(0), Some(0)]);
        assert_eq!(
            audit(&market(), &assignment),
            Err(Violation::OverCapacity { school: 0, held: 2, capacity: 1 })
        );
    }

    #[test]
    fn test_not_ranked() {
        let market =
            Market::new(vec![vec![0], vec![1]], vec![vec![0, 1], vec![0, 1]], vec![1, 1]).unwrap();
        let assignment = Assignment::from_slots(vec![Some(1), None]);
        assert_eq!(
            audit(&market, &assignment),
            Err(Violation::NotRanked { student: 0, school: 1 })
        );
    }

    #[test]
    fn test_length_and_unknown_school() {
        let short = Assignment::from_slots(vec![None]);
        assert_eq!(
            audit(&market(), &short),
            Err(Violation::LengthMismatch { expected: 2, actual: 1 })
        );

        let unknown = Assignment::from_slots(vec![Some(9), None]);
        assert_eq!(
            audit(&market(), &unknown),
            Err(Violation::UnknownSchool { student: 0, school: 9 })
        );
    }

    #[test]
    fn test_zero_capacity_school_never_blocks() {
        let market = Market::new(vec![vec![0]], vec![vec![0]], vec![0]).unwrap();
        let assignment = Assignment::from_slots(vec![None]);
        assert_eq!(audit(&market, &assignment), Ok(()));
    }
}
