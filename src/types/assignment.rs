//! The engine's output: one school (or none) per student.
//!
//! ## Raw Encoding
//!
//! Across the foreign-call boundary an assignment is an `i32` buffer of
//! length `num_students`: a school index, or [`UNASSIGNED`] (`-1`).
//! The same encoding, little-endian, is what [`Assignment::digest`] hashes.

use sha2::{Digest, Sha256};

use crate::types::market::MAX_SCHOOLS;
use crate::types::{SchoolId, StudentId};

/// Raw sentinel for a student without a school.
pub const UNASSIGNED: i32 = -1;

/// Final assignment of students to schools.
///
/// ## Example
///
/// ```
/// use deferred_acceptance::Assignment;
///
/// let assignment = Assignment::from_slots(vec![Some(1), None, Some(0)]);
///
/// assert_eq!(assignment.school_of(0), Some(1));
/// assert!(!assignment.is_assigned(1));
/// assert_eq!(assignment.to_raw(), vec![1, -1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Assignment {
    slots: Vec<Option<SchoolId>>,
}

impl Assignment {
    /// Every student unassigned.
    pub fn unassigned_for(num_students: usize) -> Self {
        Self {
            slots: vec![None; num_students],
        }
    }

    pub fn from_slots(slots: Vec<Option<SchoolId>>) -> Self {
        Self { slots }
    }

    pub(crate) fn assign(&mut self, student: StudentId, school: SchoolId) {
        self.slots[student] = Some(school);
    }

    /// Number of students covered (assigned or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn school_of(&self, student: StudentId) -> Option<SchoolId> {
        self.slots.get(student).copied().flatten()
    }

    #[inline]
    pub fn is_assigned(&self, student: StudentId) -> bool {
        self.school_of(student).is_some()
    }

    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.len() - self.assigned_count()
    }

    /// Students left without a school, in index order.
    pub fn unassigned(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(student, slot)| slot.is_none().then_some(student))
    }

    /// Students placed at `school`, in index order.
    pub fn students_at(&self, school: SchoolId) -> impl Iterator<Item = StudentId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(student, slot)| (*slot == Some(school)).then_some(student))
    }

    /// `(student, school)` pairs, `None` for unassigned students.
    pub fn iter(&self) -> impl Iterator<Item = (StudentId, Option<SchoolId>)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    /// Encode as a raw `i32` vector with [`UNASSIGNED`] for missing schools.
    pub fn to_raw(&self) -> Vec<i32> {
        self.slots.iter().map(|slot| raw_slot(*slot)).collect()
    }

    /// Fill a caller-supplied buffer of exactly `len()` slots.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != self.len()`; callers validate the buffer first.
    pub fn write_raw(&self, out: &mut [i32]) {
        assert_eq!(out.len(), self.slots.len(), "output buffer length mismatch");
        for (dst, slot) in out.iter_mut().zip(&self.slots) {
            *dst = raw_slot(*slot);
        }
    }

    /// SHA-256 over the little-endian raw encoding.
    ///
    /// Identical assignments always produce identical roots.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for slot in &self.slots {
            hasher.update(raw_slot(*slot).to_le_bytes());
        }
        hasher.finalize().into()
    }
}

/// Markets hold at most `MAX_SCHOOLS` schools, so every id converts losslessly.
#[inline]
fn raw_slot(slot: Option<SchoolId>) -> i32 {
    match slot {
        Some(school) => {
            debug_assert!(school < MAX_SCHOOLS);
            school as i32
        }
        None => UNASSIGNED,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_for() {
        let assignment = Assignment::unassigned_for(3);
        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.assigned_count(), 0);
        assert_eq!(assignment.unassigned().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(assignment.to_raw(), vec![UNASSIGNED; 3]);
    }

    #[test]
    fn test_largest_school_id_encodes_losslessly() {
        let assignment = Assignment::from_slots(vec![Some(MAX_SCHOOLS - 1), None]);
        assert_eq!(assignment.to_raw(), vec![i32::MAX - 1, UNASSIGNED]);
    }

    #[test]
    fn test_queries() {
        let mut assignment = Assignment::unassigned_for(4);
        assignment.assign(0, 2);
        assignment.assign(3, 2);
        assignment.assign(1, 0);

        assert_eq!(assignment.school_of(3), Some(2));
        assert_eq!(assignment.school_of(2), None);
        assert_eq!(assignment.school_of(99), None);
        assert_eq!(assignment.assigned_count(), 3);
        assert_eq!(assignment.unassigned_count(), 1);
        assert_eq!(assignment.students_at(2).collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(assignment.students_at(1).count(), 0);
    }

    #[test]
    fn test_write_raw() {
        let assignment = Assignment::from_slots(vec![None, Some(4)]);
        let mut out = [7, 7];
        assignment.write_raw(&mut out);
        assert_eq!(out, [-1, 4]);
    }

    #[test]
    #[should_panic(expected = "output buffer length mismatch")]
    fn test_write_raw_wrong_length() {
        let assignment = Assignment::from_slots(vec![None, Some(4)]);
        let mut out = [0; 3];
        assignment.write_raw(&mut out);
    }

    #[test]
    fn test_digest_deterministic() {
        let a = Assignment::from_slots(vec![Some(1), None, Some(0)]);
        let b = Assignment::from_slots(vec![Some(1), None, Some(0)]);
        let c = Assignment::from_slots(vec![Some(0), None, Some(1)]);

        assert_eq!(a.digest(), b.digest(), "digest must be deterministic");
        assert_ne!(a.digest(), c.digest());
    }
}
