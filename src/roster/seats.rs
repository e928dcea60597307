//! Tentative roster of one school.
//!
//! ## Design
//!
//! A `Roster` holds the students a school is currently keeping, in the order
//! they were admitted. It never holds more than the school's capacity.
//!
//! - Admission appends at the back
//! - Displacement removes the worst-ranked student and appends the newcomer
//! - Finding the worst student is a linear scan over at most `capacity` entries

use crate::roster::PriorityTable;
use crate::types::{SchoolId, StudentId};

/// The worst-ranked student currently held, with its roster position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Worst {
    pub position: usize,
    pub student: StudentId,
    pub rank: usize,
}

/// Students tentatively held by a school.
#[derive(Debug, Clone)]
pub struct Roster {
    school: SchoolId,
    capacity: usize,
    students: Vec<StudentId>,
}

impl Roster {
    pub fn new(school: SchoolId, capacity: usize) -> Self {
        Self {
            school,
            capacity,
            students: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn school(&self) -> SchoolId {
        self.school
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// A zero-capacity roster never has room.
    #[inline]
    pub fn has_room(&self) -> bool {
        self.students.len() < self.capacity
    }

    /// Students in admission order.
    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn contains(&self, student: StudentId) -> bool {
        self.students.contains(&student)
    }

    /// Admit `student` into a free seat.
    ///
    /// # Panics
    ///
    /// Panics if the roster is full. Callers check [`has_room`](Self::has_room)
    /// first; overflowing a roster is an engine defect.
    pub fn admit(&mut self, student: StudentId) {
        assert!(
            self.has_room(),
            "school {} roster overflow: capacity {}",
            self.school,
            self.capacity
        );
        debug_assert!(!self.contains(student), "student {student} admitted twice");
        self.students.push(student);
    }

    /// The held student with the numerically largest rank, if any.
    pub fn worst(&self, table: &PriorityTable) -> Option<Worst> {
        self.students
            .iter()
            .enumerate()
            .map(|(position, &student)| Worst {
                position,
                student,
                rank: table.rank(self.school, student),
            })
            .max_by_key(|w| w.rank)
    }

    /// Drop the student at `position` and admit `student` at the back.
    ///
    /// Returns the displaced student.
    pub fn replace(&mut self, position: usize, student: StudentId) -> StudentId {
        let evicted = self.students.remove(position);
        self.students.push(student);
        evicted
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
