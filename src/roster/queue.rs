//! FIFO worklist of free students.
//!
//! Entries are plain student indices into the market, so an evicted student
//! re-enters the queue without copying its preference list. The proposal
//! loop peeks the front, decides, and only then pops.

use std::collections::VecDeque;

use crate::types::StudentId;

#[derive(Debug, Clone, Default)]
pub struct FreeQueue {
    students: VecDeque<StudentId>,
}

impl FreeQueue {
    /// Queue every student in index order.
    pub fn seeded(num_students: usize) -> Self {
        Self {
            students: (0..num_students).collect(),
        }
    }

    #[inline]
    pub fn front(&self) -> Option<StudentId> {
        self.students.front().copied()
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<StudentId> {
        self.students.pop_front()
    }

    #[inline]
    pub fn push_back(&mut self, student: StudentId) {
        self.students.push_back(student);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
