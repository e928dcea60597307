//! Inverted priority rankings.
//!
//! Schools supply their priorities as a best-first list of students. The
//! proposal loop instead needs "what rank does student `s` hold at school
//! `c`", so every ranking is inverted once into a flat
//! `num_schools × num_students` table before matching starts.
//!
//! ```text
//! ranking[c]       = [2, 0, 1]   // student 2 is best at school c
//! priority_rank[c] = [1, 2, 0]   // student 0 -> rank 1, 1 -> 2, 2 -> 0
//! ```

use crate::types::{Market, SchoolId, StudentId};

/// O(1) priority-rank lookup for every (school, student) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    /// Row-major: `ranks[school * num_students + student]`
    ranks: Vec<usize>,
    num_students: usize,
}

impl PriorityTable {
    /// Invert every school's ranking.
    ///
    /// Relies on the market invariant that each ranking is a permutation of
    /// all students, so every cell is written exactly once.
    pub fn build(market: &Market) -> Self {
        let num_students = market.num_students();
        let mut ranks = vec![0; market.num_schools() * num_students];

        for (school, row) in market.schools().iter().zip(ranks.chunks_mut(num_students.max(1))) {
            for (rank, &student) in school.ranking.iter().enumerate() {
                row[student] = rank;
            }
        }

        Self { ranks, num_students }
    }

    /// Rank of `student` at `school`; lower is more preferred.
    #[inline]
    pub fn rank(&self, school: SchoolId, student: StudentId) -> usize {
        self.ranks[school * self.num_students + student]
    }

    /// True if `school` strictly prefers `a` over `b`.
    #[inline]
    pub fn prefers(&self, school: SchoolId, a: StudentId, b: StudentId) -> bool {
        self.rank(school, a) < self.rank(school, b)
    }
}
