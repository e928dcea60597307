//! Working state of a single matching run.
//!
//! ## Components
//!
//! - [`PriorityTable`]: inverted school rankings for O(1) comparisons
//! - [`Roster`]: students tentatively held by one school
//! - [`FreeQueue`]: FIFO of students still proposing
//!
//! All of it is created fresh by each call to
//! [`MatchingEngine::run`](crate::MatchingEngine::run) and dropped when the
//! assignment is extracted; nothing here is shared between runs.
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Build priority table | O(schools × students) |
//! | Rank lookup | O(1) |
//! | Admit | O(1) |
//! | Find worst held student | O(capacity) |
//! | Displace | O(capacity) |

pub mod priority;
pub mod queue;
pub mod seats;

pub use priority::PriorityTable;
pub use queue::FreeQueue;
pub use seats::{Roster, Worst};
