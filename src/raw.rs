//! Signed-integer surface for foreign callers.
//!
//! Foreign runtimes hand over `i32` arrays: preference rows padded with a
//! negative terminator, rankings that may contain garbage, capacities that
//! may be negative, and an output buffer to fill. This module turns those
//! into a validated [`Market`] and writes the assignment back using
//! [`UNASSIGNED`](crate::UNASSIGNED) for students without a seat.
//!
//! On any error the output buffer is left exactly as it was.

use log::{debug, warn};

use crate::engine::MatchingEngine;
use crate::error::{MatchError, Result};
use crate::types::{Market, MatchReceipt, SchoolId, StudentId};

/// Run deferred acceptance over raw rows and fill `out`.
///
/// - `preferences[s]`: schools for student `s`, best first; the first
///   negative entry ends the list
/// - `rankings[c]`: permutation of all students for school `c`, best first
/// - `capacities[c]`: seats at school `c`, must be non-negative
/// - `out`: exactly one slot per student
///
/// ## Example
///
/// ```
/// use deferred_acceptance::raw::match_raw;
///
/// let mut out = [0; 2];
/// match_raw(
///     &[vec![1, 0, -1], vec![1, -1, -1]],
///     &[vec![0, 1], vec![1, 0]],
///     &[1, 1],
///     &mut out,
/// ).unwrap();
///
/// assert_eq!(out, [0, 1]);
/// ```
pub fn match_raw(
    preferences: &[Vec<i32>],
    rankings: &[Vec<i32>],
    capacities: &[i32],
    out: &mut [i32],
) -> Result<MatchReceipt> {
    match_raw_with(&MatchingEngine::new(), preferences, rankings, capacities, out)
}

/// [`match_raw`] with an explicit engine configuration.
pub fn match_raw_with(
    engine: &MatchingEngine,
    preferences: &[Vec<i32>],
    rankings: &[Vec<i32>],
    capacities: &[i32],
    out: &mut [i32],
) -> Result<MatchReceipt> {
    let market = match market_from_raw(engine, preferences, rankings, capacities) {
        Ok(market) => market,
        Err(err) => {
            warn!("rejecting raw market: {err}");
            return Err(err);
        }
    };

    if out.len() != market.num_students() {
        return Err(MatchError::OutputLength {
            expected: market.num_students(),
            actual: out.len(),
        });
    }

    let result = engine.run(&market);
    result.assignment.write_raw(out);

    let receipt = result.receipt();
    if !receipt.is_fully_assigned() {
        debug!("{} of {} students left unassigned", receipt.unassigned, receipt.num_students);
    }
    Ok(receipt)
}

fn market_from_raw(
    engine: &MatchingEngine,
    preferences: &[Vec<i32>],
    rankings: &[Vec<i32>],
    capacities: &[i32],
) -> Result<Market> {
    let capacities = capacities
        .iter()
        .enumerate()
        .map(|(school, &capacity)| {
            usize::try_from(capacity).map_err(|_| MatchError::NegativeCapacity {
                school,
                capacity: capacity.into(),
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    let preferences: Vec<Vec<SchoolId>> = preferences
        .iter()
        .map(|row| {
            row.iter()
                .take_while(|&&school| school >= 0)
                .map(|&school| school as SchoolId)
                .collect()
        })
        .collect();

    let rankings = rankings
        .iter()
        .enumerate()
        .map(|(school, row)| {
            row.iter()
                .map(|&student| {
                    usize::try_from(student).map_err(|_| MatchError::RankingOutOfRange {
                        school,
                        student: student.into(),
                    })
                })
                .collect::<Result<Vec<StudentId>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Market::with_config(preferences, rankings, capacities, engine.config())
}
