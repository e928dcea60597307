//! C ABI entry point.
//!
//! ```c
//! int32_t da_match(const int32_t *preferences, size_t preference_stride,
//!                  const int32_t *rankings,
//!                  const int32_t *capacities,
//!                  int32_t *out,
//!                  size_t n_students, size_t n_schools);
//! ```
//!
//! Arrays are row-major. Preference rows are `preference_stride` wide and
//! padded with a negative terminator; ranking rows are `n_students` wide.
//! Returns `0` on success or a negative [`ErrorKind::code`](crate::ErrorKind::code).

use std::{mem, slice};

use log::warn;

use crate::error::{MatchError, Result};
use crate::raw;

/// Match students to schools over raw C arrays.
///
/// # Safety
///
/// Unless the call fails early because `n_students` or `n_schools` is zero,
/// a pointer is null, or an array size overflows, the caller guarantees:
///
/// - `preferences` points to `n_students * preference_stride` readable `i32`s
/// - `rankings` points to `n_schools * n_students` readable `i32`s
/// - `capacities` points to `n_schools` readable `i32`s
/// - `out` points to `n_students` writable `i32`s not aliased by the inputs
#[no_mangle]
pub unsafe extern "C" fn da_match(
    preferences: *const i32,
    preference_stride: usize,
    rankings: *const i32,
    capacities: *const i32,
    out: *mut i32,
    n_students: usize,
    n_schools: usize,
) -> i32 {
    let status = da_match_inner(
        preferences,
        preference_stride,
        rankings,
        capacities,
        out,
        n_students,
        n_schools,
    );

    match status {
        Ok(()) => 0,
        Err(err) => {
            warn!("da_match failed: {err}");
            err.kind().code()
        }
    }
}

unsafe fn da_match_inner(
    preferences: *const i32,
    preference_stride: usize,
    rankings: *const i32,
    capacities: *const i32,
    out: *mut i32,
    n_students: usize,
    n_schools: usize,
) -> Result<()> {
    if n_students == 0 {
        return Err(MatchError::NoStudents);
    }
    if n_schools == 0 {
        return Err(MatchError::NoSchools);
    }
    for (name, is_null) in [
        ("preferences", preferences.is_null()),
        ("rankings", rankings.is_null()),
        ("capacities", capacities.is_null()),
        ("out", out.is_null()),
    ] {
        if is_null {
            return Err(MatchError::NullPointer(name));
        }
    }

    let preference_len = array_len("preferences", n_students, preference_stride)?;
    let ranking_len = array_len("rankings", n_schools, n_students)?;

    let preference_rows: Vec<Vec<i32>> = if preference_stride == 0 {
        vec![Vec::new(); n_students]
    } else {
        slice::from_raw_parts(preferences, preference_len)
            .chunks(preference_stride)
            .map(<[i32]>::to_vec)
            .collect()
    };
    let ranking_rows: Vec<Vec<i32>> = slice::from_raw_parts(rankings, ranking_len)
        .chunks(n_students)
        .map(<[i32]>::to_vec)
        .collect();
    let capacities = slice::from_raw_parts(capacities, n_schools);
    let out = slice::from_raw_parts_mut(out, n_students);

    raw::match_raw(&preference_rows, &ranking_rows, capacities, out).map(|_| ())
}

/// Element count of a `rows × cols` `i32` array, if its byte size fits in
/// `isize` as `slice::from_raw_parts` requires.
fn array_len(name: &'static str, rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .filter(|&len| len <= isize::MAX as usize / mem::size_of::<i32>())
        .ok_or(MatchError::DimensionOverflow(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_da_match_rectangular() {
        // Scenario with padded rows (stride 3).
        let preferences = [0, 1, 2, 1, 0, 2, 0, 2, 1, 2, 1, -1];
        let rankings = [2, 1, 3, 0, 0, 2, 1, 3, 1, 2, 0, 3];
        let capacities = [1, 1, 1];
        let mut out = [0i32; 4];

        let status = unsafe {
            da_match(
                preferences.as_ptr(),
                3,
                rankings.as_ptr(),
                capacities.as_ptr(),
                out.as_mut_ptr(),
                4,
                3,
            )
        };

        assert_eq!(status, 0);
        assert_eq!(out, [1, 2, 0, -1]);
    }

    #[test]
    fn test_da_match_zero_stride() {
        let rankings = [0, 1];
        let capacities = [1];
        let mut out = [7i32; 2];
        let dangling = [0i32; 0];

        let status = unsafe {
            da_match(
                dangling.as_ptr(),
                0,
                rankings.as_ptr(),
                capacities.as_ptr(),
                out.as_mut_ptr(),
                2,
                1,
            )
        };

        assert_eq!(status, 0);
        assert_eq!(out, [-1, -1]);
    }

    #[test]
    fn test_da_match_error_codes() {
        let preferences = [0];
        let rankings = [0];
        let negative = [-1];
        let mut out = [4i32; 1];

        let call = |capacities: *const i32, out: &mut [i32], n_students: usize| unsafe {
            da_match(
                preferences.as_ptr(),
                1,
                rankings.as_ptr(),
                capacities,
                out.as_mut_ptr(),
                n_students,
                1,
            )
        };

        assert_eq!(call(negative.as_ptr(), &mut out, 1), ErrorKind::NegativeCapacity.code());
        assert_eq!(out, [4]);

        assert_eq!(call(std::ptr::null(), &mut out, 1), ErrorKind::NullPointer.code());
        assert_eq!(call(negative.as_ptr(), &mut out, 0), ErrorKind::EmptyMarket.code());
    }

    #[test]
    fn test_da_match_oversized_dimensions() {
        let preferences = [0, -1, -1, -1];
        let rankings = [0];
        let capacities = [1];
        let mut out = [9i32; 1];

        // n_students * stride wraps around usize.
        let status = unsafe {
            da_match(
                preferences.as_ptr(),
                4,
                rankings.as_ptr(),
                capacities.as_ptr(),
                out.as_mut_ptr(),
                usize::MAX / 2 + 1,
                1,
            )
        };
        assert_eq!(status, ErrorKind::ShapeMismatch.code());
        assert_eq!(out, [9]);

        // Zero stride skips the preference array; the ranking array is still too large.
        let status = unsafe {
            da_match(
                preferences.as_ptr(),
                0,
                rankings.as_ptr(),
                capacities.as_ptr(),
                out.as_mut_ptr(),
                isize::MAX as usize,
                1,
            )
        };
        assert_eq!(status, ErrorKind::ShapeMismatch.code());
        assert_eq!(out, [9]);
    }

    #[test]
    fn test_array_len_limits() {
        assert_eq!(array_len("rankings", 3, 4), Ok(12));
        assert_eq!(array_len("preferences", 5, 0), Ok(0));
        assert_eq!(
            array_len("preferences", usize::MAX, 2),
            Err(MatchError::DimensionOverflow("preferences"))
        );
        assert_eq!(
            array_len("rankings", isize::MAX as usize / 4 + 1, 1),
            Err(MatchError::DimensionOverflow("rankings"))
        );
    }
}
