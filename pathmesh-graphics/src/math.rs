//! Numeric helpers for curve evaluation.
//!
//! Binomial coefficients come from a Pascal's-triangle table that is grown
//! lazily on first use and shared behind a mutex.

use std::sync::{Mutex, PoisonError};

use crate::types::Scalar;

/// Rows of Pascal's triangle computed so far; row `n` has `n + 1` entries.
static BINOMIALS: Mutex<Vec<Vec<Scalar>>> = Mutex::new(Vec::new());

/// Binomial coefficient `C(n, k)`.
///
/// Returns 0 for `k > n`.
pub fn binomial(n: usize, k: usize) -> Scalar {
    if k > n {
        return 0.0;
    }
    let mut rows = BINOMIALS.lock().unwrap_or_else(PoisonError::into_inner);
    while rows.len() <= n {
        let s = rows.len();
        let row = (0..=s)
            .map(|i| {
                if i == 0 || i == s {
                    1.0
                } else {
                    rows[s - 1][i - 1] + rows[s - 1][i]
                }
            })
            .collect();
        rows.push(row);
    }
    rows[n][k]
}

/// Bernstein basis polynomial `b_{i,n}(t) = C(n, i) (1-t)^(n-i) t^i`.
pub fn bernstein(n: usize, i: usize, t: Scalar) -> Scalar {
    if i > n {
        return 0.0;
    }
    let (Ok(a), Ok(b)) = (i32::try_from(n - i), i32::try_from(i)) else {
        return 0.0;
    };
    binomial(n, i) * (1.0 - t).powi(a) * t.powi(b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
