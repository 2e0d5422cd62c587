/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Integer helpers shared by the hyperperiod, frame-bound and placement code.

use super::HyperperiodError;

/// Binary (Stein) GCD.  `gcd(0, n) == n`, `gcd(0, 0) == 0`.
pub fn gcd(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a | b;
    }

    let shift = (a | b).trailing_zeros();
    let mut a = a >> a.trailing_zeros();
    let mut b = b;
    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            return a << shift;
        }
    }
}

/// LCM, or [`HyperperiodError::Overflow`] when it does not fit in `u64`.
///
/// `lcm(0, n) == 0`.  The product is formed in `u128`, so the overflow check
/// is a plain narrowing conversion.
pub fn lcm(a: u64, b: u64) -> Result<u64, HyperperiodError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    let wide = u128::from(a / gcd(a, b)) * u128::from(b);
    u64::try_from(wide).map_err(|_| HyperperiodError::Overflow { a, b })
}

/// LCM of every element; `Ok(0)` for an empty slice.
pub fn lcm_of_slice(periods: &[u64]) -> Result<u64, HyperperiodError> {
    let Some((&first, rest)) = periods.split_first() else {
        return Ok(0);
    };
    rest.iter().try_fold(first, |acc, &p| lcm(acc, p))
}

/// `ceil(a / b)` for `b > 0`.
pub fn div_ceil(a: u64, b: u64) -> u64 {
    a / b + u64::from(a % b != 0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
