/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Prime factorisation and divisor sets.
//!
//! Every frame-size candidate is a divisor of some task period.  Divisors are
//! generated from the prime-factor multiset of the period rather than by
//! scanning `1..=n`, so the cost is bounded by the number of factors.

use std::collections::BTreeSet;

/// Trial-division factorisation of `n`.
///
/// Returns the prime factors in ascending order **with repetition**
/// (`12 → [2, 2, 3]`).  `0` and `1` have no prime factors.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }

    let mut i = 3u64;
    // `i <= n / i` is `i * i <= n` without the overflow
    while i <= n / i {
        while n % i == 0 {
            factors.push(i);
            n /= i;
        }
        i += 2;
    }

    if n > 2 {
        factors.push(n);
    }
    factors
}

/// Every positive divisor of `n`, as an ordered set.
///
/// Built as the set of products of all sub-multisets of
/// [`prime_factors(n)`](prime_factors), the empty one included (product `1`).
/// Repeated primes produce duplicate products; the `BTreeSet` absorbs them
/// and keeps iteration order stable.
///
/// `divisors(0)` is `{1}` by the same construction.
pub fn divisors(n: u64) -> BTreeSet<u64> {
    let mut out = BTreeSet::from([1u64]);
    for p in prime_factors(n) {
        let extended: Vec<u64> = out.iter().map(|d| d * p).collect();
        out.extend(extended);
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
