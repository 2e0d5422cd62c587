/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Utilisation-bound feasibility test.
//!
//! # Theory
//! On one processor, a set of independent periodic tasks can only ever be
//! scheduled if its total utilisation does not exceed 1:
//!
//! $$U = \sum_{i=1}^{n} \frac{e_i}{p_i} \leq 1$$
//!
//! The condition is **necessary, not sufficient** for a cyclic executive: a
//! task set may pass it and still fail first-fit frame placement.
//!
//! # Exact arithmetic
//! `U` is accumulated as a reduced rational over arbitrary-precision
//! integers.  No hyperperiod is needed, so coprime periods whose LCM overflows
//! `u64` are still decided, and `U == 1` is feasible exactly.

use num_bigint::BigUint;
use num_rational::Ratio;
use num_traits::{One, Zero};

use crate::task::Task;

/// Exact utilisation sum, reduced.
pub type Utilization = Ratio<BigUint>;

// ── Public API ────────────────────────────────────────────────────────────────

/// `Σ e_i / p_i` as an exact fraction.  Tasks with a zero period contribute
/// nothing.
pub fn utilization(tasks: &[Task]) -> Utilization {
    tasks
        .iter()
        .filter(|t| t.period > 0)
        .map(|t| Ratio::new(BigUint::from(t.execution_time), BigUint::from(t.period)))
        .fold(Ratio::zero(), |acc, u| acc + u)
}

/// `true` if `Σ e_i / p_i <= 1`.
pub fn feasible(tasks: &[Task]) -> bool {
    utilization(tasks) <= Ratio::one()
}

/// Floating-point utilisation sum, for logging only.
pub fn total_utilization(tasks: &[Task]) -> f64 {
    tasks.iter().map(Task::utilization).sum()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
