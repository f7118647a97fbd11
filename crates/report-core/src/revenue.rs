//! Penalty-rate schedule and revenue range estimation.
//!
//! The schedule is external reference data (set fine amounts per km/h over
//! the limit), consumed as a constant lookup table. The top bracket carries
//! no scheduled rate: those fines are court determined.

use serde::Serialize;

// ── Rate schedule ─────────────────────────────────────────────────────────────

/// One speed-over-limit bracket of the penalty schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBracket {
    /// Lowest km/h over the limit covered by this bracket.
    pub min_over_kmh: u32,
    /// Highest km/h over the limit covered, `None` for the open-ended top
    /// bracket.
    pub max_over_kmh: Option<u32>,
    /// Set fine in dollars per km/h over, `None` when court determined.
    pub rate_per_km: Option<f64>,
}

/// The four-bracket schedule for automated speed enforcement charges.
pub const RATE_SCHEDULE: [RateBracket; 4] = [
    RateBracket {
        min_over_kmh: 1,
        max_over_kmh: Some(19),
        rate_per_km: Some(5.0),
    },
    RateBracket {
        min_over_kmh: 20,
        max_over_kmh: Some(29),
        rate_per_km: Some(7.5),
    },
    RateBracket {
        min_over_kmh: 30,
        max_over_kmh: Some(49),
        rate_per_km: Some(12.0),
    },
    RateBracket {
        min_over_kmh: 50,
        max_over_kmh: None,
        rate_per_km: None,
    },
];

// ── RevenueRange ──────────────────────────────────────────────────────────────

/// Closed-form lower and upper bound on fine revenue for a charge total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueRange {
    pub lower: f64,
    pub upper: f64,
}

/// Estimate the revenue range implied by `total_charges`.
///
/// Lower bound: every charge at the cheapest scheduled bracket's minimum
/// (rate × min km over). Upper bound: every charge at the dearest scheduled
/// bracket's maximum. The court-determined bracket is excluded from both
/// bounds since it has no scheduled rate.
pub fn estimate_range(total_charges: u64) -> RevenueRange {
    let scheduled = RATE_SCHEDULE
        .iter()
        .filter_map(|b| Some((b.rate_per_km?, b.min_over_kmh, b.max_over_kmh?)));

    let mut min_charge = f64::INFINITY;
    let mut max_charge: f64 = 0.0;
    for (rate, min_km, max_km) in scheduled {
        min_charge = min_charge.min(rate * f64::from(min_km));
        max_charge = max_charge.max(rate * f64::from(max_km));
    }
    if !min_charge.is_finite() {
        min_charge = 0.0;
    }

    RevenueRange {
        lower: min_charge * total_charges as f64,
        upper: max_charge * total_charges as f64,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
