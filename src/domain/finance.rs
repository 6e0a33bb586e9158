// src/domain/finance.rs
//
// The valuation / rent / yield relationship. Seeding and the mock synthesizer
// both go through these functions so the three figures always agree.

/// Rounds to one decimal place, the precision yields are stored at.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Annual rent as a percentage of valuation, rounded to one decimal.
/// A non-positive valuation has no meaningful yield and reports 0.0.
pub fn rental_yield(valuation_gbp: i64, rent_per_month: i64) -> f64 {
    if valuation_gbp <= 0 {
        return 0.0;
    }
    round_to_tenth((rent_per_month as f64 * 12.0) / valuation_gbp as f64 * 100.0)
}

/// Monthly rent implied by a valuation and a yield percentage.
pub fn monthly_rent(valuation_gbp: i64, rental_yield: f64) -> i64 {
    (valuation_gbp as f64 * rental_yield / 100.0 / 12.0).round() as i64
}
