use crate::decimal::{Money, Rate};

/// Interest plus late penalty accrued on a carried balance for one cycle.
///
/// Both rates apply to the same base and only when the balance entering the
/// cycle is strictly positive: a settled or overpaid balance accrues nothing.
/// Each component is computed at 8-decimal precision and the sum is rounded
/// to statement scale.
pub fn monthly_interest_penalty(balance_in: Money, interest_rate: Rate, penalty_rate: Rate) -> Money {
    if !balance_in.is_positive() {
        return Money::ZERO;
    }

    let interest = balance_in.percentage(interest_rate);
    let penalty = balance_in.percentage(penalty_rate);

    (interest + penalty).round_dp(2)
}
