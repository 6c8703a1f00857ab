use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cycle::BillingCycle;
use crate::decimal::Money;
use crate::records::{Charge, ChargeKind};

/// label a recurring charge carries instead of an installment counter
pub const RECURRING_LABEL: &str = "FIXO";

/// single line of a cycle's statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub kind: ChargeKind,
    /// `1/1` for one-off, `n/total` for installments, `FIXO` for recurring
    pub installment_label: String,
    pub amount: Money,
    pub note: Option<String>,
}

/// Line items a card's charge history bills into one cycle.
///
/// One-off charges appear only in their first cycle, installment plans in the
/// `installment_count` cycles starting there, and recurring charges in every
/// cycle through the one containing their end date.
pub fn project_cycle(charges: &[Charge], closing_day: u8, cycle: BillingCycle) -> Vec<LineItem> {
    let mut items = Vec::new();

    for charge in charges {
        let first_cycle = charge.first_cycle(closing_day);

        match charge.kind {
            ChargeKind::OneOff => {
                if cycle == first_cycle {
                    items.push(LineItem {
                        description: charge.description.clone(),
                        kind: ChargeKind::OneOff,
                        installment_label: "1/1".to_string(),
                        amount: charge.total_amount,
                        note: charge.note.clone(),
                    });
                }
            }
            ChargeKind::Installment => {
                let elapsed = cycle.months_since(first_cycle);
                if elapsed >= 0 && elapsed < i64::from(charge.installment_count) {
                    let number = elapsed as u32 + 1;
                    items.push(LineItem {
                        description: charge.description.clone(),
                        kind: ChargeKind::Installment,
                        installment_label: format!("{}/{}", number, charge.installment_count),
                        amount: installment_amount(
                            charge.total_amount,
                            charge.installment_count,
                            number,
                        ),
                        note: charge.note.clone(),
                    });
                }
            }
            ChargeKind::RecurringFixed => {
                let started = cycle >= first_cycle;
                let within_end = charge
                    .recurring_end_date
                    .map(|end| cycle <= BillingCycle::from_date(end))
                    .unwrap_or(true);

                if started && within_end {
                    items.push(LineItem {
                        description: charge.description.clone(),
                        kind: ChargeKind::RecurringFixed,
                        installment_label: RECURRING_LABEL.to_string(),
                        amount: charge.total_amount,
                        note: charge.note.clone(),
                    });
                }
            }
        }
    }

    items
}

/// Installment value with the rounding remainder concentrated in the last
/// installment, so the series always sums back to the charge total.
fn installment_amount(total: Money, count: u32, number: u32) -> Money {
    let per_installment = (total / Decimal::from(count)).round_dp(2);

    if number < count {
        return per_installment;
    }

    (total - per_installment * Decimal::from(count - 1)).round_dp(2)
}
