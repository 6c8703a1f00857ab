use serde::{Deserialize, Serialize};

use crate::cycle::BillingCycle;
use crate::decimal::{Money, Rate};
use crate::interest::monthly_interest_penalty;
use crate::projection::{project_cycle, LineItem};
use crate::records::{Charge, ChargeKind, Payment};

/// everything one cycle did to a card's balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleBreakdown {
    pub cycle: BillingCycle,
    /// balance carried in from the previous cycle
    pub balance_in: Money,
    pub charges_total: Money,
    pub interest_penalty: Money,
    pub payments_total: Money,
    /// balance_in + charges + interest/penalty, before payments
    pub total_due: Money,
    /// balance carried to the next cycle; negative on overpayment
    pub balance_out: Money,
    pub items: Vec<LineItem>,
}

impl CycleBreakdown {
    fn empty(cycle: BillingCycle) -> Self {
        Self {
            cycle,
            balance_in: Money::ZERO,
            charges_total: Money::ZERO,
            interest_penalty: Money::ZERO,
            payments_total: Money::ZERO,
            total_due: Money::ZERO,
            balance_out: Money::ZERO,
            items: Vec::new(),
        }
    }

    /// whether the cycle moved money at all; inactive cards are dropped from
    /// reports based on this
    pub fn has_activity(&self) -> bool {
        !self.total_due.is_zero() || !self.payments_total.is_zero() || !self.items.is_empty()
    }

    /// sum of this cycle's items of one charge kind
    pub fn total_by_kind(&self, kind: ChargeKind) -> Money {
        self.items
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| item.amount)
            .sum::<Money>()
            .round_dp(2)
    }
}

/// Month-by-month balance replay for one person on one card.
///
/// The walk starts at the earliest cycle derivable from the card's history
/// and visits every cycle through the target with no skipping, since a
/// carried balance accrues interest even in months without activity. Cost is
/// linear in the number of cycles between first activity and the target;
/// open-ended recurring charges put no upper bound on that span.
pub struct BalanceSimulator<'a> {
    interest_rate: Rate,
    penalty_rate: Rate,
    closing_day: u8,
    charges: &'a [Charge],
    payments: &'a [Payment],
}

impl<'a> BalanceSimulator<'a> {
    pub fn new(
        interest_rate: Rate,
        penalty_rate: Rate,
        closing_day: u8,
        charges: &'a [Charge],
        payments: &'a [Payment],
    ) -> Self {
        Self {
            interest_rate,
            penalty_rate,
            closing_day,
            charges,
            payments,
        }
    }

    /// replay history and return the target cycle's breakdown
    pub fn run_through(&self, target: BillingCycle) -> CycleBreakdown {
        let mut result = CycleBreakdown::empty(target);
        let mut balance_in = Money::ZERO;
        let mut cycle = self.earliest_cycle().unwrap_or(target);

        while cycle <= target {
            let interest_penalty =
                monthly_interest_penalty(balance_in, self.interest_rate, self.penalty_rate);
            let items = project_cycle(self.charges, self.closing_day, cycle);
            let charges_total = items.iter().map(|item| item.amount).sum::<Money>().round_dp(2);
            let payments_total = self.payments_in(cycle);
            let total_due = balance_in + charges_total + interest_penalty;
            let balance_out = (total_due - payments_total).round_dp(2);

            if cycle == target {
                result = CycleBreakdown {
                    cycle,
                    balance_in,
                    charges_total,
                    interest_penalty,
                    payments_total,
                    total_due,
                    balance_out,
                    items,
                };
            }

            balance_in = balance_out;
            cycle = cycle.next();
        }

        result
    }

    /// earliest cycle with known activity, from either side of the ledger
    fn earliest_cycle(&self) -> Option<BillingCycle> {
        let first_charge = self
            .charges
            .iter()
            .map(|charge| charge.first_cycle(self.closing_day))
            .min();
        let first_payment = self.payments.iter().map(Payment::cycle).min();

        match (first_charge, first_payment) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn payments_in(&self, cycle: BillingCycle) -> Money {
        self.payments
            .iter()
            .filter(|payment| payment.cycle() == cycle)
            .map(|payment| payment.amount)
            .sum::<Money>()
            .round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn pct(p: rust_decimal::Decimal) -> Rate {
        Rate::from_percentage(p)
    }

    fn one_off(amount_cents: i64, purchase_date: NaiveDate) -> Charge {
        Charge {
            id: Uuid::new_v4(),
            person_id: Uuid::new_v4(),
            card_id: Uuid::new_v4(),
            description: "compra".to_string(),
            kind: ChargeKind::OneOff,
            total_amount: Money::from_cents(amount_cents),
            installment_count: 1,
            purchase_date,
            recurring_end_date: None,
            note: None,
            active: true,
        }
    }

    fn payment(amount_cents: i64, payment_date: NaiveDate) -> Payment {
        Payment {
            id: Uuid::new_v4(),
            person_id: Uuid::new_v4(),
            card_id: Uuid::new_v4(),
            payment_date,
            amount: Money::from_cents(amount_cents),
            note: None,
        }
    }

    #[test]
    fn test_carried_balance_accrues_and_absorbs_payment() {
        // 1000.00 billed in january; february carries it at 2% + 1% with a
        // 200.00 payment and no new charges
        let charges = vec![one_off(100_000, date(2026, 1, 5))];
        let payments = vec![payment(20_000, date(2026, 2, 10))];
        let sim = BalanceSimulator::new(pct(dec!(2)), pct(dec!(1)), 10, &charges, &payments);

        let breakdown = sim.run_through(BillingCycle::new(2026, 2));

        assert_eq!(breakdown.balance_in, Money::from_cents(100_000));
        assert_eq!(breakdown.charges_total, Money::ZERO);
        assert_eq!(breakdown.interest_penalty, Money::from_cents(3_000));
        assert_eq!(breakdown.total_due, Money::from_cents(103_000));
        assert_eq!(breakdown.payments_total, Money::from_cents(20_000));
        assert_eq!(breakdown.balance_out, Money::from_cents(83_000));
        assert!(breakdown.items.is_empty());
    }

    #[test]
    fn test_zero_rates_accumulate_plain_charges() {
        let charges = vec![
            one_off(10_000, date(2026, 1, 5)),
            one_off(25_000, date(2026, 2, 5)),
        ];
        let sim = BalanceSimulator::new(Rate::ZERO, Rate::ZERO, 10, &charges, &[]);

        let breakdown = sim.run_through(BillingCycle::new(2026, 3));

        assert_eq!(breakdown.balance_in, Money::from_cents(35_000));
        assert_eq!(breakdown.interest_penalty, Money::ZERO);
        assert_eq!(breakdown.balance_out, Money::from_cents(35_000));
    }

    #[test]
    fn test_accrual_compounds_across_idle_months() {
        // nothing happens in february or march, but the carried balance keeps
        // compounding: 1000 -> 1030 -> 1060.90
        let charges = vec![one_off(100_000, date(2026, 1, 5))];
        let sim = BalanceSimulator::new(pct(dec!(2)), pct(dec!(1)), 10, &charges, &[]);

        let breakdown = sim.run_through(BillingCycle::new(2026, 3));

        assert_eq!(breakdown.balance_in, Money::from_cents(103_000));
        assert_eq!(breakdown.interest_penalty, Money::from_cents(3_090));
        assert_eq!(breakdown.balance_out, Money::from_cents(106_090));
    }

    #[test]
    fn test_overpaid_balance_carries_negative_without_accrual() {
        let charges = vec![one_off(10_000, date(2026, 1, 5))];
        let payments = vec![payment(50_000, date(2026, 1, 20))];
        let sim = BalanceSimulator::new(pct(dec!(5)), pct(dec!(5)), 10, &charges, &payments);

        let january = sim.run_through(BillingCycle::new(2026, 1));
        assert_eq!(january.balance_out, Money::from_cents(-40_000));

        // the credit neither shrinks nor grows while negative
        let march = sim.run_through(BillingCycle::new(2026, 3));
        assert_eq!(march.balance_in, Money::from_cents(-40_000));
        assert_eq!(march.interest_penalty, Money::ZERO);
        assert_eq!(march.balance_out, Money::from_cents(-40_000));
    }

    #[test]
    fn test_charges_restore_positive_balance_after_credit() {
        let charges = vec![
            one_off(10_000, date(2026, 1, 5)),
            one_off(60_000, date(2026, 3, 5)),
        ];
        let payments = vec![payment(50_000, date(2026, 1, 20))];
        let sim = BalanceSimulator::new(pct(dec!(2)), pct(dec!(1)), 10, &charges, &payments);

        let march = sim.run_through(BillingCycle::new(2026, 3));
        assert_eq!(march.balance_in, Money::from_cents(-40_000));
        assert_eq!(march.interest_penalty, Money::ZERO);
        assert_eq!(march.balance_out, Money::from_cents(20_000));

        // accrual resumes only once the carried balance is positive again
        let april = sim.run_through(BillingCycle::new(2026, 4));
        assert_eq!(april.interest_penalty, Money::from_cents(600));
    }

    #[test]
    fn test_payment_month_sets_its_cycle() {
        // paid on the 31st, still a january payment regardless of closing day
        let charges = vec![one_off(30_000, date(2026, 1, 5))];
        let payments = vec![payment(30_000, date(2026, 1, 31))];
        let sim = BalanceSimulator::new(pct(dec!(2)), pct(dec!(1)), 10, &charges, &payments);

        let january = sim.run_through(BillingCycle::new(2026, 1));
        assert_eq!(january.payments_total, Money::from_cents(30_000));
        assert_eq!(january.balance_out, Money::ZERO);
    }

    #[test]
    fn test_payment_only_history_starts_simulation() {
        let payments = vec![payment(15_000, date(2026, 2, 10))];
        let sim = BalanceSimulator::new(pct(dec!(2)), pct(dec!(1)), 10, &[], &payments);

        let breakdown = sim.run_through(BillingCycle::new(2026, 2));
        assert_eq!(breakdown.payments_total, Money::from_cents(15_000));
        assert_eq!(breakdown.balance_out, Money::from_cents(-15_000));
        assert!(breakdown.has_activity());
    }

    #[test]
    fn test_history_after_target_produces_empty_breakdown() {
        let charges = vec![one_off(10_000, date(2026, 6, 5))];
        let sim = BalanceSimulator::new(pct(dec!(2)), pct(dec!(1)), 10, &charges, &[]);

        let breakdown = sim.run_through(BillingCycle::new(2026, 2));
        assert!(!breakdown.has_activity());
        assert_eq!(breakdown.balance_out, Money::ZERO);
    }

    #[test]
    fn test_no_history_produces_empty_breakdown() {
        let sim = BalanceSimulator::new(pct(dec!(2)), pct(dec!(1)), 10, &[], &[]);
        let breakdown = sim.run_through(BillingCycle::new(2026, 2));
        assert!(!breakdown.has_activity());
    }

    #[test]
    fn test_totals_by_kind_split_target_items() {
        let mut plan = one_off(120_000, date(2026, 1, 5));
        plan.kind = ChargeKind::Installment;
        plan.installment_count = 3;
        let mut fixed = one_off(5_000, date(2026, 1, 5));
        fixed.kind = ChargeKind::RecurringFixed;
        let single = one_off(20_000, date(2026, 1, 5));

        let charges = vec![plan, fixed, single];
        let sim = BalanceSimulator::new(Rate::ZERO, Rate::ZERO, 10, &charges, &[]);

        let january = sim.run_through(BillingCycle::new(2026, 1));
        assert_eq!(january.total_by_kind(ChargeKind::OneOff), Money::from_cents(20_000));
        assert_eq!(january.total_by_kind(ChargeKind::Installment), Money::from_cents(40_000));
        assert_eq!(january.total_by_kind(ChargeKind::RecurringFixed), Money::from_cents(5_000));
        assert_eq!(january.charges_total, Money::from_cents(65_000));
    }
}
