use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cycle::BillingCycle;
use crate::decimal::Money;
use crate::masking::{mask_card_number, mask_document};
use crate::projection::LineItem;
use crate::records::{Card, CardId, Charge, ChargeKind, Payment, Person, PersonId};
use crate::simulation::BalanceSimulator;

/// monthly consolidation of one card for a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStatement {
    pub card_id: CardId,
    pub masked_number: String,
    pub brand: String,
    pub bank: String,
    pub due_date: NaiveDate,
    pub previous_balance: Money,
    pub one_off_total: Money,
    pub installment_total: Money,
    pub recurring_total: Money,
    pub charges_total: Money,
    pub interest_penalty: Money,
    pub payments_total: Money,
    pub total_due: Money,
    pub closing_balance: Money,
    pub items: Vec<LineItem>,
}

/// full monthly statement of a person across every card they touched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonStatement {
    pub person_id: PersonId,
    pub person_name: String,
    pub masked_document: String,
    pub cycle: BillingCycle,
    pub cards: Vec<CardStatement>,
    pub total_due: Money,
    pub total_paid: Money,
    pub total_balance: Money,
}

/// Assemble a person's statement for one cycle.
///
/// Takes the person's full charge and payment history (already loaded and
/// validated by the caller) plus the cards referenced by it, replays each
/// card's balance through the target cycle, and rolls the per-card summaries
/// into grand totals. Cards with no movement in the target cycle are left
/// out. Pure with respect to its inputs: identical arguments always produce
/// an identical statement.
pub fn person_statement(
    person: &Person,
    cards_by_id: &HashMap<CardId, Card>,
    charges: &[Charge],
    payments: &[Payment],
    cycle: BillingCycle,
) -> PersonStatement {
    info!(person_id = %person.id, %cycle, "generating monthly statement");

    // cards with any history for this person, resolved through the caller's
    // map; ids the caller did not supply are theirs to resolve and are skipped
    let mut seen: HashSet<CardId> = HashSet::new();
    let mut referenced: Vec<&Card> = charges
        .iter()
        .map(|charge| charge.card_id)
        .chain(payments.iter().map(|payment| payment.card_id))
        .filter(|id| seen.insert(*id))
        .filter_map(|id| cards_by_id.get(&id))
        .collect();
    referenced.sort_by(|a, b| a.bank.cmp(&b.bank));

    let cards: Vec<CardStatement> = referenced
        .into_iter()
        .filter_map(|card| card_statement(person, card, charges, payments, cycle))
        .collect();

    let total_due = cards.iter().map(|c| c.total_due).sum::<Money>().round_dp(2);
    let total_paid = cards.iter().map(|c| c.payments_total).sum::<Money>().round_dp(2);
    let total_balance = cards.iter().map(|c| c.closing_balance).sum::<Money>().round_dp(2);

    debug!(cards = cards.len(), %total_due, "statement assembled");

    PersonStatement {
        person_id: person.id,
        person_name: person.name.clone(),
        masked_document: mask_document(&person.document),
        cycle,
        cards,
        total_due,
        total_paid,
        total_balance,
    }
}

/// consolidate one card, or nothing when the target cycle had no movement
fn card_statement(
    person: &Person,
    card: &Card,
    charges: &[Charge],
    payments: &[Payment],
    cycle: BillingCycle,
) -> Option<CardStatement> {
    let card_charges: Vec<Charge> = charges
        .iter()
        .filter(|charge| charge.card_id == card.id)
        .cloned()
        .collect();
    let card_payments: Vec<Payment> = payments
        .iter()
        .filter(|payment| payment.card_id == card.id)
        .cloned()
        .collect();

    let simulator = BalanceSimulator::new(
        person.monthly_interest_rate,
        person.late_penalty_rate,
        card.closing_day,
        &card_charges,
        &card_payments,
    );
    let breakdown = simulator.run_through(cycle);

    if !breakdown.has_activity() {
        return None;
    }

    Some(CardStatement {
        card_id: card.id,
        masked_number: mask_card_number(&card.number),
        brand: card.brand.clone(),
        bank: card.bank.clone(),
        due_date: cycle.due_date(card.closing_day, card.due_day),
        previous_balance: breakdown.balance_in,
        one_off_total: breakdown.total_by_kind(ChargeKind::OneOff),
        installment_total: breakdown.total_by_kind(ChargeKind::Installment),
        recurring_total: breakdown.total_by_kind(ChargeKind::RecurringFixed),
        charges_total: breakdown.charges_total,
        interest_penalty: breakdown.interest_penalty,
        payments_total: breakdown.payments_total,
        total_due: breakdown.total_due,
        closing_balance: breakdown.balance_out,
        items: breakdown.items,
    })
}
