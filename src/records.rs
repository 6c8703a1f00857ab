use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cycle::BillingCycle;
use crate::decimal::{Money, Rate};

/// unique identifier for a person
pub type PersonId = Uuid;

/// unique identifier for a card
pub type CardId = Uuid;

/// borrower that uses the operator's cards and accrues charges on them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// national document, digits only
    pub document: String,
    /// monthly interest applied to a positive carried balance
    pub monthly_interest_rate: Rate,
    /// monthly late penalty applied together with interest
    pub late_penalty_rate: Rate,
    pub active: bool,
}

/// credit card with its statement-closing and payment-due rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// card number, digits only
    pub number: String,
    pub brand: String,
    pub bank: String,
    /// day of month after which purchases roll to the next cycle, in [1,31]
    pub closing_day: u8,
    /// day of month a cycle's payment is due, in [1,31]
    pub due_day: u8,
    pub active: bool,
}

/// how a charge projects into billing cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeKind {
    /// single cycle, full amount
    OneOff,
    /// split across a fixed number of consecutive cycles
    Installment,
    /// repeats every cycle until an optional end date
    RecurringFixed,
}

/// purchase made for a person on a specific card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    pub id: Uuid,
    pub person_id: PersonId,
    pub card_id: CardId,
    pub description: String,
    pub kind: ChargeKind,
    pub total_amount: Money,
    /// 1 for one-off and recurring charges, >= 2 for installment plans
    pub installment_count: u32,
    pub purchase_date: NaiveDate,
    /// last calendar month a recurring charge bills in; open-ended when absent
    pub recurring_end_date: Option<NaiveDate>,
    pub note: Option<String>,
    pub active: bool,
}

impl Charge {
    /// first cycle this charge bills into for a card with the given closing day
    pub fn first_cycle(&self, closing_day: u8) -> BillingCycle {
        BillingCycle::first_for_purchase(self.purchase_date, closing_day)
    }
}

/// payment made by a person toward a card's balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub person_id: PersonId,
    pub card_id: CardId,
    pub payment_date: NaiveDate,
    pub amount: Money,
    pub note: Option<String>,
}

impl Payment {
    /// payments belong to the calendar month they were made in, with no
    /// closing-day adjustment
    pub fn cycle(&self) -> BillingCycle {
        BillingCycle::from_date(self.payment_date)
    }
}
