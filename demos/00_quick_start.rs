/// quick start - minimal statement for one card
use std::collections::HashMap;

use card_ledger::chrono::NaiveDate;
use card_ledger::{
    person_statement, BillingCycle, Card, Charge, ChargeKind, Money, Person, Rate, Uuid,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a person borrowing at 2% interest + 1% late penalty per month
    let person = Person {
        id: Uuid::new_v4(),
        name: "Maria Silva".to_string(),
        document: "12345678901".to_string(),
        monthly_interest_rate: Rate::from_percentage(dec!(2)),
        late_penalty_rate: Rate::from_percentage(dec!(1)),
        active: true,
    };

    let card = Card {
        id: Uuid::new_v4(),
        number: "4111222233334444".to_string(),
        brand: "Visa".to_string(),
        bank: "Nubank".to_string(),
        closing_day: 10,
        due_day: 5,
        active: true,
    };

    // a 1200.00 purchase in 3 installments, made on the closing day
    let charge = Charge {
        id: Uuid::new_v4(),
        person_id: person.id,
        card_id: card.id,
        description: "notebook".to_string(),
        kind: ChargeKind::Installment,
        total_amount: Money::from_cents(120_000),
        installment_count: 3,
        purchase_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        recurring_end_date: None,
        note: None,
        active: true,
    };

    let cards = HashMap::from([(card.id, card)]);
    let cycle: BillingCycle = "2026-02".parse()?;

    let statement = person_statement(&person, &cards, &[charge], &[], cycle);

    // print the statement as the downstream renderers receive it
    println!("{}", serde_json::to_string_pretty(&statement)?);

    Ok(())
}
