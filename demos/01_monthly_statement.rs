/// monthly statement - replay a full year of history month by month
use card_ledger::chrono::NaiveDate;
use card_ledger::format::format_brl;
use card_ledger::{
    BalanceSimulator, BillingCycle, Charge, ChargeKind, Money, Payment, Rate, Uuid,
};
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let person_id = Uuid::new_v4();
    let card_id = Uuid::new_v4();
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    let charges = vec![
        Charge {
            id: Uuid::new_v4(),
            person_id,
            card_id,
            description: "sofa".to_string(),
            kind: ChargeKind::Installment,
            total_amount: Money::from_cents(250_000),
            installment_count: 10,
            purchase_date: date(2026, 1, 15),
            recurring_end_date: None,
            note: Some("loja de moveis".to_string()),
            active: true,
        },
        Charge {
            id: Uuid::new_v4(),
            person_id,
            card_id,
            description: "streaming".to_string(),
            kind: ChargeKind::RecurringFixed,
            total_amount: Money::from_cents(5_490),
            installment_count: 1,
            purchase_date: date(2026, 2, 1),
            recurring_end_date: None,
            note: None,
            active: true,
        },
    ];

    let payments: Vec<Payment> = (3..=12)
        .map(|month| Payment {
            id: Uuid::new_v4(),
            person_id,
            card_id,
            payment_date: date(2026, month, 7),
            amount: Money::from_cents(30_000),
            note: None,
        })
        .collect();

    let simulator = BalanceSimulator::new(
        Rate::from_percentage(dec!(2.5)),
        Rate::from_percentage(dec!(1)),
        10,
        &charges,
        &payments,
    );

    println!("cycle    | balance in   | charges      | interest  | payments     | balance out");
    for month in 1..=12 {
        let breakdown = simulator.run_through(BillingCycle::new(2026, month));
        println!(
            "{} | {:>12} | {:>12} | {:>9} | {:>12} | {:>12}",
            breakdown.cycle,
            format_brl(breakdown.balance_in),
            format_brl(breakdown.charges_total),
            format_brl(breakdown.interest_penalty),
            format_brl(breakdown.payments_total),
            format_brl(breakdown.balance_out),
        );
    }
}
