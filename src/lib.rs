pub mod cycle;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod interest;
pub mod masking;
pub mod projection;
pub mod records;
pub mod report;
pub mod simulation;

// re-export key types
pub use cycle::BillingCycle;
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use interest::monthly_interest_penalty;
pub use projection::{project_cycle, LineItem, RECURRING_LABEL};
pub use records::{Card, CardId, Charge, ChargeKind, Payment, Person, PersonId};
pub use report::{person_statement, CardStatement, PersonStatement};
pub use simulation::{BalanceSimulator, CycleBreakdown};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
