pub mod error;
mod grouping;
pub mod recalculate;
pub mod report;
pub mod store;

use chrono::{Local, NaiveDate};

pub use error::{ComputeError, Result};
pub use recalculate::{customer_totals, DateWarning, Recalculator};
pub use report::{CustomerReport, CustomerSummary};
pub use store::{AddOutcome, InvoiceStore, TransferOutcome};

/// The calendar day used as "today" by every recalculation.
///
/// Days are counted on the server's local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
