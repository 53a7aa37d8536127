use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::date::InvoiceDate;
use crate::error::{RecordError, RequiredField};

/// Input of the add-record action.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct NewInvoice {
    #[validate(custom(function = "not_blank"))]
    pub customer_name: String,
    #[validate(custom(function = "not_blank"))]
    pub invoice_number: String,
    pub amount: Decimal,
    /// Date text as entered; `None` means today
    pub date: Option<String>,
    pub admin_notes: String,
    pub comments: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl NewInvoice {
    /// Runs the presence checks and names every blank required field.
    pub fn check(&self) -> Result<(), RecordError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        let missing: Vec<RequiredField> = [
            ("customer_name", RequiredField::CustomerName),
            ("invoice_number", RequiredField::InvoiceNumber),
        ]
        .into_iter()
        .filter(|(name, _)| field_errors.contains_key(*name))
        .map(|(_, field)| field)
        .collect();

        debug!("Rejected new invoice, missing fields: {:?}", missing);
        Err(RecordError::MissingFields(missing))
    }
}

/// A single invoice tracked by the dashboard.
///
/// `days` and `total_amount` are derived fields. They are only written by the
/// recalculation pass and are stale until it has run.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRecord {
    customer_name: String,
    invoice_number: String,
    amount: Decimal,
    date: InvoiceDate,
    days: Option<i64>,
    total_amount: Decimal,
    admin_notes: String,
    comments: String,
}

impl InvoiceRecord {
    /// Builds a record from validated input.
    ///
    /// Total amount starts at zero until the next recalculation. Days is
    /// computed straight from the submitted date.
    pub fn from_new(new: NewInvoice, today: NaiveDate) -> Result<Self, RecordError> {
        new.check()?;

        let date = InvoiceDate::from_input(new.date.as_deref(), today);
        let days = date.days_until(today);

        Ok(Self {
            customer_name: new.customer_name,
            invoice_number: new.invoice_number,
            amount: new.amount,
            date,
            days,
            total_amount: Decimal::ZERO,
            admin_notes: new.admin_notes,
            comments: new.comments,
        })
    }

    /// Gets the customer name.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Gets the invoice number.
    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> &InvoiceDate {
        &self.date
    }

    /// Mutable access for date normalization.
    pub fn date_mut(&mut self) -> &mut InvoiceDate {
        &mut self.date
    }

    /// Days since the invoice date, `None` when the date is missing.
    pub fn days(&self) -> Option<i64> {
        self.days
    }

    pub fn set_days(&mut self, days: Option<i64>) {
        self.days = days;
    }

    /// Per-customer total within the record's collection.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn set_total_amount(&mut self, total_amount: Decimal) {
        self.total_amount = total_amount;
    }

    pub fn admin_notes(&self) -> &str {
        &self.admin_notes
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Display predicate for past-due highlighting. A missing date is never overdue.
    pub fn is_overdue(&self, threshold_days: i64) -> bool {
        self.days.is_some_and(|days| days > threshold_days)
    }
}
