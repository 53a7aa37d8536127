use chrono::NaiveDate;
use common::Collection;
use model::InvoiceRecord;
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::grouping::customer_groups;

/// Non-fatal notice about a record whose date is missing after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWarning {
    pub collection: Collection,
    pub invoice_number: String,
    /// The rejected input, present only on the pass that discarded it
    pub raw: Option<String>,
}

impl fmt::Display for DateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(
                f,
                "Invoice {} ({}) has an invalid date '{}'; it was converted to a missing date.",
                self.invoice_number, self.collection, raw
            ),
            None => write!(
                f,
                "Invoice {} ({}) has no valid date.",
                self.invoice_number, self.collection
            ),
        }
    }
}

/// Recomputes the derived fields of both collections.
///
/// Every pass starts from scratch, so running it twice without a mutation in
/// between changes nothing.
#[derive(Debug, Clone, Default)]
pub struct Recalculator;

impl Recalculator {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes dates, then recomputes days and per-customer totals in
    /// both collections.
    #[instrument(skip_all, fields(active_len = active.len(), bad_debt_len = bad_debt.len(), today = %today))]
    pub fn recalculate(
        &self,
        active: &mut [InvoiceRecord],
        bad_debt: &mut [InvoiceRecord],
        today: NaiveDate,
    ) -> Result<Vec<DateWarning>> {
        let mut warnings = self.recalculate_collection(Collection::Active, active, today)?;
        warnings.extend(self.recalculate_collection(Collection::BadDebt, bad_debt, today)?);

        if !warnings.is_empty() {
            warn!(
                "{} record(s) have invalid dates that were converted to missing",
                warnings.len()
            );
        }

        Ok(warnings)
    }

    /// Recalculates a single collection.
    pub fn recalculate_collection(
        &self,
        collection: Collection,
        records: &mut [InvoiceRecord],
        today: NaiveDate,
    ) -> Result<Vec<DateWarning>> {
        let mut warnings = Vec::new();

        for record in records.iter_mut() {
            let discarded = record.date_mut().normalize();
            if record.date().is_missing() {
                warnings.push(DateWarning {
                    collection,
                    invoice_number: record.invoice_number().to_string(),
                    raw: discarded,
                });
            }
            let days = record.date().days_until(today);
            record.set_days(days);
        }

        let totals = customer_totals(records)?;
        for (record, total) in records.iter_mut().zip(totals) {
            record.set_total_amount(total);
        }

        debug!(
            "Recalculated {} record(s) in the {} collection",
            records.len(),
            collection
        );
        Ok(warnings)
    }
}

/// Sum of amounts per customer, broadcast back onto every row in input order.
pub fn customer_totals(records: &[InvoiceRecord]) -> Result<Vec<Decimal>> {
    let mut totals = vec![Decimal::ZERO; records.len()];
    for group in customer_groups(records)? {
        let total = group.total(records)?;
        for &row in &group.rows {
            totals[row] = total;
        }
    }
    Ok(totals)
}
