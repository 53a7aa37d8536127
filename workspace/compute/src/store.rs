use chrono::NaiveDate;
use common::Collection;
use model::{InvoiceRecord, NewInvoice};
use tracing::{debug, info, instrument, warn};

use crate::error::{ComputeError, Result};
use crate::recalculate::{DateWarning, Recalculator};
use crate::report::CustomerReport;

/// Outcome of a successful add.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    /// The record as stored, after recalculation
    pub record: InvoiceRecord,
    pub warnings: Vec<DateWarning>,
}

/// Outcome of a successful transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    /// Moved records as they now appear in the bad-debt collection
    pub moved: Vec<InvoiceRecord>,
    pub warnings: Vec<DateWarning>,
}

/// The two invoice collections of one session.
///
/// Every mutation is staged on copies and only committed once the
/// recalculation pass succeeded, so a failed action leaves the store as it
/// was.
#[derive(Debug, Clone, Default)]
pub struct InvoiceStore {
    active: Vec<InvoiceRecord>,
    bad_debt: Vec<InvoiceRecord>,
    recalculator: Recalculator,
    /// Day the derived fields were last computed for
    as_of: Option<NaiveDate>,
}

impl InvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new record to the active collection and recalculates.
    #[instrument(skip(self, new_invoice), fields(invoice_number = %new_invoice.invoice_number))]
    pub fn add(&mut self, new_invoice: NewInvoice, today: NaiveDate) -> Result<AddOutcome> {
        let record = InvoiceRecord::from_new(new_invoice, today).map_err(|e| {
            warn!("Rejected new invoice: {}", e);
            ComputeError::from(e)
        })?;

        let mut active = self.active.clone();
        let mut bad_debt = self.bad_debt.clone();
        active.push(record);
        let index = active.len() - 1;

        let warnings = self
            .recalculator
            .recalculate(&mut active, &mut bad_debt, today)?;
        let record = active[index].clone();

        self.commit(active, bad_debt, today);
        info!(
            "Added invoice {} for {}, active collection now has {} record(s)",
            record.invoice_number(),
            record.customer_name(),
            self.active.len()
        );

        Ok(AddOutcome { record, warnings })
    }

    /// Moves every active record with this invoice number to bad debt.
    #[instrument(skip(self))]
    pub fn transfer(&mut self, invoice_number: &str, today: NaiveDate) -> Result<TransferOutcome> {
        let (moved, active): (Vec<InvoiceRecord>, Vec<InvoiceRecord>) = self
            .active
            .iter()
            .cloned()
            .partition(|record| record.invoice_number() == invoice_number);

        if moved.is_empty() {
            warn!("Transfer requested for unknown invoice {}", invoice_number);
            return Err(ComputeError::InvoiceNotFound(invoice_number.to_string()));
        }

        let mut active = active;
        let mut bad_debt = self.bad_debt.clone();
        let first_moved = bad_debt.len();
        bad_debt.extend(moved);

        let warnings = self
            .recalculator
            .recalculate(&mut active, &mut bad_debt, today)?;
        let moved = bad_debt[first_moved..].to_vec();

        self.commit(active, bad_debt, today);
        info!(
            "Transferred {} record(s) with invoice number {} to bad debt",
            moved.len(),
            invoice_number
        );

        Ok(TransferOutcome { moved, warnings })
    }

    /// Current records of a collection, in insertion order.
    pub fn all(&self, collection: Collection) -> &[InvoiceRecord] {
        match collection {
            Collection::Active => &self.active,
            Collection::BadDebt => &self.bad_debt,
        }
    }

    /// Per-customer report over the active collection.
    pub fn report(&self) -> Result<CustomerReport> {
        CustomerReport::from_records(&self.active)
    }

    /// Recalculates when the derived fields were computed for another day.
    ///
    /// Returns no warnings when nothing had to be recomputed.
    pub fn refresh(&mut self, today: NaiveDate) -> Result<Vec<DateWarning>> {
        if self.as_of == Some(today) || self.total_len() == 0 {
            return Ok(Vec::new());
        }

        debug!("Derived fields are from {:?}, refreshing for {}", self.as_of, today);
        let mut active = self.active.clone();
        let mut bad_debt = self.bad_debt.clone();
        let warnings = self
            .recalculator
            .recalculate(&mut active, &mut bad_debt, today)?;
        self.commit(active, bad_debt, today);
        Ok(warnings)
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.all(collection).len()
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.all(collection).is_empty()
    }

    /// Records across both collections.
    pub fn total_len(&self) -> usize {
        self.active.len() + self.bad_debt.len()
    }

    fn commit(&mut self, active: Vec<InvoiceRecord>, bad_debt: Vec<InvoiceRecord>, today: NaiveDate) {
        self.active = active;
        self.bad_debt = bad_debt;
        self.as_of = Some(today);
    }
}
