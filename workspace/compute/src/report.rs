use model::InvoiceRecord;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};
use crate::grouping::customer_groups;

/// Invoice count and amount sum for one customer.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub customer_name: String,
    pub invoice_count: u64,
    pub total_amount: Decimal,
}

/// Per-customer aggregation of a collection, sorted by customer name.
///
/// This is a projection: it is rebuilt on every view and never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerReport {
    pub customers: Vec<CustomerSummary>,
}

impl CustomerReport {
    /// Groups records by customer name.
    #[instrument(skip(records), fields(num_records = records.len()))]
    pub fn from_records(records: &[InvoiceRecord]) -> Result<Self> {
        if records.is_empty() {
            debug!("No records, returning empty report");
            return Ok(Self::default());
        }

        let groups = customer_groups(records)?;
        let mut customers = Vec::with_capacity(groups.len());
        for group in groups {
            customers.push(CustomerSummary {
                total_amount: group.total(records)?,
                invoice_count: group.rows.len() as u64,
                customer_name: group.customer_name,
            });
        }
        customers.sort_by(|a, b| a.customer_name.cmp(&b.customer_name));

        debug!("Report covers {} customer(s)", customers.len());
        Ok(Self { customers })
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Number of invoices across all customers.
    pub fn invoice_count(&self) -> u64 {
        self.customers.iter().map(|c| c.invoice_count).sum()
    }

    /// Sum of all customer totals.
    pub fn grand_total(&self) -> Result<Decimal> {
        self.customers.iter().try_fold(Decimal::ZERO, |sum, customer| {
            sum.checked_add(customer.total_amount).ok_or_else(|| {
                ComputeError::Amount("Report grand total exceeds the decimal range".to_string())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use model::NewInvoice;

    fn record(customer: &str, invoice: &str, amount: Decimal) -> InvoiceRecord {
        InvoiceRecord::from_new(
            NewInvoice {
                customer_name: customer.to_string(),
                invoice_number: invoice.to_string(),
                amount,
                ..Default::default()
            },
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_groups_and_sorts_customers() {
        let records = vec![
            record("Globex", "G-1", Decimal::new(1050, 2)),
            record("Acme", "A-1", Decimal::from(100)),
            record("Acme", "A-2", Decimal::from(50)),
        ];

        let report = CustomerReport::from_records(&records).unwrap();

        assert_eq!(
            report.customers,
            vec![
                CustomerSummary {
                    customer_name: "Acme".to_string(),
                    invoice_count: 2,
                    total_amount: Decimal::from(150),
                },
                CustomerSummary {
                    customer_name: "Globex".to_string(),
                    invoice_count: 1,
                    total_amount: Decimal::new(1050, 2),
                },
            ]
        );
        assert_eq!(report.invoice_count(), 3);
        assert_eq!(report.grand_total().unwrap(), Decimal::new(16050, 2));
    }

    #[test]
    fn test_duplicate_invoice_numbers_are_counted() {
        let records = vec![
            record("Acme", "A-1", Decimal::from(1)),
            record("Acme", "A-1", Decimal::from(2)),
        ];

        let report = CustomerReport::from_records(&records).unwrap();
        assert_eq!(report.customers[0].invoice_count, 2);
        assert_eq!(report.customers[0].total_amount, Decimal::from(3));
    }

    #[test]
    fn test_grand_total_outside_decimal_range_is_an_error() {
        let records = vec![
            record("Acme", "A-1", Decimal::MAX),
            record("Globex", "G-1", Decimal::MAX),
        ];

        let report = CustomerReport::from_records(&records).unwrap();

        assert_eq!(report.customers[0].total_amount, Decimal::MAX);
        assert!(matches!(report.grand_total(), Err(ComputeError::Amount(_))));
    }

    #[test]
    fn test_empty_report() {
        let report = CustomerReport::from_records(&[]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.grand_total().unwrap(), Decimal::ZERO);
    }
}
