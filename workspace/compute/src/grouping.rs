//! Per-customer grouping of a record batch.
//!
//! Polars builds the groups as lists of row indices. Amounts are summed as
//! `Decimal` afterwards, so a total is exact at any scale and only fails when
//! it leaves the decimal range.

use model::InvoiceRecord;
use polars::prelude::*;
use rust_decimal::Decimal;
use tracing::trace;

use crate::error::{ComputeError, Result};

/// Rows of one customer, in input order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CustomerGroup {
    pub customer_name: String,
    pub rows: Vec<usize>,
}

impl CustomerGroup {
    pub(crate) fn total(&self, records: &[InvoiceRecord]) -> Result<Decimal> {
        self.rows.iter().try_fold(Decimal::ZERO, |sum, &row| {
            sum.checked_add(records[row].amount()).ok_or_else(|| {
                ComputeError::Amount(format!(
                    "Total for customer '{}' exceeds the decimal range",
                    self.customer_name
                ))
            })
        })
    }
}

/// Groups records by customer name with a polars `group_by`.
pub(crate) fn customer_groups(records: &[InvoiceRecord]) -> Result<Vec<CustomerGroup>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let names: Vec<&str> = records.iter().map(InvoiceRecord::customer_name).collect();
    let rows: Vec<u32> = (0..records.len())
        .map(|row| {
            u32::try_from(row).map_err(|_| ComputeError::DataFrame(format!("Row {} is out of range", row)))
        })
        .collect::<Result<_>>()?;

    let df = DataFrame::new(vec![
        Series::new("customer_name".into(), names).into(),
        Series::new("row".into(), rows).into(),
    ])?;

    let grouped = df
        .lazy()
        .group_by_stable([col("customer_name")])
        .agg([col("row").alias("rows")])
        .collect()?;
    trace!("Customer groups frame: {:?}", grouped);

    let names = grouped.column("customer_name")?.str()?;
    let row_lists = grouped.column("rows")?.list()?;

    names
        .into_iter()
        .zip(row_lists.into_iter())
        .map(|(name, rows)| {
            let (Some(customer_name), Some(rows)) = (name, rows) else {
                return Err(ComputeError::Series("Null value in customer groups".to_string()));
            };
            let rows = rows
                .u32()?
                .into_no_null_iter()
                .map(|row| row as usize)
                .collect();
            Ok(CustomerGroup {
                customer_name: customer_name.to_string(),
                rows,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use model::NewInvoice;

    fn record(customer: &str, amount: Decimal) -> InvoiceRecord {
        InvoiceRecord::from_new(
            NewInvoice {
                customer_name: customer.to_string(),
                invoice_number: "INV".to_string(),
                amount,
                ..Default::default()
            },
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let records = vec![
            record("Globex", Decimal::ONE),
            record("Acme", Decimal::ONE),
            record("Globex", Decimal::ONE),
        ];

        let groups = customer_groups(&records).unwrap();

        assert_eq!(
            groups,
            vec![
                CustomerGroup { customer_name: "Globex".to_string(), rows: vec![0, 2] },
                CustomerGroup { customer_name: "Acme".to_string(), rows: vec![1] },
            ]
        );
    }

    #[test]
    fn test_total_mixes_scales_exactly() {
        let records = vec![
            record("Acme", Decimal::new(1, 28)),
            record("Globex", Decimal::from(10_000_000_000_000_000_000u64)),
            record("Acme", Decimal::ONE),
        ];

        let groups = customer_groups(&records).unwrap();

        assert_eq!(
            groups[0].total(&records).unwrap(),
            Decimal::from_str_exact("1.0000000000000000000000000001").unwrap()
        );
        assert_eq!(
            groups[1].total(&records).unwrap(),
            Decimal::from(10_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_total_outside_decimal_range_is_an_error() {
        let records = vec![record("Acme", Decimal::MAX), record("Acme", Decimal::ONE)];

        let groups = customer_groups(&records).unwrap();

        assert!(matches!(groups[0].total(&records), Err(ComputeError::Amount(_))));
    }
}
