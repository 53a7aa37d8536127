use common::{
    format_amount, CreateInvoiceRequest, CustomerReportDto, CustomerSummaryDto, InvoiceDto,
};
use compute::{CustomerReport, DateWarning};
use model::{InvoiceRecord, NewInvoice};

use crate::config::Settings;

pub fn request_to_new_invoice(request: CreateInvoiceRequest) -> NewInvoice {
    NewInvoice {
        customer_name: request.customer_name,
        invoice_number: request.invoice_number,
        amount: request.amount,
        date: request.date,
        admin_notes: request.admin_notes,
        comments: request.comments,
    }
}

/// Converts a stored record into its display form.
pub fn invoice_to_dto(record: &InvoiceRecord, settings: &Settings) -> InvoiceDto {
    InvoiceDto {
        customer_name: record.customer_name().to_string(),
        invoice_number: record.invoice_number().to_string(),
        amount: record.amount(),
        date: record.date().known(),
        days: record.days(),
        total_amount: record.total_amount(),
        admin_notes: record.admin_notes().to_string(),
        comments: record.comments().to_string(),
        overdue: record.is_overdue(settings.overdue_threshold_days),
        amount_display: format_amount(record.amount(), &settings.currency),
        total_amount_display: format_amount(record.total_amount(), &settings.currency),
    }
}

pub fn invoices_to_dtos(records: &[InvoiceRecord], settings: &Settings) -> Vec<InvoiceDto> {
    records
        .iter()
        .map(|record| invoice_to_dto(record, settings))
        .collect()
}

/// Converts the report projection into its display form.
/// Fails only when the grand total leaves the decimal range.
pub fn report_to_dto(report: &CustomerReport, settings: &Settings) -> compute::Result<CustomerReportDto> {
    let customers = report
        .customers
        .iter()
        .map(|summary| CustomerSummaryDto {
            customer_name: summary.customer_name.clone(),
            invoice_count: summary.invoice_count,
            total_amount: summary.total_amount,
            total_amount_display: format_amount(summary.total_amount, &settings.currency),
        })
        .collect();
    let grand_total = report.grand_total()?;

    Ok(CustomerReportDto {
        customers,
        invoice_count: report.invoice_count(),
        grand_total,
        grand_total_display: format_amount(grand_total, &settings.currency),
        currency: settings.currency.clone(),
    })
}

pub fn warning_messages(warnings: &[DateWarning]) -> Vec<String> {
    warnings.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use compute::CustomerSummary;
    use rust_decimal::Decimal;

    #[test]
    fn test_invoice_to_dto_flags_overdue_and_formats_amounts() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let mut record = InvoiceRecord::from_new(
            NewInvoice {
                customer_name: "Acme".to_string(),
                invoice_number: "INV-1".to_string(),
                amount: Decimal::new(123456, 2),
                date: Some("2025-05-21".to_string()),
                ..Default::default()
            },
            today,
        )
        .unwrap();
        record.set_total_amount(Decimal::new(123456, 2));

        let dto = invoice_to_dto(&record, &Settings::default());

        assert_eq!(dto.days, Some(40));
        assert!(dto.overdue);
        assert_eq!(dto.date, NaiveDate::from_ymd_opt(2025, 5, 21));
        assert_eq!(dto.amount_display, "$1,234.56");
        assert_eq!(dto.total_amount_display, "$1,234.56");
    }

    #[test]
    fn test_report_to_dto_carries_grand_total() {
        let report = CustomerReport {
            customers: vec![
                CustomerSummary {
                    customer_name: "Acme".to_string(),
                    invoice_count: 2,
                    total_amount: Decimal::from(150),
                },
                CustomerSummary {
                    customer_name: "Globex".to_string(),
                    invoice_count: 1,
                    total_amount: Decimal::from(25),
                },
            ],
        };

        let dto = report_to_dto(&report, &Settings::default()).unwrap();

        assert_eq!(dto.customers.len(), 2);
        assert_eq!(dto.invoice_count, 3);
        assert_eq!(dto.grand_total, Decimal::from(175));
        assert_eq!(dto.currency, "USD");
    }
}
