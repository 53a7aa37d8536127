#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::session::SESSION_HEADER;
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use chrono::Duration;
    use common::{
        AddInvoiceResult, ApiResponse, CreateInvoiceRequest, CustomerReportDto, ErrorResponse,
        InvoiceDto, ReminderDto, SessionEnded, TransferRequest, TransferResult,
    };
    use rust_decimal::Decimal;

    fn session(id: &'static str) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(SESSION_HEADER),
            HeaderValue::from_static(id),
        )
    }

    fn invoice(customer: &str, number: &str, amount: i64, days_ago: i64) -> CreateInvoiceRequest {
        let date = compute::today() - Duration::days(days_ago);
        CreateInvoiceRequest {
            customer_name: customer.to_string(),
            invoice_number: number.to_string(),
            amount: Decimal::from(amount),
            date: Some(date.format("%Y-%m-%d").to_string()),
            ..Default::default()
        }
    }

    async fn add(server: &TestServer, id: &'static str, request: &CreateInvoiceRequest) -> AddInvoiceResult {
        let (name, value) = session(id);
        let response = server
            .post("/api/v1/invoices")
            .add_header(name, value)
            .json(request)
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<ApiResponse<AddInvoiceResult>>().data
    }

    async fn list(server: &TestServer, id: &'static str, path: &str) -> Vec<InvoiceDto> {
        let (name, value) = session(id);
        let response = server.get(path).add_header(name, value).await;
        response.assert_status(StatusCode::OK);
        response.json::<ApiResponse<Vec<InvoiceDto>>>().data
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
    }

    #[tokio::test]
    async fn test_add_and_transfer_scenario() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let first = add(&server, "scenario", &invoice("Acme", "INV-1", 100, 40)).await;
        assert_eq!(first.record.days, Some(40));
        assert!(first.record.overdue);
        assert_eq!(first.record.total_amount, Decimal::from(100));
        assert_eq!(first.active_count, 1);

        let second = add(&server, "scenario", &invoice("Acme", "INV-2", 50, 0)).await;
        assert_eq!(second.record.total_amount, Decimal::from(150));
        assert!(!second.record.overdue);

        let active = list(&server, "scenario", "/api/v1/invoices").await;
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|r| r.total_amount == Decimal::from(150)));

        let (name, value) = session("scenario");
        let response = server
            .post("/api/v1/invoices/transfer")
            .add_header(name, value)
            .json(&TransferRequest {
                invoice_number: "INV-1".to_string(),
            })
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<TransferResult> = response.json();
        assert!(body.success);
        assert_eq!(
            body.message,
            "Record with Invoice Number INV-1 transferred to Bad Debt."
        );
        assert_eq!(body.data.moved.len(), 1);
        assert_eq!(body.data.active_count, 1);
        assert_eq!(body.data.bad_debt_count, 1);

        let active = list(&server, "scenario", "/api/v1/invoices").await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].invoice_number, "INV-2");
        assert_eq!(active[0].total_amount, Decimal::from(50));

        let bad_debt = list(&server, "scenario", "/api/v1/bad-debt").await;
        assert_eq!(bad_debt.len(), 1);
        assert_eq!(bad_debt[0].invoice_number, "INV-1");
        assert_eq!(bad_debt[0].total_amount, Decimal::from(100));

        let same = list(&server, "scenario", "/api/v1/invoices?collection=bad_debt").await;
        assert_eq!(same, bad_debt);
    }

    #[tokio::test]
    async fn test_add_without_required_fields_is_rejected() {
        let server = TestServer::new(setup_test_app()).unwrap();
        let (name, value) = session("validation");

        let response = server
            .post("/api/v1/invoices")
            .add_header(name, value)
            .json(&CreateInvoiceRequest {
                amount: Decimal::from(10),
                ..Default::default()
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.error, "Customer Name and Invoice Number are required.");
        assert!(!body.success);

        assert!(list(&server, "validation", "/api/v1/invoices").await.is_empty());
    }

    #[tokio::test]
    async fn test_negative_amount_is_rejected() {
        let server = TestServer::new(setup_test_app()).unwrap();
        let (name, value) = session("negative");

        let response = server
            .post("/api/v1/invoices")
            .add_header(name, value)
            .json(&invoice("Acme", "INV-1", -5, 0))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_AMOUNT");
    }

    #[tokio::test]
    async fn test_unparsable_date_is_kept_with_warning() {
        let server = TestServer::new(setup_test_app()).unwrap();
        let (name, value) = session("dates");
        let mut request = invoice("Acme", "INV-1", 10, 0);
        request.date = Some("not a date".to_string());

        let response = server
            .post("/api/v1/invoices")
            .add_header(name, value)
            .json(&request)
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<AddInvoiceResult> = response.json();
        assert_eq!(body.data.record.days, None);
        assert_eq!(body.data.record.date, None);
        assert!(!body.data.record.overdue);
        assert_eq!(body.warnings.len(), 1);
        assert!(body.warnings[0].contains("not a date"));
    }

    #[tokio::test]
    async fn test_transfer_unknown_invoice_returns_not_found() {
        let server = TestServer::new(setup_test_app()).unwrap();
        add(&server, "missing", &invoice("Acme", "INV-1", 10, 0)).await;
        let (name, value) = session("missing");

        let response = server
            .post("/api/v1/invoices/transfer")
            .add_header(name, value)
            .json(&TransferRequest {
                invoice_number: "INV-404".to_string(),
            })
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVOICE_NOT_FOUND");
        assert_eq!(list(&server, "missing", "/api/v1/invoices").await.len(), 1);
    }

    #[tokio::test]
    async fn test_transfer_with_blank_invoice_number_is_rejected() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .post("/api/v1/invoices/transfer")
            .json(&TransferRequest {
                invoice_number: "  ".to_string(),
            })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_amount_gets_error_envelope() {
        let server = TestServer::new(setup_test_app()).unwrap();
        let (name, value) = session("malformed");

        let response = server
            .post("/api/v1/invoices")
            .add_header(name, value)
            .json(&serde_json::json!({
                "customer_name": "Acme",
                "invoice_number": "INV-1",
                "amount": "abc"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_REQUEST");
        assert!(!body.success);
        assert!(list(&server, "malformed", "/api/v1/invoices").await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_collection_gets_error_envelope() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/invoices?collection=archived").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_REQUEST");
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_high_precision_amount_then_whole_amount() {
        let server = TestServer::new(setup_test_app()).unwrap();
        let mut tiny = invoice("Acme", "INV-1", 0, 0);
        tiny.amount = Decimal::from_str_exact("0.0000000000000000000000000001").unwrap();

        add(&server, "precision", &tiny).await;
        let second = add(&server, "precision", &invoice("Acme", "INV-2", 1, 0)).await;

        assert_eq!(
            second.record.total_amount,
            Decimal::from_str_exact("1.0000000000000000000000000001").unwrap()
        );
        assert_eq!(second.active_count, 2);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let server = TestServer::new(setup_test_app()).unwrap();

        add(&server, "tab-a", &invoice("Acme", "INV-1", 10, 0)).await;

        assert_eq!(list(&server, "tab-a", "/api/v1/invoices").await.len(), 1);
        assert!(list(&server, "tab-b", "/api/v1/invoices").await.is_empty());

        // Requests without the header share the default session
        let response = server.get("/api/v1/invoices").await;
        let body: ApiResponse<Vec<InvoiceDto>> = response.json();
        assert!(body.data.is_empty());
    }

    #[tokio::test]
    async fn test_report_groups_active_invoices() {
        let server = TestServer::new(setup_test_app()).unwrap();
        add(&server, "report", &invoice("Globex", "G-1", 25, 3)).await;
        add(&server, "report", &invoice("Acme", "A-1", 100, 40)).await;
        add(&server, "report", &invoice("Acme", "A-2", 50, 0)).await;
        let (name, value) = session("report");

        let response = server.get("/api/v1/report").add_header(name, value).await;

        response.assert_status(StatusCode::OK);
        let report = response.json::<ApiResponse<CustomerReportDto>>().data;
        let names: Vec<&str> = report
            .customers
            .iter()
            .map(|c| c.customer_name.as_str())
            .collect();
        assert_eq!(names, vec!["Acme", "Globex"]);
        assert_eq!(report.customers[0].invoice_count, 2);
        assert_eq!(report.customers[0].total_amount, Decimal::from(150));
        assert_eq!(report.invoice_count, 3);
        assert_eq!(report.grand_total, Decimal::from(175));
    }

    #[tokio::test]
    async fn test_empty_report() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/report").await;

        response.assert_status(StatusCode::OK);
        let report = response.json::<ApiResponse<CustomerReportDto>>().data;
        assert!(report.customers.is_empty());
        assert_eq!(report.grand_total, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_reminders() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/reminders").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ReminderDto> = response.json();
        assert!(body.data.message.contains("Tuesday and Friday at 11:00 AM"));
    }

    #[tokio::test]
    async fn test_end_session_discards_records() {
        let server = TestServer::new(setup_test_app()).unwrap();
        add(&server, "ending", &invoice("Acme", "INV-1", 10, 0)).await;
        add(&server, "ending", &invoice("Acme", "INV-2", 10, 0)).await;
        let (name, value) = session("ending");

        let response = server.delete("/api/v1/session").add_header(name, value).await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<SessionEnded> = response.json();
        assert_eq!(body.data.session_id, "ending");
        assert_eq!(body.data.discarded_records, 2);
        assert!(list(&server, "ending", "/api/v1/invoices").await.is_empty());
    }
}
