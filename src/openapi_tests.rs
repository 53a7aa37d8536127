#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::PathItemType;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        for schema in [
            "ErrorResponse",
            "HealthResponse",
            "CreateInvoiceRequest",
            "TransferRequest",
            "InvoiceDto",
            "CustomerReportDto",
            "Collection",
        ] {
            assert!(
                components.schemas.contains_key(schema),
                "missing schema {}",
                schema
            );
        }

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = error_response_schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("error"));
            assert!(properties.contains_key("code"));
            assert!(properties.contains_key("success"));
        } else {
            panic!("ErrorResponse should be an object schema");
        }
    }

    #[test]
    fn test_invoice_dto_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let invoice_schema = components.schemas.get("InvoiceDto").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = invoice_schema {
            let properties = &obj.properties;
            for field in ["customer_name", "invoice_number", "amount", "days", "total_amount", "overdue"] {
                assert!(properties.contains_key(field), "missing field {}", field);
            }
        } else {
            panic!("InvoiceDto should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_cover_every_route() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        for (path, method) in [
            ("/health", PathItemType::Get),
            ("/api/v1/invoices", PathItemType::Post),
            ("/api/v1/invoices", PathItemType::Get),
            ("/api/v1/invoices/transfer", PathItemType::Post),
            ("/api/v1/bad-debt", PathItemType::Get),
            ("/api/v1/report", PathItemType::Get),
            ("/api/v1/reminders", PathItemType::Get),
            ("/api/v1/session", PathItemType::Delete),
        ] {
            let item = paths
                .get(path)
                .unwrap_or_else(|| panic!("missing path {}", path));
            assert!(
                item.operations.contains_key(&method),
                "missing operation on {}",
                path
            );
        }
    }

    #[test]
    fn test_transfer_documents_not_found() {
        let openapi = ApiDoc::openapi();
        let transfer = openapi.paths.paths.get("/api/v1/invoices/transfer").unwrap();
        let post = transfer.operations.get(&PathItemType::Post).unwrap();

        assert!(post.responses.responses.contains_key("200"));
        assert!(post.responses.responses.contains_key("400"));
        assert!(post.responses.responses.contains_key("404"));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi = ApiDoc::openapi();
        let openapi_json = serde_json::to_string(&openapi).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("common.ErrorResponse"));
        assert!(openapi_json.contains("ErrorResponse"));
    }
}
