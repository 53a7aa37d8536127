use common::{
    AddInvoiceResult, ApiResponse, Collection, CreateInvoiceRequest, InvoiceDto, TransferRequest,
    TransferResult,
};
use crate::api_client;

/// Get the records of one collection
pub async fn get_invoices(collection: Collection) -> Result<ApiResponse<Vec<InvoiceDto>>, String> {
    log::trace!("Fetching {} invoices", collection);
    let result = api_client::get(&format!("/invoices?collection={}", collection)).await;
    match &result {
        Ok(response) => log::info!("Fetched {} {} invoice(s)", response.data.len(), collection),
        Err(e) => log::error!("Failed to fetch {} invoices: {}", collection, e),
    }
    result
}

/// Get the bad-debt records
pub async fn get_bad_debt() -> Result<ApiResponse<Vec<InvoiceDto>>, String> {
    log::trace!("Fetching bad-debt invoices");
    api_client::get("/bad-debt").await
}

/// Add a record to the active list
pub async fn create_invoice(request: CreateInvoiceRequest) -> Result<ApiResponse<AddInvoiceResult>, String> {
    log::debug!("Creating invoice {} for {}", request.invoice_number, request.customer_name);
    let result = api_client::post("/invoices", &request).await;
    match &result {
        Ok(response) => log::info!(
            "Created invoice {}, {} active record(s)",
            response.data.record.invoice_number,
            response.data.active_count
        ),
        Err(e) => log::error!("Failed to create invoice '{}': {}", request.invoice_number, e),
    }
    result
}

/// Move every active record with this invoice number to bad debt
pub async fn transfer_invoice(invoice_number: String) -> Result<ApiResponse<TransferResult>, String> {
    log::debug!("Transferring invoice {} to bad debt", invoice_number);
    let request = TransferRequest { invoice_number };
    let result = api_client::post("/invoices/transfer", &request).await;
    match &result {
        Ok(response) => log::info!("Moved {} record(s) to bad debt", response.data.moved.len()),
        Err(e) => log::error!("Failed to transfer invoice '{}': {}", request.invoice_number, e),
    }
    result
}
