//! Domain model of the invoice tracker: the invoice record, its date field
//! and the input accepted by the add-record action.

pub mod date;
pub mod error;
pub mod record;

pub use date::{parse_date, InvoiceDate};
pub use error::{RecordError, RequiredField};
pub use record::{InvoiceRecord, NewInvoice};

// Re-export tracing for use in this crate
pub use tracing;
