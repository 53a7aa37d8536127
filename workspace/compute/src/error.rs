use model::RecordError;
use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The add-record input failed its presence checks
    #[error("{0}")]
    Validation(#[from] RecordError),

    /// No active invoice carries the requested number
    #[error("No active invoice with number '{0}'")]
    InvoiceNotFound(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),

    /// An amount does not fit the fixed-point representation used for sums
    #[error("Amount error: {0}")]
    Amount(String),
}

// Implement From<polars::error::PolarsError> for ComputeError
impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        match error {
            polars::error::PolarsError::NoData(_) => {
                let err = ComputeError::DataFrame(format!("No data: {}", error));
                error!(?err, "DataFrame error: No data");
                err
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Shape mismatch: {}", error));
                error!(?err, "DataFrame error: Shape mismatch");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::ColumnNotFound(_) => {
                let err = ComputeError::DataFrame(format!("Column not found: {}", error));
                error!(?err, "DataFrame error: Column not found");
                err
            }
            _ => {
                let err = ComputeError::Series(format!("Series error: {}", error));
                error!(?err, "Series error");
                err
            }
        }
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use model::RequiredField;

    #[test]
    fn test_validation_error_keeps_record_message() {
        let err: ComputeError =
            RecordError::MissingFields(vec![RequiredField::CustomerName]).into();
        assert_eq!(err.to_string(), "Customer Name is required.");
    }

    #[test]
    fn test_polars_error_conversion() {
        let err: ComputeError =
            polars::error::PolarsError::ColumnNotFound("rows".into()).into();
        assert!(matches!(err, ComputeError::DataFrame(_)));
    }
}
