use std::fmt;
use thiserror::Error;

/// Fields the add-record action refuses to leave blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    CustomerName,
    InvoiceNumber,
}

impl RequiredField {
    /// Label as shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::CustomerName => "Customer Name",
            RequiredField::InvoiceNumber => "Invoice Number",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error types for record construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// One or more required fields were blank
    #[error("{}", describe_missing(.0))]
    MissingFields(Vec<RequiredField>),
}

fn describe_missing(fields: &[RequiredField]) -> String {
    let labels: Vec<&str> = fields.iter().map(RequiredField::label).collect();
    match labels.as_slice() {
        [] => "Required fields are missing.".to_string(),
        [single] => format!("{} is required.", single),
        [init @ .., last] => format!("{} and {} are required.", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_messages() {
        let both = RecordError::MissingFields(vec![
            RequiredField::CustomerName,
            RequiredField::InvoiceNumber,
        ]);
        assert_eq!(
            both.to_string(),
            "Customer Name and Invoice Number are required."
        );

        let one = RecordError::MissingFields(vec![RequiredField::InvoiceNumber]);
        assert_eq!(one.to_string(), "Invoice Number is required.");
    }
}
