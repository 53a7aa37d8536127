use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::trace;

/// Date-only layouts accepted for an invoice date, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%Y%m%d"];

/// Date-time layouts; the time part is dropped.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses free-form date text the way the add form and imports supply it.
///
/// Returns `None` for blank or unrecognised input.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            trace!("Parsed '{}' with format {}", text, format);
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// The date field of an invoice record.
///
/// `Unparsed` only exists between insertion and the next recalculation,
/// which turns it into `Known` or `Missing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceDate {
    Known(NaiveDate),
    /// Raw input that has not been normalized yet
    Unparsed(String),
    Missing,
}

impl InvoiceDate {
    /// Builds the date for a new record. No input means today.
    pub fn from_input(input: Option<&str>, today: NaiveDate) -> Self {
        match input {
            None => InvoiceDate::Known(today),
            Some(text) => Self::parse(text),
        }
    }

    /// Parses text, keeping the raw input when it is not a date.
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return InvoiceDate::Missing;
        }
        match parse_date(text) {
            Some(date) => InvoiceDate::Known(date),
            None => InvoiceDate::Unparsed(text.to_string()),
        }
    }

    /// Resolves an `Unparsed` value to `Known` or `Missing`.
    ///
    /// Returns the raw text when it had to be discarded.
    pub fn normalize(&mut self) -> Option<String> {
        let InvoiceDate::Unparsed(raw) = self else {
            return None;
        };
        match parse_date(raw) {
            Some(date) => {
                *self = InvoiceDate::Known(date);
                None
            }
            None => {
                let raw = std::mem::take(raw);
                *self = InvoiceDate::Missing;
                Some(raw)
            }
        }
    }

    pub fn known(&self) -> Option<NaiveDate> {
        match self {
            InvoiceDate::Known(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.known().is_none()
    }

    /// Whole calendar days from this date to `today`; negative for future dates.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.known().map(|date| (today - date).num_days())
    }
}
