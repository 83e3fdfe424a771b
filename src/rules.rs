//! Business rules over an extracted attestation record.
//!
//! Every rule is evaluated independently; a record can collect several
//! violations in one pass. Unparseable date text is logged and treated as if
//! the field were absent — it does not produce a violation.

use chrono::NaiveDate;

use crate::messages::{Language, Messages};
use crate::models::AttestationRecord;

/// Display format for dates embedded in violation messages.
const DISPLAY_DATE: &str = "%d-%m-%Y";

/// Validate date sanity and signature presence. Returns the ordered list of
/// violation messages, empty when the record passes.
pub fn validate_attestation_rules(
    record: &AttestationRecord,
    today: NaiveDate,
    lang: Language,
) -> Vec<String> {
    let mut violations = Vec::new();

    if let Some(start) = parse_extracted_date(record.incapacity_start_date.as_deref(), "incapacity_start_date") {
        if start > today {
            violations.push(Messages::validation_start_date_future(
                lang,
                &start.format(DISPLAY_DATE).to_string(),
            ));
        }
    }

    // A future end date is permitted: it represents an open-ended
    // certificate. Still parsed so malformed text gets logged.
    parse_extracted_date(record.incapacity_end_date.as_deref(), "incapacity_end_date");

    if let Some(cert) = parse_extracted_date(record.certificate_date.as_deref(), "certificate_date") {
        if cert > today {
            violations.push(Messages::validation_cert_date_future(
                lang,
                &cert.format(DISPLAY_DATE).to_string(),
            ));
        }
    }

    if !record.has_signature {
        violations.push(Messages::validation_signature_missing(lang));
    }

    violations
}

/// Parse ISO date text from the analyzer. Malformed text is logged and
/// treated as absent.
fn parse_extracted_date(raw: Option<&str>, field: &str) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(error) => {
            tracing::warn!(field, raw, %error, "could not parse extracted date");
            None
        }
    }
}
