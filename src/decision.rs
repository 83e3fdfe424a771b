//! Merge rule violations and the doctor match into the final verdict.
//!
//! The `details` map is the payload the portal renders; its Dutch key set
//! and insertion order are an external contract and must not drift.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::matching::{MatchResult, MatchStatus};
use crate::messages::{Language, Messages};
use crate::models::{AttestationRecord, FraudType};

/// Display format for the processing timestamp.
const DISPLAY_DATETIME: &str = "%d-%m-%Y %H:%M:%S";

/// Final decision for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub message: String,
    pub fraud: bool,
    pub fraud_type: FraudType,
    /// Rule violations, also carried on rejection-for-fraud for audit.
    pub violations: Vec<String>,
    /// Ordered display fields (Dutch keys, portal contract).
    pub details: Map<String, Value>,
}

/// Build the verdict from the evaluation outcome.
///
/// Identity fraud overrides rule violations as the reported rejection
/// reason; the violations stay available in `violations` and the signature
/// flag in `details`.
pub fn build_verdict(
    record: &AttestationRecord,
    file_name: &str,
    violations: &[String],
    doctor: &MatchResult,
    case_id: Option<Uuid>,
    processed_at: NaiveDateTime,
    lang: Language,
) -> ValidationVerdict {
    let fraud = doctor.status.is_fraud();
    let valid = violations.is_empty() && !fraud;

    let mut details = Map::new();
    let put = |details: &mut Map<String, Value>, key: &str, value: &str| {
        details.insert(key.to_string(), Value::String(value.to_string()));
    };

    let status_label = if valid { "Goedgekeurd" } else { "Afgekeurd" };
    let patient_name = non_empty_or(&record.patient_name, &Messages::unknown(lang));
    let doctor_name = non_empty_or(&record.doctor.name, &Messages::unknown(lang));
    let riziv = non_empty_or(&record.doctor.riziv_number, &Messages::not_found(lang));

    put(&mut details, "Bestandsnaam", file_name);
    put(
        &mut details,
        "Verwerkt op",
        &processed_at.format(DISPLAY_DATETIME).to_string(),
    );
    put(&mut details, "Status", status_label);
    put(&mut details, "Patiënt", &patient_name);
    put(&mut details, "Rijksregisternummer", &record.patient_national_number);
    put(&mut details, "Geboortedatum", &record.patient_birth_date);
    put(&mut details, "Adres patiënt", &record.patient_address);
    put(
        &mut details,
        "Postcode en gemeente patiënt",
        &record.patient_postal_code_city,
    );
    put(&mut details, "Arts", &doctor_name);
    put(&mut details, "RIZIV Nummer", &riziv);
    put(&mut details, "Adres arts", &record.doctor.address);
    put(
        &mut details,
        "Postcode en gemeente arts",
        &record.doctor.postal_code_city,
    );
    put(&mut details, "Telefoonnummer arts", &record.doctor.phone);

    if let Some(case_id) = case_id {
        put(&mut details, "Zaak ID", &case_id.to_string());
    }

    if let Some(start) = record.incapacity_start_date.as_deref() {
        put(&mut details, "Onmogelijkheid vanaf", start);
    }
    if let Some(end) = record.incapacity_end_date.as_deref() {
        put(&mut details, "Onmogelijkheid tot", end);
    }
    if !record.summary.is_empty() {
        put(&mut details, "Samenvatting", &record.summary);
    }
    if let Some(allowed) = record.allowed_to_leave_house {
        let label = if allowed {
            Messages::yes(lang)
        } else {
            Messages::no(lang)
        };
        put(&mut details, "Mag huis verlaten", &label);
    }

    if valid {
        // A successful verification note is informational, never blocking.
        if doctor.doctor_found && !doctor.message.is_empty() {
            details.insert(
                "Waarschuwingen".to_string(),
                Value::Array(vec![Value::String(doctor.message.clone())]),
            );
        }

        return ValidationVerdict {
            valid: true,
            message: Messages::verdict_approved(lang),
            fraud: false,
            fraud_type: FraudType::None,
            violations: violations.to_vec(),
            details,
        };
    }

    let signature_label = if record.has_signature {
        Messages::yes(lang)
    } else {
        Messages::no(lang)
    };
    put(&mut details, "Handtekening", &signature_label);

    if fraud {
        put(&mut details, "Reden", &fraud_reason(doctor.status, lang));
        return ValidationVerdict {
            valid: false,
            message: Messages::verdict_rejected_fraud(lang),
            fraud: true,
            fraud_type: doctor.status.fraud_type(),
            violations: violations.to_vec(),
            details,
        };
    }

    details.insert(
        "Fouten".to_string(),
        Value::Array(
            violations
                .iter()
                .map(|v| Value::String(v.clone()))
                .collect(),
        ),
    );

    ValidationVerdict {
        valid: false,
        message: Messages::verdict_rejected(lang),
        fraud: false,
        fraud_type: FraudType::None,
        violations: violations.to_vec(),
        details,
    }
}

/// Localized rejection reason for an identity-fraud verdict.
pub fn fraud_reason(status: MatchStatus, lang: Language) -> String {
    match status {
        MatchStatus::NameMismatch => Messages::fraud_reason_name_mismatch(lang),
        _ => Messages::fraud_reason_not_found(lang),
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
