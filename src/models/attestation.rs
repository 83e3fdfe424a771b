use serde::{Deserialize, Serialize};

/// Structured data extracted from one absence certificate.
///
/// Extraction never fails: fields the analyzer did not detect keep their
/// defaults, so an empty string means "not extracted" and an absent date is
/// distinct from an unparseable one (the raw date text is kept as extracted).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttestationRecord {
    pub patient_name: String,
    pub patient_national_number: String,
    pub patient_birth_date: String,
    pub patient_address: String,
    pub patient_postal_code_city: String,
    /// ISO date text as extracted, None when the field was not detected.
    pub incapacity_start_date: Option<String>,
    pub incapacity_end_date: Option<String>,
    pub certificate_date: Option<String>,
    pub has_signature: bool,
    pub allowed_to_leave_house: Option<bool>,
    pub doctor: DoctorClaim,
    pub summary: String,
}

/// Doctor identity as claimed on the document. Empty string = not extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorClaim {
    pub name: String,
    pub riziv_number: String,
    pub address: String,
    pub postal_code_city: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_fully_empty() {
        let record = AttestationRecord::default();
        assert_eq!(record.patient_name, "");
        assert!(record.incapacity_start_date.is_none());
        assert!(record.incapacity_end_date.is_none());
        assert!(record.certificate_date.is_none());
        assert!(!record.has_signature);
        assert!(record.allowed_to_leave_house.is_none());
        assert_eq!(record.doctor, DoctorClaim::default());
    }
}
