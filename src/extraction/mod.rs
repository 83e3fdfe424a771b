//! Field extraction: analyzer payload -> [`AttestationRecord`].
//!
//! A declared mapping table ties each analyzer field name to its target
//! attribute and value kind. Absent or unrecognized fields leave the
//! record's default in place; a payload with no content items at all is a
//! normal empty result, not an error.

pub mod types;

pub use types::*;

use crate::models::AttestationRecord;

/// Value kind an analyzer field is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Boolean,
}

/// Target attribute on [`AttestationRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    PatientName,
    PatientNationalNumber,
    PatientBirthDate,
    PatientAddress,
    PatientPostalCodeCity,
    IncapacityStartDate,
    IncapacityEndDate,
    CertificateDate,
    HasSignature,
    AllowedToLeaveHouse,
    DoctorName,
    DoctorRiziv,
    DoctorAddress,
    DoctorPostalCodeCity,
    DoctorPhone,
    Summary,
}

pub struct FieldMapping {
    pub source: &'static str,
    pub kind: FieldKind,
    pub target: Target,
}

/// Every field name the engine recognizes in the analyzer output.
pub const FIELD_MAP: &[FieldMapping] = &[
    FieldMapping { source: "PatientName", kind: FieldKind::Text, target: Target::PatientName },
    FieldMapping { source: "PatientNationalNumber", kind: FieldKind::Text, target: Target::PatientNationalNumber },
    FieldMapping { source: "PatientBirthDate", kind: FieldKind::Date, target: Target::PatientBirthDate },
    FieldMapping { source: "PatientAddress", kind: FieldKind::Text, target: Target::PatientAddress },
    FieldMapping { source: "PatientPostalCodeCity", kind: FieldKind::Text, target: Target::PatientPostalCodeCity },
    FieldMapping { source: "IncapacityStartDate", kind: FieldKind::Date, target: Target::IncapacityStartDate },
    FieldMapping { source: "IncapacityEndDate", kind: FieldKind::Date, target: Target::IncapacityEndDate },
    FieldMapping { source: "CertificateDate", kind: FieldKind::Date, target: Target::CertificateDate },
    FieldMapping { source: "DoctorHasSigned", kind: FieldKind::Boolean, target: Target::HasSignature },
    FieldMapping { source: "IsAllowedToLeaveHouse", kind: FieldKind::Boolean, target: Target::AllowedToLeaveHouse },
    FieldMapping { source: "DoctorName", kind: FieldKind::Text, target: Target::DoctorName },
    FieldMapping { source: "DoctorRizivNumber", kind: FieldKind::Text, target: Target::DoctorRiziv },
    FieldMapping { source: "DoctorAddress", kind: FieldKind::Text, target: Target::DoctorAddress },
    FieldMapping { source: "DoctorPostalCodeCity", kind: FieldKind::Text, target: Target::DoctorPostalCodeCity },
    FieldMapping { source: "DoctorPhoneNumber", kind: FieldKind::Text, target: Target::DoctorPhone },
    FieldMapping { source: "Summary", kind: FieldKind::Text, target: Target::Summary },
];

/// Map an analyzer result onto a flat attestation record.
pub fn extract_document_info(analysis: &AnalysisResult) -> AttestationRecord {
    let mut record = AttestationRecord::default();

    let Some(content) = analysis.result.contents.first() else {
        tracing::warn!("no content items in analyzer result, returning defaulted record");
        return record;
    };

    tracing::info!(field_count = content.fields.len(), "extracting structured fields");

    for mapping in FIELD_MAP {
        if let Some(value) = content.fields.get(mapping.source) {
            assign(&mut record, mapping, value);
        }
    }

    tracing::info!(
        patient = %record.patient_name,
        doctor = %record.doctor.name,
        riziv = %record.doctor.riziv_number,
        has_signature = record.has_signature,
        "extracted attestation record"
    );

    record
}

fn assign(record: &mut AttestationRecord, mapping: &FieldMapping, value: &FieldValue) {
    // The analyzer's confidence is carried on `value` but never consulted:
    // the detected value is used as-is.
    let text = || value.value_string.clone().unwrap_or_default();
    let date = || value.value_date.clone();

    match mapping.target {
        Target::PatientName => record.patient_name = text(),
        Target::PatientNationalNumber => record.patient_national_number = text(),
        Target::PatientBirthDate => record.patient_birth_date = date().unwrap_or_default(),
        Target::PatientAddress => record.patient_address = text(),
        Target::PatientPostalCodeCity => record.patient_postal_code_city = text(),
        Target::IncapacityStartDate => record.incapacity_start_date = date(),
        Target::IncapacityEndDate => record.incapacity_end_date = date(),
        Target::CertificateDate => record.certificate_date = date(),
        Target::HasSignature => record.has_signature = value.value_boolean.unwrap_or(false),
        Target::AllowedToLeaveHouse => record.allowed_to_leave_house = value.value_boolean,
        Target::DoctorName => record.doctor.name = text(),
        Target::DoctorRiziv => record.doctor.riziv_number = text(),
        Target::DoctorAddress => record.doctor.address = text(),
        Target::DoctorPostalCodeCity => record.doctor.postal_code_city = text(),
        Target::DoctorPhone => record.doctor.phone = text(),
        Target::Summary => record.summary = text(),
    }
}
