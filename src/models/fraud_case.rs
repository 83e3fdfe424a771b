use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{CaseStatus, RizivMatchStatus};

/// Audit record created for any rejected submission.
///
/// "Fraud case" is the portal's generic term for a rejection record, not
/// proof of actual fraud. A fresh case_id is generated per submission; there
/// is deliberately no dedup across resubmissions of the same document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudCase {
    pub case_id: Uuid,
    pub submission_date: NaiveDateTime,
    pub submission_channel: String,
    pub submitter_company: String,
    pub document_type: String,
    pub claimed_riziv_number: String,
    pub claimed_doctor_name: String,
    /// Claimed incapacity window, raw date text as extracted.
    pub claimed_start_date: Option<String>,
    pub claimed_end_date: Option<String>,
    pub patient_identifier: String,
    pub riziv_match_status: RizivMatchStatus,
    /// Concatenated violation/fraud reasons.
    pub document_anomalies: String,
    pub priority_score: i64,
    pub priority_reason: String,
    pub case_status: CaseStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
