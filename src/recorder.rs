//! Fraud case synthesis for rejected submissions.
//!
//! Any rejection produces a case, identity fraud or not. Priority comes
//! from an ordered rule table evaluated top-down, first match wins; the
//! keyword rows cover every supported locale so precedence stays auditable.
//! Case insertion is advisory: a failed insert is logged and the verdict is
//! returned without a case identifier.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::messages::{Language, Messages};
use crate::models::{AttestationRecord, CaseStatus, FraudCase, RizivMatchStatus};

/// Fixed submission metadata for cases opened by the portal flow.
const SUBMISSION_CHANNEL: &str = "Online Portaal";
const SUBMITTER_COMPANY: &str = "Automatisch Systeem";
const DOCUMENT_TYPE: &str = "Afwezigheidsattest";

/// Write access to the external fraud case store.
pub trait FraudCaseRepository {
    fn insert(&self, case: &FraudCase) -> Result<(), DatabaseError>;
}

enum PriorityReason {
    DoctorUnknown,
    SignatureMissing,
}

struct PriorityRule {
    keywords: &'static [&'static str],
    score: i64,
    reason: PriorityReason,
}

/// Ordered priority table. An unverified doctor outranks a missing
/// signature; anything else is medium priority with the reason passed
/// through unchanged.
const PRIORITY_RULES: &[PriorityRule] = &[
    PriorityRule {
        keywords: &["niet gevonden", "non trouvé", "not found"],
        score: 8,
        reason: PriorityReason::DoctorUnknown,
    },
    PriorityRule {
        keywords: &["handtekening", "signature"],
        score: 6,
        reason: PriorityReason::SignatureMissing,
    },
];

const DEFAULT_PRIORITY_SCORE: i64 = 5;

/// Score a rejection reason. Returns (score, priority reason).
pub(crate) fn priority_for(reason: &str, lang: Language) -> (i64, String) {
    let lower = reason.to_lowercase();
    for rule in PRIORITY_RULES {
        if rule.keywords.iter().any(|k| lower.contains(k)) {
            let text = match rule.reason {
                PriorityReason::DoctorUnknown => Messages::priority_doctor_unknown(lang),
                PriorityReason::SignatureMissing => Messages::priority_signature_missing(lang),
            };
            return (rule.score, text);
        }
    }
    (DEFAULT_PRIORITY_SCORE, reason.to_string())
}

/// Synthesize a fraud case for a rejected submission. A fresh case_id per
/// call; resubmissions of the same document open new cases.
pub fn build_fraud_case(
    record: &AttestationRecord,
    reason: &str,
    doctor_found: bool,
    now: NaiveDateTime,
    lang: Language,
) -> FraudCase {
    let (priority_score, priority_reason) = priority_for(reason, lang);

    FraudCase {
        case_id: Uuid::new_v4(),
        submission_date: now,
        submission_channel: SUBMISSION_CHANNEL.into(),
        submitter_company: SUBMITTER_COMPANY.into(),
        document_type: DOCUMENT_TYPE.into(),
        claimed_riziv_number: record.doctor.riziv_number.trim().to_string(),
        claimed_doctor_name: record.doctor.name.trim().to_string(),
        claimed_start_date: record.incapacity_start_date.clone(),
        claimed_end_date: record.incapacity_end_date.clone(),
        patient_identifier: record.patient_national_number.clone(),
        riziv_match_status: if doctor_found {
            RizivMatchStatus::Found
        } else {
            RizivMatchStatus::NotFound
        },
        document_anomalies: reason.to_string(),
        priority_score,
        priority_reason,
        case_status: CaseStatus::New,
        created_at: now,
        updated_at: now,
    }
}

/// Build and insert a case, degrading to no case id when the store is
/// unavailable. Never blocks the verdict.
pub fn record_fraud_case(
    repository: &impl FraudCaseRepository,
    record: &AttestationRecord,
    reason: &str,
    doctor_found: bool,
    now: NaiveDateTime,
    lang: Language,
) -> Option<Uuid> {
    let case = build_fraud_case(record, reason, doctor_found, now, lang);
    match repository.insert(&case) {
        Ok(()) => {
            tracing::info!(case_id = %case.case_id, priority = case.priority_score, "fraud case recorded");
            Some(case.case_id)
        }
        Err(error) => {
            tracing::error!(%error, "could not record fraud case, returning verdict without case id");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DoctorClaim;
    use std::cell::RefCell;

    struct MemoryStore {
        cases: RefCell<Vec<FraudCase>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                cases: RefCell::new(Vec::new()),
            }
        }
    }

    impl FraudCaseRepository for MemoryStore {
        fn insert(&self, case: &FraudCase) -> Result<(), DatabaseError> {
            self.cases.borrow_mut().push(case.clone());
            Ok(())
        }
    }

    struct BrokenStore;

    impl FraudCaseRepository for BrokenStore {
        fn insert(&self, _case: &FraudCase) -> Result<(), DatabaseError> {
            Err(DatabaseError::MigrationFailed {
                version: 0,
                reason: "store unavailable".into(),
            })
        }
    }

    fn now() -> NaiveDateTime {
        "2026-08-08T14:30:00".parse().unwrap()
    }

    fn record() -> AttestationRecord {
        AttestationRecord {
            patient_national_number: "85.07.30-033.61".into(),
            incapacity_start_date: Some("2026-08-01".into()),
            incapacity_end_date: Some("2026-08-15".into()),
            doctor: DoctorClaim {
                name: "Dr. Jan Peeters".into(),
                riziv_number: "12345-67".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    // ── Priority table ──────────────────────────────────────────────

    #[test]
    fn unverified_doctor_reason_scores_high() {
        let (score, reason) = priority_for(
            "Arts niet gevonden in geregistreerde artsen database",
            Language::Nl,
        );
        assert_eq!(score, 8);
        assert_eq!(reason, "Arts niet in database - mogelijk fraude");
    }

    #[test]
    fn missing_signature_reason_scores_medium_high() {
        let (score, reason) = priority_for(
            "Er ontbreekt een handtekening van de arts op het document",
            Language::Nl,
        );
        assert_eq!(score, 6);
        assert_eq!(reason, "Ontbrekende handtekening");
    }

    #[test]
    fn other_reasons_score_default_and_pass_through() {
        let (score, reason) =
            priority_for("Onmogelijheid startdatum ligt in de toekomst: 01-01-2027", Language::Nl);
        assert_eq!(score, 5);
        assert_eq!(reason, "Onmogelijheid startdatum ligt in de toekomst: 01-01-2027");
    }

    #[test]
    fn doctor_rule_wins_over_signature_rule() {
        // A combined reason mentions both; the table is ordered, first wins.
        let (score, _) = priority_for(
            "Arts niet gevonden in geregistreerde artsen database; Er ontbreekt een handtekening",
            Language::Nl,
        );
        assert_eq!(score, 8);
    }

    #[test]
    fn priority_keywords_cover_french_and_english() {
        let (score, _) = priority_for(
            "Médecin non trouvé dans la base de données des médecins enregistrés",
            Language::Fr,
        );
        assert_eq!(score, 8);

        let (score, _) = priority_for(
            "The doctor's signature is missing on the document",
            Language::En,
        );
        assert_eq!(score, 6);
    }

    // ── Case synthesis ──────────────────────────────────────────────

    #[test]
    fn case_carries_claim_and_window() {
        let case = build_fraud_case(&record(), "reden", false, now(), Language::Nl);
        assert_eq!(case.claimed_riziv_number, "12345-67");
        assert_eq!(case.claimed_doctor_name, "Dr. Jan Peeters");
        assert_eq!(case.claimed_start_date.as_deref(), Some("2026-08-01"));
        assert_eq!(case.claimed_end_date.as_deref(), Some("2026-08-15"));
        assert_eq!(case.patient_identifier, "85.07.30-033.61");
        assert_eq!(case.document_anomalies, "reden");
        assert_eq!(case.case_status, CaseStatus::New);
        assert_eq!(case.submission_channel, "Online Portaal");
        assert_eq!(case.submitter_company, "Automatisch Systeem");
        assert_eq!(case.document_type, "Afwezigheidsattest");
        assert_eq!(case.submission_date, now());
        assert_eq!(case.created_at, now());
        assert_eq!(case.updated_at, now());
    }

    #[test]
    fn match_status_reflects_doctor_found() {
        let found = build_fraud_case(&record(), "reden", true, now(), Language::Nl);
        assert_eq!(found.riziv_match_status, RizivMatchStatus::Found);

        let not_found = build_fraud_case(&record(), "reden", false, now(), Language::Nl);
        assert_eq!(not_found.riziv_match_status, RizivMatchStatus::NotFound);
    }

    #[test]
    fn every_case_gets_a_fresh_id() {
        let a = build_fraud_case(&record(), "reden", false, now(), Language::Nl);
        let b = build_fraud_case(&record(), "reden", false, now(), Language::Nl);
        assert_ne!(a.case_id, b.case_id);
    }

    // ── Recording ───────────────────────────────────────────────────

    #[test]
    fn recording_returns_the_case_id() {
        let store = MemoryStore::new();
        let id = record_fraud_case(&store, &record(), "reden", false, now(), Language::Nl);
        assert!(id.is_some());

        let cases = store.cases.borrow();
        assert_eq!(cases.len(), 1);
        assert_eq!(Some(cases[0].case_id), id);
    }

    #[test]
    fn broken_store_degrades_to_no_case_id() {
        let id = record_fraud_case(&BrokenStore, &record(), "reden", false, now(), Language::Nl);
        assert!(id.is_none());
    }
}
