//! Orchestration: rules + doctor matching -> verdict, with a fraud case
//! recorded for every rejection.
//!
//! The engine holds no state of its own between invocations; given the same
//! record and an unchanged registry snapshot it produces the same verdict.
//! Collaborators are injected by the caller, one attempt per call, failures
//! surfaced through the error taxonomy. Case creation alone recovers
//! locally: the verdict is always returned, with or without a case id.

use chrono::{Local, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::decision::{self, ValidationVerdict};
use crate::error::{classify_database_error, EngineError, DOCTOR_REGISTRY, FRAUD_CASE_STORE};
use crate::matching::{match_doctor, DoctorRegistry, MatchResult};
use crate::messages::Language;
use crate::models::{AttestationRecord, FraudCase};
use crate::recorder::{self, FraudCaseRepository};
use crate::rules::validate_attestation_rules;

/// Intermediate evaluation outcome: rule violations plus the doctor match.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub violations: Vec<String>,
    pub doctor: MatchResult,
}

impl Evaluation {
    pub fn rejecting(&self) -> bool {
        self.doctor.status.is_fraud() || !self.violations.is_empty()
    }

    /// Rejection reason as recorded on the fraud case: the identity-fraud
    /// reason when fraud was detected, otherwise the joined violations.
    pub fn rejection_reason(&self, lang: Language) -> String {
        if self.doctor.status.is_fraud() {
            decision::fraud_reason(self.doctor.status, lang)
        } else {
            self.violations.join("; ")
        }
    }
}

/// The validation engine over injected collaborators.
pub struct Engine<'a, R: DoctorRegistry, C: FraudCaseRepository> {
    registry: &'a R,
    cases: &'a C,
    language: Language,
}

impl<'a, R: DoctorRegistry, C: FraudCaseRepository> Engine<'a, R, C> {
    pub fn new(registry: &'a R, cases: &'a C, language: Language) -> Self {
        Self {
            registry,
            cases,
            language,
        }
    }

    /// Evaluate one record against the rules and the registry. Pure given a
    /// registry snapshot; no case is recorded.
    pub fn evaluate(
        &self,
        record: &AttestationRecord,
        today: NaiveDate,
    ) -> Result<Evaluation, EngineError> {
        let violations = validate_attestation_rules(record, today, self.language);
        let doctor = match_doctor(&record.doctor, self.registry, self.language)
            .map_err(|e| classify_database_error(DOCTOR_REGISTRY, e))?;

        Ok(Evaluation { violations, doctor })
    }

    /// Full workflow for one submission: evaluate, record a case when
    /// rejecting, build the verdict.
    pub fn process(
        &self,
        record: &AttestationRecord,
        file_name: &str,
        now: NaiveDateTime,
    ) -> Result<ValidationVerdict, EngineError> {
        let evaluation = self.evaluate(record, now.date())?;

        let mut case_id: Option<Uuid> = None;
        if evaluation.rejecting() {
            let reason = evaluation.rejection_reason(self.language);
            case_id = recorder::record_fraud_case(
                self.cases,
                record,
                &reason,
                evaluation.doctor.doctor_found,
                now,
                self.language,
            );
            if let Some(case_id) = case_id {
                tracing::info!(%case_id, file_name, "fraud case created for rejection");
            }
        }

        Ok(decision::build_verdict(
            record,
            file_name,
            &evaluation.violations,
            &evaluation.doctor,
            case_id,
            now,
            self.language,
        ))
    }

    /// Convenience wrapper over [`Engine::process`] stamped with the wall
    /// clock.
    pub fn process_now(
        &self,
        record: &AttestationRecord,
        file_name: &str,
    ) -> Result<ValidationVerdict, EngineError> {
        self.process(record, file_name, Local::now().naive_local())
    }

    /// Record a case for an already-evaluated rejection, surfacing the
    /// store failure instead of degrading. Used by callers that retry case
    /// creation out of band.
    pub fn record_case(
        &self,
        record: &AttestationRecord,
        evaluation: &Evaluation,
        now: NaiveDateTime,
    ) -> Result<FraudCase, EngineError> {
        let reason = evaluation.rejection_reason(self.language);
        let case = recorder::build_fraud_case(
            record,
            &reason,
            evaluation.doctor.doctor_found,
            now,
            self.language,
        );
        self.cases
            .insert(&case)
            .map_err(|e| classify_database_error(FRAUD_CASE_STORE, e))?;
        Ok(case)
    }
}
