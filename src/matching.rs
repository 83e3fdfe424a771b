//! Tiered doctor-identity matching against the RIZIV registry.
//!
//! Tier 1: exact RIZIV lookup with name consistency check.
//! Tier 2: last-name fallback, refined by the city taken from the claimed
//! address when one can be extracted.
//! Tier 3: nothing resolved — the claim is flagged as fraud.
//!
//! First successful tier wins. A RIZIV hit with a mismatching name is
//! terminal: tier 2 is not consulted for it.

use serde::{Deserialize, Serialize};

use crate::db::DatabaseError;
use crate::messages::{Language, Messages};
use crate::models::{DoctorClaim, FraudType, RegisteredDoctor};

/// Read-only query capability over the registered-doctor registry.
///
/// Name lookups are case-insensitive substring matches (SQL `LIKE '%x%'`).
pub trait DoctorRegistry {
    fn lookup_by_riziv(&self, riziv: &str) -> Result<Option<RegisteredDoctor>, DatabaseError>;

    fn lookup_by_last_name(&self, last_name: &str)
        -> Result<Vec<RegisteredDoctor>, DatabaseError>;

    fn lookup_by_last_name_and_city(
        &self,
        last_name: &str,
        city: &str,
    ) -> Result<Vec<RegisteredDoctor>, DatabaseError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    VerifiedByRiziv,
    VerifiedByNameCity,
    VerifiedByName,
    NameMismatch,
    NotFound,
}

impl MatchStatus {
    pub fn is_fraud(&self) -> bool {
        matches!(self, MatchStatus::NameMismatch | MatchStatus::NotFound)
    }

    pub fn fraud_type(&self) -> FraudType {
        match self {
            MatchStatus::NameMismatch => FraudType::NameMismatch,
            MatchStatus::NotFound => FraudType::NotFound,
            _ => FraudType::None,
        }
    }
}

/// Outcome of resolving one claim against the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub status: MatchStatus,
    /// Registry row backing a tier-1 verification. Name-tier verifications
    /// match on the query alone and carry no entry.
    pub matched: Option<RegisteredDoctor>,
    /// Whether the doctor counts as found for the audit record. False for a
    /// name mismatch even though a registry row existed.
    pub doctor_found: bool,
    pub message: String,
}

/// Title words stripped from claimed names before token comparison.
const TITLE_WORDS: &[&str] = &["DR", "ARTS", "DOCTOR"];

/// Split a claimed name into comparison tokens: punctuation stripped (name
/// connectors kept), title words dropped. Tokens keep their original case.
fn name_tokens(name: &str) -> Vec<String> {
    name.split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '\'')
                .collect::<String>()
        })
        .filter(|token| {
            !token.is_empty() && !TITLE_WORDS.contains(&token.to_uppercase().as_str())
        })
        .collect()
}

fn contains_token(tokens: &[String], word: &str) -> bool {
    let word = word.to_uppercase();
    tokens.iter().any(|t| t.to_uppercase() == word)
}

/// Check the claimed name against the registry row. With a first name on
/// file both first and last name must appear among the claim tokens (and the
/// claim needs at least two tokens); without one, the last name alone
/// suffices.
fn claim_matches_registry_name(tokens: &[String], doctor: &RegisteredDoctor) -> bool {
    let last_name = doctor.last_name.trim();
    if last_name.is_empty() {
        return false;
    }

    match doctor.first_name.as_deref().map(str::trim) {
        Some(first_name) if !first_name.is_empty() => {
            tokens.len() >= 2
                && contains_token(tokens, first_name)
                && contains_token(tokens, last_name)
        }
        _ => contains_token(tokens, last_name),
    }
}

/// City claimed in an address: the text after the last comma. A comma-less
/// address has no extractable city.
fn city_from_address(address: &str) -> Option<String> {
    let (_, tail) = address.rsplit_once(',')?;
    let city = tail.trim();
    if city.is_empty() {
        None
    } else {
        Some(city.to_string())
    }
}

/// Resolve a doctor claim against the registry.
pub fn match_doctor(
    claim: &DoctorClaim,
    registry: &impl DoctorRegistry,
    lang: Language,
) -> Result<MatchResult, DatabaseError> {
    let riziv = claim.riziv_number.trim();
    let claimed_name = claim.name.trim();

    tracing::info!(riziv, name = claimed_name, "matching doctor claim");

    // Tier 1: exact RIZIV match.
    if !riziv.is_empty() {
        if let Some(doctor) = registry.lookup_by_riziv(riziv)? {
            let tokens = name_tokens(claimed_name);
            if claim_matches_registry_name(&tokens, &doctor) {
                tracing::info!(riziv, "doctor verified by RIZIV, name consistent");
                return Ok(MatchResult {
                    status: MatchStatus::VerifiedByRiziv,
                    message: Messages::doctor_verified_riziv(lang, riziv),
                    matched: Some(doctor),
                    doctor_found: true,
                });
            }

            let registered_name = doctor.full_name();
            tracing::error!(
                riziv,
                claimed = claimed_name,
                registered = %registered_name,
                "RIZIV exists but claimed name does not match"
            );
            return Ok(MatchResult {
                status: MatchStatus::NameMismatch,
                matched: None,
                doctor_found: false,
                message: Messages::fraud_name_mismatch(lang, claimed_name, &registered_name),
            });
        }
        tracing::warn!(riziv, "RIZIV number not in registry");
    }

    // Tier 2: last-name fallback, only reached when the RIZIV resolved
    // nothing. Needs at least a two-token name to isolate a surname.
    let tokens = name_tokens(claimed_name);
    if tokens.len() >= 2 {
        let surname = &tokens[tokens.len() - 1];
        let candidates = registry.lookup_by_last_name(surname)?;

        if !candidates.is_empty() {
            match city_from_address(claim.address.trim()) {
                Some(city) => {
                    let refined = registry.lookup_by_last_name_and_city(surname, &city)?;
                    if !refined.is_empty() {
                        tracing::info!(name = claimed_name, %city, "doctor verified by name and city");
                        return Ok(MatchResult {
                            status: MatchStatus::VerifiedByNameCity,
                            matched: None,
                            doctor_found: true,
                            message: Messages::doctor_verified_name_city(lang, claimed_name),
                        });
                    }
                    // City refinement failed: the unrefined last-name match
                    // is discarded entirely, not used as a weaker
                    // verification.
                    tracing::warn!(name = claimed_name, %city, "city refinement discarded last-name match");
                }
                None => {
                    tracing::info!(name = claimed_name, "doctor verified by name");
                    return Ok(MatchResult {
                        status: MatchStatus::VerifiedByName,
                        matched: None,
                        doctor_found: true,
                        message: Messages::doctor_verified_name(lang, claimed_name),
                    });
                }
            }
        }
    }

    // Tier 3: exhausted.
    let mut message = Messages::fraud_detected(lang);
    if !riziv.is_empty() {
        message.push_str(&format!(" (RIZIV: {riziv})"));
    } else if !claimed_name.is_empty() {
        message.push_str(&format!(" (Naam: {claimed_name})"));
    }
    tracing::error!(riziv, name = claimed_name, "doctor not found in registry");

    Ok(MatchResult {
        status: MatchStatus::NotFound,
        matched: None,
        doctor_found: false,
        message,
    })
}
