//! Localized user-facing messages (nl/fr/en).
//!
//! One typed builder function per message key, dispatching on [`Language`].
//! Parameters are function arguments, so a template and its parameters can
//! never drift apart at runtime. Dutch is the guaranteed fallback locale:
//! unknown language codes parse to `Nl`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Nl,
    Fr,
    En,
}

impl Language {
    /// Parse a language code. Anything unrecognized falls back to Dutch.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Language::Fr,
            "en" => Language::En,
            _ => Language::Nl,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Nl => "nl",
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

/// Localized message builder for the validation engine.
pub struct Messages;

impl Messages {
    // ── Doctor verification ─────────────────────────────────────────

    pub fn doctor_verified_riziv(lang: Language, riziv: &str) -> String {
        match lang {
            Language::Fr => format!("Médecin vérifié via numéro INAMI: {riziv}"),
            Language::En => format!("Doctor verified via RIZIV number: {riziv}"),
            Language::Nl => format!("Arts geverifieerd via RIZIV nummer: {riziv}"),
        }
    }

    pub fn doctor_verified_name_city(lang: Language, name: &str) -> String {
        match lang {
            Language::Fr => format!("Médecin vérifié via nom et ville: {name}"),
            Language::En => format!("Doctor verified via name and city: {name}"),
            Language::Nl => format!("Arts geverifieerd via naam en stad: {name}"),
        }
    }

    pub fn doctor_verified_name(lang: Language, name: &str) -> String {
        match lang {
            Language::Fr => format!("Médecin vérifié via nom: {name}"),
            Language::En => format!("Doctor verified via name: {name}"),
            Language::Nl => format!("Arts geverifieerd via naam: {name}"),
        }
    }

    pub fn fraud_detected(lang: Language) -> String {
        match lang {
            Language::Fr => {
                "⚠️ FRAUDE DÉTECTÉE: Médecin non trouvé dans la base de données des médecins enregistrés".into()
            }
            Language::En => {
                "⚠️ FRAUD DETECTED: Doctor not found in registered doctors database".into()
            }
            Language::Nl => {
                "⚠️ FRAUDE GEDETECTEERD: Arts niet gevonden in geregistreerde artsendatabase".into()
            }
        }
    }

    pub fn fraud_name_mismatch(lang: Language, doc_name: &str, db_name: &str) -> String {
        match lang {
            Language::Fr => format!(
                "⚠️ FRAUDE DÉTECTÉE: Numéro INAMI existe mais le nom ne correspond pas (Document: {doc_name}, Base de données: {db_name})"
            ),
            Language::En => format!(
                "⚠️ FRAUD DETECTED: RIZIV number exists but name does not match (Document: {doc_name}, Database: {db_name})"
            ),
            Language::Nl => format!(
                "⚠️ FRAUDE GEDETECTEERD: RIZIV nummer bestaat maar naam komt niet overeen (Document: {doc_name}, Database: {db_name})"
            ),
        }
    }

    // ── Rejection reasons (fraud case + details map) ────────────────

    pub fn fraud_reason_not_found(lang: Language) -> String {
        match lang {
            Language::Fr => {
                "Médecin non trouvé dans la base de données des médecins enregistrés".into()
            }
            Language::En => "Doctor not found in registered doctors database".into(),
            Language::Nl => "Arts niet gevonden in geregistreerde artsen database".into(),
        }
    }

    pub fn fraud_reason_name_mismatch(lang: Language) -> String {
        match lang {
            Language::Fr => {
                "Numéro INAMI valide mais le nom du médecin ne correspond pas à la base de données"
                    .into()
            }
            Language::En => {
                "RIZIV number valid but doctor name does not match database".into()
            }
            Language::Nl => {
                "RIZIV nummer geldig maar arts naam komt niet overeen met database".into()
            }
        }
    }

    // ── Verdict messages ────────────────────────────────────────────

    pub fn verdict_approved(lang: Language) -> String {
        match lang {
            Language::Fr => "Votre certificat d'absence est valide et approuvé.".into(),
            Language::En => "Your absence certificate is valid and has been approved.".into(),
            Language::Nl => "Uw afwezigheidsattest is geldig en goedgekeurd.".into(),
        }
    }

    pub fn verdict_rejected_fraud(lang: Language) -> String {
        match lang {
            Language::Fr => {
                "Le document est rejeté. Le médecin n'a pas pu être vérifié dans notre base de données des médecins enregistrés.".into()
            }
            Language::En => {
                "The document has been rejected. The doctor could not be verified in our database of registered doctors.".into()
            }
            Language::Nl => {
                "Het document is afgekeurd. De arts kon niet worden geverifieerd in onze database van geregistreerde artsen.".into()
            }
        }
    }

    pub fn verdict_rejected(lang: Language) -> String {
        match lang {
            Language::Fr => "Votre certificat d'absence n'a pas pu être approuvé.".into(),
            Language::En => "Your absence certificate could not be approved.".into(),
            Language::Nl => "Uw afwezigheidsattest kon niet worden goedgekeurd.".into(),
        }
    }

    // ── Rule violations ─────────────────────────────────────────────

    pub fn validation_signature_missing(lang: Language) -> String {
        match lang {
            Language::Fr => "La signature du médecin est manquante sur le document".into(),
            Language::En => "The doctor's signature is missing on the document".into(),
            Language::Nl => "Er ontbreekt een handtekening van de arts op het document".into(),
        }
    }

    pub fn validation_start_date_future(lang: Language, date: &str) -> String {
        match lang {
            Language::Fr => format!("La date de début d'incapacité est dans le futur: {date}"),
            Language::En => format!("Incapacity start date is in the future: {date}"),
            Language::Nl => format!("Onmogelijheid startdatum ligt in de toekomst: {date}"),
        }
    }

    pub fn validation_cert_date_future(lang: Language, date: &str) -> String {
        match lang {
            Language::Fr => format!("La date du certificat est dans le futur: {date}"),
            Language::En => format!("Certificate date is in the future: {date}"),
            Language::Nl => format!("Certificaat datum ligt in de toekomst: {date}"),
        }
    }

    // ── Fraud case priority reasons ─────────────────────────────────

    pub fn priority_doctor_unknown(lang: Language) -> String {
        match lang {
            Language::Fr => "Médecin absent de la base de données - fraude possible".into(),
            Language::En => "Doctor not in database - possible fraud".into(),
            Language::Nl => "Arts niet in database - mogelijk fraude".into(),
        }
    }

    pub fn priority_signature_missing(lang: Language) -> String {
        match lang {
            Language::Fr => "Signature manquante".into(),
            Language::En => "Missing signature".into(),
            Language::Nl => "Ontbrekende handtekening".into(),
        }
    }

    // ── Configuration ───────────────────────────────────────────────

    pub fn db_config_missing(lang: Language) -> String {
        match lang {
            Language::Fr => {
                "Configuration de base de données manquante - impossible d'effectuer la validation"
                    .into()
            }
            Language::En => "Database configuration missing - cannot perform validation".into(),
            Language::Nl => "Database configuratie ontbreekt - kan validatie niet uitvoeren".into(),
        }
    }

    // ── Field labels ────────────────────────────────────────────────

    pub fn not_found(lang: Language) -> String {
        match lang {
            Language::Fr => "Non trouvé".into(),
            Language::En => "Not found".into(),
            Language::Nl => "Niet gevonden".into(),
        }
    }

    pub fn unknown(lang: Language) -> String {
        match lang {
            Language::Fr => "Inconnu".into(),
            Language::En => "Unknown".into(),
            Language::Nl => "Onbekend".into(),
        }
    }

    pub fn yes(lang: Language) -> String {
        match lang {
            Language::Fr => "Oui".into(),
            Language::En => "Yes".into(),
            Language::Nl => "Ja".into(),
        }
    }

    pub fn no(lang: Language) -> String {
        match lang {
            Language::Fr => "Non".into(),
            Language::En => "No".into(),
            Language::Nl => "Nee".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_dutch() {
        assert_eq!(Language::parse("de"), Language::Nl);
        assert_eq!(Language::parse(""), Language::Nl);
        assert_eq!(Language::parse("xx"), Language::Nl);
    }

    #[test]
    fn known_codes_parse_case_insensitively() {
        assert_eq!(Language::parse("FR"), Language::Fr);
        assert_eq!(Language::parse(" en "), Language::En);
        assert_eq!(Language::parse("nl"), Language::Nl);
    }

    #[test]
    fn code_round_trips() {
        for lang in [Language::Nl, Language::Fr, Language::En] {
            assert_eq!(Language::parse(lang.code()), lang);
        }
    }

    #[test]
    fn verified_messages_carry_their_parameter() {
        for lang in [Language::Nl, Language::Fr, Language::En] {
            assert!(Messages::doctor_verified_riziv(lang, "12345-67").contains("12345-67"));
            assert!(Messages::doctor_verified_name_city(lang, "Peeters").contains("Peeters"));
            assert!(Messages::doctor_verified_name(lang, "Peeters").contains("Peeters"));
        }
    }

    #[test]
    fn name_mismatch_message_names_both_sides() {
        let msg = Messages::fraud_name_mismatch(Language::Nl, "Dr. Karel Janssens", "Jan Peeters");
        assert!(msg.contains("Dr. Karel Janssens"));
        assert!(msg.contains("Jan Peeters"));
    }

    #[test]
    fn dutch_texts_match_portal_contract() {
        // These exact strings are what the portal consumers display.
        assert_eq!(
            Messages::verdict_approved(Language::Nl),
            "Uw afwezigheidsattest is geldig en goedgekeurd."
        );
        assert_eq!(
            Messages::verdict_rejected(Language::Nl),
            "Uw afwezigheidsattest kon niet worden goedgekeurd."
        );
        assert_eq!(
            Messages::fraud_reason_not_found(Language::Nl),
            "Arts niet gevonden in geregistreerde artsen database"
        );
        assert_eq!(
            Messages::validation_signature_missing(Language::Nl),
            "Er ontbreekt een handtekening van de arts op het document"
        );
        assert_eq!(
            Messages::priority_doctor_unknown(Language::Nl),
            "Arts niet in database - mogelijk fraude"
        );
        assert_eq!(
            Messages::priority_signature_missing(Language::Nl),
            "Ontbrekende handtekening"
        );
    }

    #[test]
    fn future_date_violations_embed_the_date() {
        let msg = Messages::validation_start_date_future(Language::Nl, "31-12-2099");
        assert!(msg.contains("31-12-2099"));
        let msg = Messages::validation_cert_date_future(Language::En, "31-12-2099");
        assert!(msg.contains("31-12-2099"));
    }

    #[test]
    fn yes_no_labels_localized() {
        assert_eq!(Messages::yes(Language::Nl), "Ja");
        assert_eq!(Messages::no(Language::Nl), "Nee");
        assert_eq!(Messages::yes(Language::Fr), "Oui");
        assert_eq!(Messages::no(Language::En), "No");
    }
}
