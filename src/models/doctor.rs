use serde::{Deserialize, Serialize};

/// One row of the registered-doctor registry. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredDoctor {
    /// National registration identifier, unique key of the registry.
    pub riziv_number: String,
    pub first_name: Option<String>,
    pub last_name: String,
    pub city: String,
}

impl RegisteredDoctor {
    /// "First Last" as registered, without a dangling space when the first
    /// name is not on file.
    pub fn full_name(&self) -> String {
        match self.first_name.as_deref().map(str::trim) {
            Some(first) if !first.is_empty() => format!("{} {}", first, self.last_name.trim()),
            _ => self.last_name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let doctor = RegisteredDoctor {
            riziv_number: "12345-67".into(),
            first_name: Some("Jan".into()),
            last_name: "Peeters".into(),
            city: "Gent".into(),
        };
        assert_eq!(doctor.full_name(), "Jan Peeters");
    }

    #[test]
    fn full_name_without_first_name_on_file() {
        let doctor = RegisteredDoctor {
            riziv_number: "12345-67".into(),
            first_name: None,
            last_name: "Peeters".into(),
            city: "Gent".into(),
        };
        assert_eq!(doctor.full_name(), "Peeters");

        let blank_first = RegisteredDoctor {
            first_name: Some("  ".into()),
            ..doctor
        };
        assert_eq!(blank_first.full_name(), "Peeters");
    }
}
