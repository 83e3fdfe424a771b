use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::DatabaseError;
use crate::matching::DoctorRegistry;
use crate::models::*;
use crate::recorder::FraudCaseRepository;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ═══════════════════════════════════════════
// Doctor Registry
// ═══════════════════════════════════════════

pub fn insert_doctor(conn: &Connection, doctor: &RegisteredDoctor) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO doctors_riziv (riziv_number, first_name, last_name, city)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            doctor.riziv_number,
            doctor.first_name,
            doctor.last_name,
            doctor.city,
        ],
    )?;
    Ok(())
}

pub fn find_doctor_by_riziv(
    conn: &Connection,
    riziv: &str,
) -> Result<Option<RegisteredDoctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT riziv_number, first_name, last_name, city
         FROM doctors_riziv WHERE riziv_number = ?1",
    )?;

    let doctor = stmt
        .query_row(params![riziv], |row| {
            Ok(RegisteredDoctor {
                riziv_number: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                city: row.get(3)?,
            })
        })
        .optional()?;

    Ok(doctor)
}

pub fn search_doctors_by_last_name(
    conn: &Connection,
    last_name: &str,
) -> Result<Vec<RegisteredDoctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT riziv_number, first_name, last_name, city
         FROM doctors_riziv WHERE last_name LIKE ?1",
    )?;

    let rows = stmt.query_map(params![format!("%{last_name}%")], |row| {
        Ok(RegisteredDoctor {
            riziv_number: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            city: row.get(3)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn search_doctors_by_last_name_and_city(
    conn: &Connection,
    last_name: &str,
    city: &str,
) -> Result<Vec<RegisteredDoctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT riziv_number, first_name, last_name, city
         FROM doctors_riziv WHERE last_name LIKE ?1 AND city LIKE ?2",
    )?;

    let rows = stmt.query_map(
        params![format!("%{last_name}%"), format!("%{city}%")],
        |row| {
            Ok(RegisteredDoctor {
                riziv_number: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                city: row.get(3)?,
            })
        },
    )?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Registry view over a SQLite connection.
pub struct SqliteRegistry<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteRegistry<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl DoctorRegistry for SqliteRegistry<'_> {
    fn lookup_by_riziv(&self, riziv: &str) -> Result<Option<RegisteredDoctor>, DatabaseError> {
        find_doctor_by_riziv(self.conn, riziv)
    }

    fn lookup_by_last_name(
        &self,
        last_name: &str,
    ) -> Result<Vec<RegisteredDoctor>, DatabaseError> {
        search_doctors_by_last_name(self.conn, last_name)
    }

    fn lookup_by_last_name_and_city(
        &self,
        last_name: &str,
        city: &str,
    ) -> Result<Vec<RegisteredDoctor>, DatabaseError> {
        search_doctors_by_last_name_and_city(self.conn, last_name, city)
    }
}

// ═══════════════════════════════════════════
// Fraud Case Store
// ═══════════════════════════════════════════

pub fn insert_fraud_case(conn: &Connection, case: &FraudCase) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO fraud_cases (
            case_id, submission_date, submission_channel, submitter_company,
            document_type, claimed_riziv_number, claimed_doctor_name,
            claimed_start_date, claimed_end_date, patient_identifier,
            riziv_match_status, document_anomalies, priority_score,
            priority_reason, case_status, created_at, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            case.case_id.to_string(),
            case.submission_date.format(DATETIME_FORMAT).to_string(),
            case.submission_channel,
            case.submitter_company,
            case.document_type,
            case.claimed_riziv_number,
            case.claimed_doctor_name,
            case.claimed_start_date,
            case.claimed_end_date,
            case.patient_identifier,
            case.riziv_match_status.as_str(),
            case.document_anomalies,
            case.priority_score,
            case.priority_reason,
            case.case_status.as_str(),
            case.created_at.format(DATETIME_FORMAT).to_string(),
            case.updated_at.format(DATETIME_FORMAT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_fraud_case(conn: &Connection, case_id: &Uuid) -> Result<Option<FraudCase>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT case_id, submission_date, submission_channel, submitter_company,
                document_type, claimed_riziv_number, claimed_doctor_name,
                claimed_start_date, claimed_end_date, patient_identifier,
                riziv_match_status, document_anomalies, priority_score,
                priority_reason, case_status, created_at, updated_at
         FROM fraud_cases WHERE case_id = ?1",
    )?;

    type Row = (
        String,
        String,
        String,
        String,
        String,
        String,
        String,
        Option<String>,
        Option<String>,
        String,
        String,
        String,
        i64,
        String,
        String,
        String,
        String,
    );

    let row: Option<Row> = stmt
        .query_row(params![case_id.to_string()], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
                row.get(9)?,
                row.get(10)?,
                row.get(11)?,
                row.get(12)?,
                row.get(13)?,
                row.get(14)?,
                row.get(15)?,
                row.get(16)?,
            ))
        })
        .optional()?;

    let Some((
        case_id,
        submission_date,
        submission_channel,
        submitter_company,
        document_type,
        claimed_riziv_number,
        claimed_doctor_name,
        claimed_start_date,
        claimed_end_date,
        patient_identifier,
        riziv_match_status,
        document_anomalies,
        priority_score,
        priority_reason,
        case_status,
        created_at,
        updated_at,
    )) = row
    else {
        return Ok(None);
    };

    Ok(Some(FraudCase {
        case_id: Uuid::parse_str(&case_id).unwrap_or_default(),
        submission_date: NaiveDateTime::parse_from_str(&submission_date, DATETIME_FORMAT)
            .unwrap_or_default(),
        submission_channel,
        submitter_company,
        document_type,
        claimed_riziv_number,
        claimed_doctor_name,
        claimed_start_date,
        claimed_end_date,
        patient_identifier,
        riziv_match_status: RizivMatchStatus::from_str(&riziv_match_status)?,
        document_anomalies,
        priority_score,
        priority_reason,
        case_status: CaseStatus::from_str(&case_status)?,
        created_at: NaiveDateTime::parse_from_str(&created_at, DATETIME_FORMAT)
            .unwrap_or_default(),
        updated_at: NaiveDateTime::parse_from_str(&updated_at, DATETIME_FORMAT)
            .unwrap_or_default(),
    }))
}

pub fn count_fraud_cases(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM fraud_cases", [], |row| row.get(0))?;
    Ok(count)
}

/// Case store view over a SQLite connection.
pub struct SqliteCaseStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteCaseStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl FraudCaseRepository for SqliteCaseStore<'_> {
    fn insert(&self, case: &FraudCase) -> Result<(), DatabaseError> {
        insert_fraud_case(self.conn, case)
    }
}
