//! Patient database operations.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{NewPatient, PatientChanges, PatientRecord};

const PATIENT_COLUMNS: &str =
    "id, name, birth_date, height, weight, biological_gender, created_at";

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<PatientRecord> {
    Ok(PatientRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_date: row.get(2)?,
        height: row.get(3)?,
        weight: row.get(4)?,
        biological_gender: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Column assignments for the supplied fields only.
fn assignments(changes: &PatientChanges) -> Vec<(&'static str, Value)> {
    let mut sets = Vec::new();
    if let Some(name) = &changes.name {
        sets.push(("name", Value::Text(name.clone())));
    }
    if let Some(height) = changes.height {
        sets.push(("height", Value::Real(height)));
    }
    if let Some(weight) = changes.weight {
        sets.push(("weight", Value::Real(weight)));
    }
    if let Some(gender) = changes.biological_gender {
        sets.push(("biological_gender", Value::Text(gender.code().to_string())));
    }
    if let Some(birth_date) = changes.birth_date {
        sets.push((
            "birth_date",
            Value::Text(birth_date.format(BIRTH_DATE_FORMAT).to_string()),
        ));
    }
    sets
}

impl Database {
    /// Insert a new patient, returning its id.
    pub fn insert_patient(&self, patient: &NewPatient) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO patients (name, birth_date, height, weight, biological_gender)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                patient.name,
                patient.birth_date.format(BIRTH_DATE_FORMAT).to_string(),
                patient.height,
                patient.weight,
                patient.biological_gender.code(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<PatientRecord>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?"),
                [id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Check whether a patient exists.
    pub fn patient_exists(&self, id: i64) -> DbResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM patients WHERE id = ?", [id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// List all patients ordered by name.
    pub fn list_patients(&self) -> DbResult<Vec<PatientRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PATIENT_COLUMNS} FROM patients ORDER BY name, id"))?;

        let rows = stmt.query_map([], patient_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Apply a partial update. Only the supplied columns are written.
    ///
    /// Returns `false` when no patient has this id. An empty change set
    /// writes nothing and only reports existence.
    pub fn update_patient(&self, id: i64, changes: &PatientChanges) -> DbResult<bool> {
        let sets = assignments(changes);
        if sets.is_empty() {
            return self.patient_exists(id);
        }

        let set_clause = sets
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE patients SET {set_clause} WHERE id = ?{}", sets.len() + 1);

        let mut values: Vec<Value> = sets.into_iter().map(|(_, value)| value).collect();
        values.push(Value::Integer(id));

        let rows_affected = self.conn.execute(&sql, params_from_iter(values))?;
        Ok(rows_affected > 0)
    }

    /// Delete a patient.
    pub fn delete_patient(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patients WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
