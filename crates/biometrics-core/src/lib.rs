//! Biometrics Core Library
//!
//! Patient biometric records with health metrics derived on read.
//!
//! # Architecture
//!
//! ```text
//! request ──► validation ──► db (SQLite, patients table)
//!                                   │
//!                                   ▼
//!                           health metrics ──► response
//!                   (age, BMI, BMI class, BMR)
//! ```
//!
//! # Core Principle
//!
//! **Constraints are enforced at write time only.** Stored rows are trusted
//! on read; metrics that cannot be computed come back as `None`.
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types (PatientRecord, requests, validated changes)
//! - [`health`]: Pure metric functions (age, BMI, BMR)
//! - [`validation`]: Range and format checks for create/update

pub mod db;
pub mod health;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use db::{Database, DbError};
pub use health::{BmiClass, HealthMetrics};
pub use models::{
    BiologicalGender, CreatePatientRequest, NewPatient, NumberInput, PatientChanges,
    PatientRecord, UpdatePatientRequest,
};
pub use validation::{Field, ValidationError};

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// =========================================================================
// Registry Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Patient not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<DbError> for RegistryError {
    fn from(e: DbError) -> Self {
        RegistryError::Storage(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for RegistryError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        RegistryError::Storage(format!("Lock poisoned: {}", e))
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

// =========================================================================
// Patient Registry
// =========================================================================

/// Source of "today" for age calculations.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A stored record together with its derived metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientDetails {
    pub patient: PatientRecord,
    #[serde(flatten)]
    pub metrics: HealthMetrics,
}

/// Thread-safe entry point: validation, storage and metrics in one place.
///
/// The connection lock is held for the whole of each operation, so the
/// existence check and the write of an update or delete see the same row.
#[derive(Clone)]
pub struct PatientRegistry {
    db: Arc<Mutex<Database>>,
    clock: Clock,
}

impl PatientRegistry {
    /// Wrap an open database. "Today" comes from the local clock.
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            clock: Arc::new(local_today),
        }
    }

    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        Ok(Self::new(Database::open(path)?))
    }

    /// Create an in-memory registry (for testing).
    pub fn open_in_memory() -> RegistryResult<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    /// Replace the clock used as the reference date.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        let clock: Clock = Arc::new(clock);
        self.clock = clock;
        self
    }

    /// Reference date for age checks and metrics.
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Validate and store a new patient, returning the assigned id.
    pub fn create_patient(&self, request: &CreatePatientRequest) -> RegistryResult<i64> {
        let patient = validation::validate_new(request, self.today())?;
        let db = self.db.lock()?;
        let id = db.insert_patient(&patient)?;
        info!(id, "patient created");
        Ok(id)
    }

    /// Fetch a stored record.
    pub fn get_patient(&self, id: i64) -> RegistryResult<PatientRecord> {
        let db = self.db.lock()?;
        db.get_patient(id)?.ok_or(RegistryError::NotFound(id))
    }

    /// Fetch a record with its metrics, BMI and BMR rounded for display.
    pub fn patient_details(&self, id: i64) -> RegistryResult<PatientDetails> {
        let patient = self.get_patient(id)?;
        let metrics = HealthMetrics::for_record(&patient, self.today()).rounded();
        debug!(id, ?metrics, "computed patient metrics");
        Ok(PatientDetails { patient, metrics })
    }

    /// All records ordered by name.
    pub fn list_patients(&self) -> RegistryResult<Vec<PatientRecord>> {
        let db = self.db.lock()?;
        Ok(db.list_patients()?)
    }

    /// Apply a partial update.
    ///
    /// An unknown id is reported before the payload is validated.
    pub fn update_patient(&self, id: i64, request: &UpdatePatientRequest) -> RegistryResult<()> {
        let db = self.db.lock()?;
        if !db.patient_exists(id)? {
            return Err(RegistryError::NotFound(id));
        }

        let changes = validation::validate_changes(request, self.today())?;
        if !db.update_patient(id, &changes)? {
            return Err(RegistryError::NotFound(id));
        }
        info!(id, "patient updated");
        Ok(())
    }

    /// Remove a patient.
    pub fn delete_patient(&self, id: i64) -> RegistryResult<()> {
        let db = self.db.lock()?;
        if !db.delete_patient(id)? {
            return Err(RegistryError::NotFound(id));
        }
        info!(id, "patient deleted");
        Ok(())
    }
}
