//! SQLite schema definition.

/// Complete database schema for biometrics.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL DEFAULT '',
    birth_date TEXT NOT NULL,                    -- YYYY-MM-DD
    height REAL NOT NULL,                        -- meters
    weight REAL NOT NULL,                        -- kilograms
    biological_gender TEXT NOT NULL,             -- M or F
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);
"#;
