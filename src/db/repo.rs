//! Repository layer for database operations.
//!
//! All access to the three tables goes through `Repository`: single-row
//! inserts for each entity and a predefined full-table read per
//! `TableName`. Query text is fixed at compile time; caller input only
//! ever appears as bind parameters.

use crate::domain::{AppointmentRequest, Doctor, Patient, TableData, TableName};
use sqlx::sqlite::SqlitePool;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert a patient row and return its generated id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_patient(&self, patient: &Patient) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO patients (name, age, gender, vaccinate)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&patient.name)
        .bind(i64::from(patient.age))
        .bind(patient.gender.as_str())
        .bind(&patient.vaccination)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a doctor row and return its generated id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_doctor(&self, doctor: &Doctor) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO doctors (name, speciality, active)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&doctor.name)
        .bind(&doctor.speciality)
        .bind(doctor.active_label())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert an appointment row and return its generated id.
    ///
    /// The referenced patient and doctor ids are stored as given; no
    /// existence check is performed.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO appointments (patient_id, doctor_id, date, time)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(request.patient_id)
        .bind(request.doctor_id)
        .bind(request.date_string())
        .bind(request.time_string())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch all rows of a table in insertion order, stringified for
    /// rendering and export.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn fetch_table(&self, table: TableName) -> Result<TableData, sqlx::Error> {
        let rows = match table {
            TableName::Patients => {
                let rows: Vec<(i64, String, i64, String, String)> = sqlx::query_as(
                    "SELECT id, name, age, gender, vaccinate FROM patients ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?;
                rows.into_iter()
                    .map(|(id, name, age, gender, vaccinate)| {
                        vec![id.to_string(), name, age.to_string(), gender, vaccinate]
                    })
                    .collect()
            }
            TableName::Doctors => {
                let rows: Vec<(i64, String, String, String)> = sqlx::query_as(
                    "SELECT id, name, speciality, active FROM doctors ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?;
                rows.into_iter()
                    .map(|(id, name, speciality, active)| {
                        vec![id.to_string(), name, speciality, active]
                    })
                    .collect()
            }
            TableName::Appointments => {
                let rows: Vec<(i64, i64, i64, String, String)> = sqlx::query_as(
                    "SELECT id, patient_id, doctor_id, date, time FROM appointments ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?;
                rows.into_iter()
                    .map(|(id, patient_id, doctor_id, date, time)| {
                        vec![
                            id.to_string(),
                            patient_id.to_string(),
                            doctor_id.to_string(),
                            date,
                            time,
                        ]
                    })
                    .collect()
            }
        };

        Ok(TableData {
            name: table,
            columns: table.columns().iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }
}
