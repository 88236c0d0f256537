//! Patient API routes.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use biometrics_core::{
    BmiClass, CreatePatientRequest, PatientDetails, PatientRecord, PatientRegistry, UpdatePatientRequest,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Build the application router.
pub fn router(registry: PatientRegistry) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/patients", get(list_patients).post(create_patient))
        .route(
            "/api/patients/:id",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .with_state(registry)
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub details: PatientDetails,
    pub bmi_label: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub patients: Vec<PatientRecord>,
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn create_patient(
    State(registry): State<PatientRegistry>,
    body: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(request) = body?;
    let id = registry.create_patient(&request)?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: "Patient created",
            id,
        }),
    ))
}

async fn list_patients(State(registry): State<PatientRegistry>) -> ApiResult<Json<ListResponse>> {
    let patients = registry.list_patients()?;
    debug!(count = patients.len(), "listed patients");
    Ok(Json(ListResponse {
        success: true,
        patients,
    }))
}

async fn get_patient(
    State(registry): State<PatientRegistry>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DetailsResponse>> {
    let Path(id) = id?;
    let details = registry.patient_details(id)?;
    let bmi_label = details.metrics.bmi_classification.map(BmiClass::label);
    Ok(Json(DetailsResponse {
        success: true,
        details,
        bmi_label,
    }))
}

async fn update_patient(
    State(registry): State<PatientRegistry>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdatePatientRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = id?;
    let Json(request) = body?;
    registry.update_patient(id, &request)?;
    Ok(Json(json!({ "success": true, "message": "Patient updated" })))
}

async fn delete_patient(
    State(registry): State<PatientRegistry>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(id) = id?;
    registry.delete_patient(id)?;
    Ok(Json(json!({ "success": true, "message": "Patient deleted" })))
}
