use axum::Json;
use charitable_core::VolunteerShift;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ShiftPreviewRequest {
    pub hours: f64,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShiftPreviewResponse {
    pub hours: f64,
    pub display: String,
    pub skills: Vec<String>,
    pub summary: String,
}

/// Validates a shift from the volunteer form and returns how it will be shown.
#[tracing::instrument(name = "Preview shift", skip(request))]
pub async fn preview_shift(
    Json(request): Json<ShiftPreviewRequest>,
) -> Result<Json<ShiftPreviewResponse>, ApiError> {
    let shift = VolunteerShift::new(request.hours, request.skills)?;

    Ok(Json(ShiftPreviewResponse {
        hours: shift.hours().value(),
        display: shift.hours().to_string(),
        skills: shift.skills().iter().map(ToString::to_string).collect(),
        summary: shift.summary(),
    }))
}
