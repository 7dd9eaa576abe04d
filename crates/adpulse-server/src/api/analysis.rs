use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use adpulse_analysis::CopyAnalysisResult;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct CopyAuditRequest {
    pub text: String,
    pub objective: String,
}

pub(super) async fn audit_copy(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<CopyAuditRequest>,
) -> Result<Json<CopyAnalysisResult>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "text must not be empty",
        ));
    }

    let result = state.analyzer.analyze(&request.text, &request.objective).await;
    Ok(Json(result))
}
