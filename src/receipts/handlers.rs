use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info, instrument};

use super::services::store_receipt;
use crate::auth::Session;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReceiptResponse {
    pub status: &'static str,
    pub detail: ReceiptDetail,
}

#[derive(Debug, Serialize)]
pub struct ReceiptDetail {
    pub key: String,
    pub url: String,
}

/// POST /parse-receipt/ (multipart, `file` field). The image is stored for
/// the parsing collaborator; the response tells the client where it went.
#[instrument(skip(state, mp))]
pub async fn upload_receipt(
    State(state): State<AppState>,
    session: Session,
    mut mp: Multipart,
) -> Result<(StatusCode, Json<ReceiptResponse>), ApiError> {
    let mut file = None;
    while let Ok(Some(field)) = mp.next_field().await {
        if field.name() == Some("file") {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".into());
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            file = Some((data, content_type));
        }
    }
    let Some((data, content_type)) = file else {
        return Err(ApiError::Precondition("file is required"));
    };

    let stored = store_receipt(&state, session.user_id, data, &content_type)
        .await
        .map_err(|e| ApiError::Network(format!("{e:#}")))?;

    info!(key = %stored.key, "receipt stored");
    Ok((
        StatusCode::OK,
        Json(ReceiptResponse {
            status: "stored",
            detail: ReceiptDetail {
                key: stored.key,
                url: stored.url,
            },
        }),
    ))
}
