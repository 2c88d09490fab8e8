use axum::Json;
use serde::Serialize;

use crate::catalog::{self, Conference};

#[derive(Debug, Serialize)]
pub struct ConferencesResponse {
    pub conferences: &'static [Conference],
}

/// GET /api/v1/conferences
/// The static catalog, in display order. Front ends build their pickers from it.
pub async fn list_conferences() -> Json<ConferencesResponse> {
    Json(ConferencesResponse {
        conferences: catalog::all(),
    })
}
