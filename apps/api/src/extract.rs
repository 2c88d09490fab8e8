//! Request extractors that answer with `AppError` instead of axum's
//! plain-text rejections.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejection is a 400 `VALIDATION_ERROR` in the usual
/// error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
