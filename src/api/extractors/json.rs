//! JSON body extractor with contract-conformant rejections.
//!
//! Axum's stock `Json` extractor rejects malformed bodies with plain-text
//! 400/415/422 responses. The `/bfhl` contract requires every request fault
//! to surface as 400 with a JSON `detail` field, so this wrapper remaps the
//! rejection to `AppError::BadRequest`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
