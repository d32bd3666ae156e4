use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::server::error::ApiError;

/// JSON body extractor that reports failures with the API's error envelope:
/// a missing or syntactically broken body is a 400, a body that parses but
/// does not match the expected schema is a 422.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(JsonRejection::JsonDataError(_)) => Err(ApiError::Unprocessable),
            Err(_) => Err(ApiError::BadRequest),
        }
    }
}
