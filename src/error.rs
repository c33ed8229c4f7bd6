use axum::response::{IntoResponse, Response};
use http::StatusCode;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    PrintNotFound,
    // claim keeps "no such row" and "row already claimed" indistinguishable
    PrintNotFoundOrClaimed,
    InternalServerError(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::PrintNotFound => {
                (StatusCode::NOT_FOUND, "print not found".to_string()).into_response()
            }
            AppError::PrintNotFoundOrClaimed => (
                StatusCode::NOT_FOUND,
                "print not found or already claimed".to_string(),
            )
                .into_response(),
            AppError::InternalServerError(err) => {
                error!("internal server error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::InternalServerError(err.into())
    }
}
