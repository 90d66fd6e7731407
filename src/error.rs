use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("movie {0} not found")]
    NotFound(i32),

    #[error("movie database request failed: {0}")]
    ExternalService(#[from] reqwest::Error),

    #[error("movie database returned incomplete data: {0}")]
    MalformedData(String),

    #[error("{0}")]
    InvalidForm(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalService(_) | AppError::MalformedData(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "request rejected");
        }

        let body = crate::templates::error_page(status, self.to_string());
        (status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
