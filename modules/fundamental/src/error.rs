use actix_http::StatusCode;
use actix_web::body::BoxBody;
use actix_web::{HttpResponse, ResponseError};
use heroes_common::error::{ErrorInformation, ValidationErrors};
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entity, named by the argument, does not exist
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("Invalid request. Content-Type must be application/json.")]
    ContentType,
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::ContentType => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Any(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            Self::NotFound(_) | Self::ContentType => {
                response.json(ErrorInformation::summary(self.to_string()))
            }
            Self::Validation(errors) => {
                log::debug!("rejecting request: {}", errors.join("; "));
                response.json(ValidationErrors::default())
            }
            Self::Database(err) => {
                log::warn!("database error: {err}");
                response.json(ErrorInformation::new("Database error", err))
            }
            Self::Any(err) => {
                log::warn!("unexpected error: {err}");
                response.json(ErrorInformation::new("System unknown", err))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn render(err: Error) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let body = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn not_found() {
        assert_eq!(
            render(Error::NotFound("Hero")).await,
            (StatusCode::NOT_FOUND, json!({"error": "Hero not found"}))
        );
    }

    #[actix_web::test]
    async fn validation_hides_details() {
        assert_eq!(
            render(Error::validation("description too short")).await,
            (
                StatusCode::BAD_REQUEST,
                json!({"errors": ["validation errors"]})
            )
        );
    }

    #[actix_web::test]
    async fn content_type() {
        assert_eq!(
            render(Error::ContentType).await,
            (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid request. Content-Type must be application/json."})
            )
        );
    }

    #[actix_web::test]
    async fn database() {
        let (status, body) = render(Error::Database(DbErr::Custom("boom".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], json!("Database error"));
    }
}
