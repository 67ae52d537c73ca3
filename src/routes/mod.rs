//! HTTP surface of the service: handlers, error translation and extractor setup.

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Serialize;

use crate::forms::FieldErrors;
use crate::services::{ServiceError, ServiceResult};

pub mod health;
pub mod museum;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ServiceError::NotFound(message) => ErrorBody::new(status, message.as_str()),
            ServiceError::Validation(errors) => {
                ErrorBody::new(status, "Validation failed").with_errors(errors.clone())
            }
            ServiceError::Repository(_) | ServiceError::Internal(_) => {
                ErrorBody::new(status, "Internal server error")
            }
        };
        HttpResponse::build(status).json(body)
    }
}

/// Runs a synchronous service call on the blocking thread pool.
pub(crate) async fn run_blocking<F, T>(call: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(call).await.map_err(|err| {
        log::error!("Blocking task failed: {err}");
        ServiceError::Internal(err.to_string())
    })?
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let body = ErrorBody::new(StatusCode::BAD_REQUEST, err.to_string());
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Malformed JSON bodies answer with the regular [`ErrorBody`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| bad_request(err))
}

/// Query strings that fail to deserialize (e.g. `page=abc`) answer with the regular [`ErrorBody`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| bad_request(err))
}

/// Registers every route and extractor configuration on an app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health::health_check)
        .service(museum::list_museums)
        .service(museum::show_museum)
        .service(museum::create_museum)
        .service(museum::update_museum)
        .service(museum::delete_museum);
}
