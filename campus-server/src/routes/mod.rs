pub mod auth;
pub mod calendar;
pub mod users;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_core::error::CampusError;
use serde::Serialize;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(calendar::router())
        .with_state(state)
}

/// Plain `{ success, message }` body used by every endpoint that has no payload
#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Json<Self> {
        Json(MessageResponse {
            success: true,
            message: message.into(),
        })
    }
}

/// Convert errors to HTTP responses
pub struct AppError {
    status: StatusCode,
    error: anyhow::Error,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError {
            status: StatusCode::BAD_REQUEST,
            error: anyhow::anyhow!(message.into()),
        }
    }
}

fn status_for(err: &anyhow::Error) -> StatusCode {
    match err.downcast_ref::<CampusError>() {
        Some(CampusError::MissingCredentials) => StatusCode::BAD_REQUEST,
        Some(CampusError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        Some(CampusError::UserExists(_)) => StatusCode::CONFLICT,
        Some(CampusError::UserNotFound(_)) | Some(CampusError::ScheduleNotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        Some(CampusError::UserStore(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = %self.error, "request failed");
        }

        let body = Json(MessageResponse {
            success: false,
            message: self.error.to_string(),
        });
        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let error = err.into();
        AppError {
            status: status_for(&error),
            error,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use campus_core::schedule::Schedule;
    use campus_core::users::UserStore;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::state::AppState;

    /// Router over the built-in schedules and a throwaway users file.
    pub fn app(users: &str) -> (TempDir, axum::Router) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.txt");
        std::fs::write(&path, users).unwrap();

        let mut schedules = BTreeMap::new();
        schedules.insert("courses".to_string(), Schedule::courses().unwrap());
        schedules.insert("meetings".to_string(), Schedule::meetings().unwrap());

        let state = AppState::new(UserStore::new(path), schedules);
        (dir, super::router(state))
    }

    pub async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }
}
