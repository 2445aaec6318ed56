//! User maintenance endpoints

use axum::{Json, Router, extract::State, routing::get};
use campus_core::users::Credentials;
use serde::{Deserialize, Serialize};

use crate::routes::{AppError, MessageResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users).post(add_user).delete(remove_user))
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<Credentials>,
}

#[derive(Deserialize)]
pub struct AddUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct RemoveUserRequest {
    #[serde(default)]
    pub email: String,
}

/// GET /api/users - List every user record
async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, AppError> {
    let users = state.users().list()?;
    Ok(Json(UsersResponse {
        success: true,
        users,
    }))
}

/// POST /api/users - Register a user
async fn add_user(
    State(state): State<AppState>,
    Json(req): Json<AddUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.users().add(&req.email, &req.password)?;
    Ok(MessageResponse::ok("User added"))
}

/// DELETE /api/users - Remove a user by email
async fn remove_user(
    State(state): State<AppState>,
    Json(req): Json<RemoveUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.users().remove(&req.email)?;
    Ok(MessageResponse::ok("User removed"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{app, send};

    #[tokio::test]
    async fn add_list_remove() {
        let (_dir, app) = app("alice@campus.edu,secret\n");

        let (status, _) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({ "email": "bob@campus.edu", "password": "hunter2" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["users"].as_array().unwrap().len(), 2);
        assert_eq!(body["users"][1]["email"], "bob@campus.edu");

        let (status, body) = send(&app, "DELETE", "/api/users", Some(json!({ "email": "alice@campus.edu" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User removed");

        let (_, body) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(body["users"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_user_conflicts() {
        let (_dir, app) = app("alice@campus.edu,secret\n");

        let (status, body) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({ "email": "alice@campus.edu", "password": "other" })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn removing_unknown_user_is_not_found() {
        let (_dir, app) = app("alice@campus.edu,secret\n");

        let (status, _) = send(&app, "DELETE", "/api/users", Some(json!({ "email": "zed@campus.edu" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", "/api/users", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
