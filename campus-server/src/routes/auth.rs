//! Login endpoint

use axum::{Json, Router, extract::State, routing::post};
use campus_core::users::User;
use serde::{Deserialize, Serialize};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

/// POST /login - Check credentials against the users file
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state.users().authenticate(&req.email, &req.password)?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user,
    }))
}
