//! User Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::application::dto::response::UserResponse;
use crate::application::services::{
    CreateUserDto, UpdateUserDto, UserError, UserService, UserServiceImpl,
};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn map_user_error(error: UserError) -> AppError {
    match error {
        UserError::Validation(msg) => AppError::Validation(msg),
        UserError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let user_service = UserServiceImpl::new(state.users());

    let create = CreateUserDto {
        display_name: body.display_name,
        public_key: body.public_key,
        phone_number: body.phone_number,
        avatar_url: body.avatar_url,
        phone_verified: body.phone_verified,
    };

    let user = user_service
        .create_user(create)
        .await
        .map_err(map_user_error)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user_service = UserServiceImpl::new(state.users());

    let user = user_service
        .get_user(&user_id)
        .await
        .map_err(map_user_error)?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(UserResponse::from(user)))
}

/// Update user by ID (partial update)
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let user_service = UserServiceImpl::new(state.users());

    let update = UpdateUserDto {
        display_name: body.display_name,
        avatar_url: body.avatar_url,
        last_active_at: body.last_active_at,
    };

    let user = user_service
        .update_user(&user_id, update)
        .await
        .map_err(map_user_error)?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_service = UserServiceImpl::new(state.users());

    let deleted = user_service
        .delete_user(&user_id)
        .await
        .map_err(map_user_error)?;

    if !deleted {
        return Err(AppError::NotFound("User not found".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let user_service = UserServiceImpl::new(state.users());

    let users = user_service.list_users().await.map_err(map_user_error)?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
