//! Chat Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateChatRequest, UpdateChatRequest};
use crate::application::dto::response::{ChatResponse, ChatSummaryResponse};
use crate::application::services::{
    ChatError, ChatService, ChatServiceImpl, CreateChatDto, UpdateChatDto,
};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn map_chat_error(error: ChatError) -> AppError {
    match error {
        ChatError::Validation(msg) => AppError::Validation(msg),
        ChatError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Create a new chat
pub async fn create_chat(
    State(state): State<AppState>,
    Json(body): Json<CreateChatRequest>,
) -> Result<(StatusCode, Json<ChatResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let chat_service = ChatServiceImpl::new(state.chats());

    let create = CreateChatDto {
        chat_type: body.chat_type,
        participant_ids: body.participant_ids,
    };

    let chat = chat_service
        .create_chat(create)
        .await
        .map_err(map_chat_error)?;

    Ok((StatusCode::CREATED, Json(ChatResponse::from(chat))))
}

/// Get chat by ID
pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<Json<ChatResponse>, AppError> {
    let chat_service = ChatServiceImpl::new(state.chats());

    let chat = chat_service
        .get_chat(&chat_id)
        .await
        .map_err(map_chat_error)?
        .ok_or_else(|| AppError::NotFound("Chat not found".into()))?;

    Ok(Json(ChatResponse::from(chat)))
}

/// Update chat by ID (partial update)
pub async fn update_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
    Json(body): Json<UpdateChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let chat_service = ChatServiceImpl::new(state.chats());

    let update = UpdateChatDto {
        chat_type: body.chat_type,
        participant_ids: body.participant_ids,
        last_message_at: body.last_message_at,
    };

    let chat = chat_service
        .update_chat(&chat_id, update)
        .await
        .map_err(map_chat_error)?
        .ok_or_else(|| AppError::NotFound("Chat not found".into()))?;

    Ok(Json(ChatResponse::from(chat)))
}

/// Delete chat by ID
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let chat_service = ChatServiceImpl::new(state.chats());

    let deleted = chat_service
        .delete_chat(&chat_id)
        .await
        .map_err(map_chat_error)?;

    if !deleted {
        return Err(AppError::NotFound("Chat not found".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List all chats (summary views)
pub async fn list_chats(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatSummaryResponse>>, AppError> {
    let chat_service = ChatServiceImpl::new(state.chats());

    let chats = chat_service.list_chats().await.map_err(map_chat_error)?;

    Ok(Json(chats.into_iter().map(ChatSummaryResponse::from).collect()))
}
