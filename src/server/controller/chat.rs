use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatMessageDto, SendChatMessageDto},
    },
    server::{
        controller::param::ConversationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::chat::ChatMessage,
        service::chat::ChatService,
        state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Send a message about an order.
///
/// # Access Control
/// - The order's customer, its assigned shipper, or an admin writing as support
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/messages",
    tag = CHAT_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = SendChatMessageDto,
    responses(
        (status = 201, description = "Message sent", body = ChatMessageDto),
        (status = 400, description = "Empty or too long message, or no shipper yet", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not part of the order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(payload): Json<SendChatMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = ChatService::new(&state.db)
        .send(order_id, &user, &payload.message)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// List the messages of an order, oldest first.
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/messages",
    tag = CHAT_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Messages of the order", body = Vec<ChatMessageDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not part of the order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_messages(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages = ChatService::new(&state.db)
        .get_by_order(order_id, &user)
        .await?;

    let dtos: Vec<ChatMessageDto> = messages.into_iter().map(ChatMessage::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List every message between a customer and a shipper, oldest first.
#[utoipa::path(
    get,
    path = "/api/chats/conversation",
    tag = CHAT_TAG,
    params(
        ("user_id" = i32, Query, description = "Customer user ID"),
        ("shipper_id" = i32, Query, description = "Shipper ID")
    ),
    responses(
        (status = 200, description = "Messages of the conversation", body = Vec<ChatMessageDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is neither side of the conversation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ConversationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages = ChatService::new(&state.db)
        .get_conversation(params.user_id, params.shipper_id, &user)
        .await?;

    let dtos: Vec<ChatMessageDto> = messages.into_iter().map(ChatMessage::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mark a received message as read.
#[utoipa::path(
    put,
    path = "/api/chats/{message_id}/read",
    tag = CHAT_TAG,
    params(
        ("message_id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked as read", body = ChatMessageDto),
        (status = 400, description = "Message was sent by the caller", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not part of the order", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_message_read(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = ChatService::new(&state.db)
        .mark_read(message_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}
