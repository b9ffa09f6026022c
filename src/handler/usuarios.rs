use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use usuarios_store::CredentialRecord;

use crate::{
    api::AppState,
    handler::{ApiMessage, ApiResult, Payload, message},
};

pub fn usuarios_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{login}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn list_users(State(directory): State<AppState>) -> Json<Vec<CredentialRecord>> {
    Json(directory.list())
}

async fn get_user(
    State(directory): State<AppState>,
    Path(login): Path<String>,
) -> ApiResult<Json<CredentialRecord>> {
    Ok(Json(directory.get(&login)?))
}

async fn create_user(
    State(directory): State<AppState>,
    Payload(payload): Payload,
) -> ApiResult<ApiMessage> {
    let record = directory.create(payload.into_new_user()?)?;
    Ok(message(
        StatusCode::CREATED,
        format!("{} criado com sucesso", record.login),
    ))
}

async fn update_user(
    State(directory): State<AppState>,
    Path(login): Path<String>,
    Payload(payload): Payload,
) -> ApiResult<Json<CredentialRecord>> {
    Ok(Json(directory.update(&login, payload.into_password_change())?))
}

async fn delete_user(
    State(directory): State<AppState>,
    Path(login): Path<String>,
) -> ApiResult<StatusCode> {
    let removed = directory.delete(&login)?;
    log::info!("{} deletado com sucesso", removed.login);
    Ok(StatusCode::NO_CONTENT)
}
