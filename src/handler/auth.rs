use axum::{Router, extract::State, http::StatusCode, routing::post};

use crate::{
    api::AppState,
    handler::{ApiMessage, ApiResult, Payload, message},
};

pub fn auth_router() -> Router<AppState> {
    Router::new().route("/", post(authenticate))
}

async fn authenticate(
    State(directory): State<AppState>,
    Payload(payload): Payload,
) -> ApiResult<ApiMessage> {
    let attempt = payload.into_login_attempt()?;
    directory.authenticate(&attempt)?;
    Ok(message(
        StatusCode::ACCEPTED,
        format!("{} autenticado com sucesso", attempt.login),
    ))
}
