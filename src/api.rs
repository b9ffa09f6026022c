use std::sync::Arc;

use axum::{
    Router, ServiceExt,
    extract::Request,
    http::{StatusCode, header},
    middleware::map_response,
    response::Response,
};
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use usuarios_store::UserDirectory;

pub(crate) type AppState = Arc<UserDirectory>;

pub(crate) fn api_router(directory: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/usuarios", crate::handler::usuarios::usuarios_router())
        .nest("/api/auth", crate::handler::auth::auth_router())
        .layer(cors)
        .with_state(directory)
}

// Applied outside the router, after axum has set Content-Length per route.
async fn strip_bodiless_headers(mut response: Response) -> Response {
    let status = response.status();
    if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED {
        response.headers_mut().remove(header::CONTENT_LENGTH);
        response.headers_mut().remove(header::CONTENT_TYPE);
    }
    response
}

pub(crate) fn start_api_server(
    listener: TcpListener,
    directory: AppState,
    cancel: CancellationToken,
) -> JoinHandle<std::io::Result<()>> {
    tokio::spawn(async move {
        let app = map_response(strip_bodiless_headers).layer(api_router(directory));

        match listener.local_addr() {
            Ok(addr) => log::info!("API server started on {}", addr),
            Err(e) => log::warn!("API server started, local address unknown: {}", e),
        }
        let result = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(shutdown_signal(cancel))
            .await;
        if let Err(e) = &result {
            log::error!("Error running API server: {}", e);
        }
        result
    })
}

async fn shutdown_signal(cancel: CancellationToken) {
    tokio::select! {
        _ = cancel.cancelled() => {
            log::info!("Shutting down API server...");
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
