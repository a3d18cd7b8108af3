use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{metadata, parser, pipeline};

pub async fn submit_user(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    tracing::info!("SubmitUser processed a request");

    let ip = metadata::client_ip(&headers, Some(addr.ip()), &state.config.trusted_proxies);
    state
        .submission_limiter
        .check(ip)
        .map_err(AppError::RateLimited)?;

    let submission = parser::read_submission(&headers, body).await;
    let created = pipeline::run(state.store.as_ref(), submission.as_ref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": format!("Success! User {} added.", created.first_name) })),
    ))
}
