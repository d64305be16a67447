//! HTTP endpoint around the speller.
//!
//! ## Endpoints
//! - `GET /api/spell?word=<word>` - resolve one word
//! - `GET /health` - dictionary status

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use spellwise::speller::error::SpellerError;
use spellwise::speller::Speller;

#[derive(Debug, Deserialize)]
struct SpellQuery {
    word: Option<String>,
}

pub fn router(speller: Arc<Speller>) -> Router {
    Router::new()
        .route("/api/spell", get(spell))
        .route("/health", get(health_check))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(speller)
}

pub async fn serve(speller: Arc<Speller>, addr: SocketAddr) -> anyhow::Result<()> {
    // warm up so the first request doesn't pay for the fetch
    let warm = speller.clone();
    tokio::task::spawn_blocking(move || {
        warm.dictionary();
    });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", addr);

    axum::serve(listener, router(speller))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("Shutting down");
        })
        .await?;

    Ok(())
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

async fn spell(State(speller): State<Arc<Speller>>, Query(query): Query<SpellQuery>) -> Response {
    let word = query.word.unwrap_or_default();

    // the first resolution may block on the word-list fetch
    let result = tokio::task::spawn_blocking(move || speller.resolve(&word)).await;

    match result {
        Ok(Ok(correction)) => Json(correction).into_response(),
        Ok(Err(e @ SpellerError::EmptyInput)) => error(StatusCode::BAD_REQUEST, &e.to_string()),
        Ok(Err(e)) => {
            log::error!("Resolution failed: {}", e);
            error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(e) => {
            log::error!("Resolution task failed: {}", e);
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}

async fn health_check(State(speller): State<Arc<Speller>>) -> impl IntoResponse {
    let body = match speller.loaded_dictionary() {
        Some(dictionary) => serde_json::json!({
            "status": "ok",
            "dictionary": dictionary.origin(),
            "words": dictionary.len(),
        }),
        None => serde_json::json!({ "status": "ok", "dictionary": "pending", "words": 0 }),
    };

    Json(body)
}
